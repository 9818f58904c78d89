//! Logging init: append to a file under the XDG state dir, or stderr if that fails.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,mimedb=debug,mimedb_core=debug";
const VERBOSE_FILTER: &str = "debug,mimedb=trace,mimedb_core=trace";

/// Where log lines ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Hands out clones of the log file; stderr if a clone fails.
struct SharedFile(File);

enum FileOrStderr {
    File(File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// `RUST_LOG` if set, otherwise the built-in default for the verbosity.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// `~/.local/state/mimedb/mimedb.log` (the directory is created if missing).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mimedb")?;
    Ok(xdg_dirs.place_state_file("mimedb.log")?)
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok((file, path))
}

/// Installs the global subscriber. Call once, early in `main`.
///
/// Errors only if a global subscriber is already set.
pub fn init_logging(verbose: bool) -> Result<LogTarget> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_ansi(false);

    match open_log_file() {
        Ok((file, path)) => {
            builder
                .with_writer(BoxMakeWriter::new(SharedFile(file)))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            tracing::info!("mimedb logging initialized at {}", path.display());
            Ok(LogTarget::File(path))
        }
        Err(err) => {
            builder
                .with_writer(io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            tracing::debug!("log file unavailable ({:#}); logging to stderr", err);
            Ok(LogTarget::Stderr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_in_state_dir() {
        // No HOME (or a read-only one) in some sandboxes; nothing to check then.
        if let Ok(path) = log_file_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("mimedb.log"));
            assert!(path.parent().is_some_and(|p| p.ends_with("mimedb")));
        }
    }
}
