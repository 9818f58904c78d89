//! CLI for the mimedb MIME type lookup.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimedb_core::config::{self, MimeDbConfig};
use mimedb_core::MimeResolver;
use std::io;
use std::path::{Path, PathBuf};

use commands::{run_check, run_ext, run_extensions, run_file, run_url};

/// Top-level CLI for mimedb.
#[derive(Debug, Parser)]
#[command(name = "mimedb")]
#[command(about = "mimedb: look up MIME types by extension, filename or URL", long_about = None)]
pub struct Cli {
    /// Use this mime-db JSON file instead of fetching the remote database.
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log at debug level (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more extensions ("jpg" or ".jpg").
    Ext {
        #[arg(required = true)]
        extensions: Vec<String>,
    },

    /// Resolve one or more filenames or paths by their extension.
    File {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Resolve a URL by the last segment of its path.
    Url { url: String },

    /// List the extensions recorded for a MIME type.
    Extensions {
        /// MIME type, e.g. "image/jpeg".
        mime_type: String,
    },

    /// Validate a local mime-db JSON file.
    Check {
        /// Path to the database file.
        path: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if let CliCommand::Check { path } = &self.command {
            return run_check(path, &mut out);
        }

        let resolver = build_resolver(self.db.as_deref())?;
        match self.command {
            CliCommand::Ext { extensions } => run_ext(&resolver, &extensions, &mut out),
            CliCommand::File { names } => run_file(&resolver, &names, &mut out),
            CliCommand::Url { url } => run_url(&resolver, &url, &mut out),
            CliCommand::Extensions { mime_type } => run_extensions(&resolver, &mime_type, &mut out),
            CliCommand::Check { .. } => Ok(()),
        }
    }
}

/// Resolver per config; `--db` replaces the config's `offline_db` and must load.
fn build_resolver(db: Option<&Path>) -> Result<MimeResolver> {
    let cfg = effective_config(config::load_or_init(), db)?;
    tracing::debug!("effective config: {:?}", cfg);

    let resolver = MimeResolver::from_config(&cfg);
    if let Some(path) = db {
        resolver
            .try_load_from_file(path)
            .with_context(|| format!("loading MIME database {}", path.display()))?;
    }
    Ok(resolver)
}

/// With `--db` the run needs no config file, so an unreadable one falls back to defaults.
fn effective_config(loaded: Result<MimeDbConfig>, db: Option<&Path>) -> Result<MimeDbConfig> {
    let mut cfg = match (loaded, db) {
        (Ok(cfg), _) => cfg,
        (Err(err), Some(_)) => {
            tracing::warn!("config unavailable ({:#}); using defaults", err);
            MimeDbConfig::default()
        }
        (Err(err), None) => return Err(err.context("loading config")),
    };
    if db.is_some() {
        cfg.offline_db = None;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests;
