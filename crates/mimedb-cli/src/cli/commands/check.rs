//! `mimedb check` – validate a local database file.

use anyhow::{Context, Result};
use mimedb_core::MimeTable;
use std::io::Write;
use std::path::Path;

/// Parses the file and prints how many types and extensions it holds.
pub fn run_check(path: &Path, out: &mut impl Write) -> Result<()> {
    let table = MimeTable::from_path(path)
        .with_context(|| format!("{} is not a usable MIME database", path.display()))?;
    let extensions: usize = table.iter().map(|(_, r)| r.extensions.len()).sum();
    writeln!(
        out,
        "{}: {} MIME types, {} extensions",
        path.display(),
        table.len(),
        extensions
    )?;
    Ok(())
}
