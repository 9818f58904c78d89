//! `mimedb ext|file|url|extensions`: lookups against the resolver.

use anyhow::{bail, Result};
use mimedb_core::MimeResolver;
use std::io::Write;

/// One `<ext>\t<mime>` line per extension.
pub fn run_ext(resolver: &MimeResolver, extensions: &[String], out: &mut impl Write) -> Result<()> {
    for ext in extensions {
        let mime = resolver.extension_to_mime_type(ext)?;
        writeln!(out, "{ext}\t{mime}")?;
    }
    Ok(())
}

/// One `<name>\t<mime>` line per filename.
pub fn run_file(resolver: &MimeResolver, names: &[String], out: &mut impl Write) -> Result<()> {
    for name in names {
        let mime = resolver.file_name_to_mime_type(name)?;
        writeln!(out, "{name}\t{mime}")?;
    }
    Ok(())
}

pub fn run_url(resolver: &MimeResolver, url: &str, out: &mut impl Write) -> Result<()> {
    let mime = resolver.url_to_mime_type(url)?;
    writeln!(out, "{mime}")?;
    Ok(())
}

/// Extensions space-separated on one line; an empty line if the type has none.
pub fn run_extensions(resolver: &MimeResolver, mime_type: &str, out: &mut impl Write) -> Result<()> {
    match resolver.mime_type_extensions(mime_type)? {
        Some(extensions) => {
            writeln!(out, "{}", extensions.join(" "))?;
            Ok(())
        }
        None => bail!("unknown MIME type: {mime_type}"),
    }
}
