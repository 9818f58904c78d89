//! Extension extraction from filenames, paths and URLs.

use std::path::Path;

/// Separator accepted in front of an extension (`".jpg"` and `"jpg"` are the same).
pub const EXTENSION_SEPARATOR: char = '.';

/// Strips every leading separator from an extension.
pub fn strip_separators(extension: &str) -> &str {
    extension.trim_start_matches(EXTENSION_SEPARATOR)
}

/// Text after the last `.` of the last path component, without the dot.
///
/// `"a/b/test.pdf"` → `Some("pdf")`, `"archive.tar.gz"` → `Some("gz")`.
/// A leading dot counts: `".bashrc"` → `Some("bashrc")`.
/// `"README"` and `"file."` → `None`.
pub fn file_extension(filename: &str) -> Option<&str> {
    let name = Path::new(filename).file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once(EXTENSION_SEPARATOR)?;
    (!ext.is_empty()).then_some(ext)
}

/// Extracts the last path segment from a URL (query and fragment dropped).
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
