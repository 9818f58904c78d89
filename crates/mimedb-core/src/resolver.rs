//! MIME type resolution over a lazily filled, replaceable table cache.
//!
//! The cache is empty until the first lookup fetches a table from the
//! resolver's [`TableSource`], or until [`MimeResolver::load_from_file`]
//! succeeds. Once filled it is never emptied; a successful file load swaps
//! in a new table, a failed one changes nothing.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::MimeDbConfig;
use crate::error::Result;
use crate::path::{file_extension, filename_from_url_path, strip_separators};
use crate::source::{RemoteSource, TableSource};
use crate::table::MimeTable;

/// Returned when no table entry lists the extension.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Resolves extensions, filenames and URLs to MIME types.
///
/// Cheap lookups clone an `Arc` of the current table out of the lock, so a
/// concurrent replacement never exposes a half-built table.
pub struct MimeResolver {
    source: Box<dyn TableSource>,
    table: Mutex<Option<Arc<MimeTable>>>,
}

impl MimeResolver {
    /// Empty resolver that fills itself from `source` on first use.
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            table: Mutex::new(None),
        }
    }

    /// Empty resolver backed by the mime-db document at `url`.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::new(RemoteSource::new(url))
    }

    /// Resolver whose cache already holds `table`; no fetch will happen.
    pub fn with_table(table: MimeTable) -> Self {
        Self {
            source: Box::new(RemoteSource::default()),
            table: Mutex::new(Some(Arc::new(table))),
        }
    }

    /// Remote resolver per config. A configured `offline_db` is loaded up front;
    /// if that load fails the resolver stays empty and falls back to fetching.
    pub fn from_config(cfg: &MimeDbConfig) -> Self {
        let source = RemoteSource::new(cfg.source_url.clone()).with_options(cfg.fetch_options());
        let resolver = Self::new(source);
        if let Some(path) = &cfg.offline_db {
            if !resolver.load_from_file(path) {
                tracing::warn!(
                    "offline database {} not loaded; will fetch {}",
                    path.display(),
                    cfg.source_url
                );
            }
        }
        resolver
    }

    pub fn is_loaded(&self) -> bool {
        self.slot().is_some()
    }

    // The guarded value is replaced whole, so a poisoned lock still holds a valid state.
    fn slot(&self) -> MutexGuard<'_, Option<Arc<MimeTable>>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current table, fetching it from the source if the cache is empty.
    ///
    /// The lock is held across the fetch so concurrent first callers share one fetch.
    pub fn table(&self) -> Result<Arc<MimeTable>> {
        let mut slot = self.slot();
        if let Some(table) = slot.as_ref() {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(self.source.load_table()?);
        tracing::debug!(entries = table.len(), "MIME table cached");
        *slot = Some(Arc::clone(&table));
        Ok(table)
    }

    /// MIME type for `extension` (`"jpg"` or `".jpg"`), or [`FALLBACK_MIME_TYPE`].
    ///
    /// Errors only when the cache is empty and the source fails.
    pub fn extension_to_mime_type(&self, extension: &str) -> Result<String> {
        let table = self.table()?;
        let ext = strip_separators(extension);
        Ok(table.lookup(ext).unwrap_or(FALLBACK_MIME_TYPE).to_string())
    }

    /// MIME type for the extension of the last component of `filename`.
    pub fn file_name_to_mime_type(&self, filename: &str) -> Result<String> {
        self.extension_to_mime_type(file_extension(filename).unwrap_or(""))
    }

    /// MIME type for the last path segment of `url`.
    pub fn url_to_mime_type(&self, url: &str) -> Result<String> {
        match filename_from_url_path(url) {
            Some(name) => self.file_name_to_mime_type(&name),
            None => self.extension_to_mime_type(""),
        }
    }

    /// Extensions recorded for `mime_type`, or `None` if the table has no such entry.
    pub fn mime_type_extensions(&self, mime_type: &str) -> Result<Option<Vec<String>>> {
        let table = self.table()?;
        Ok(table
            .record(mime_type)
            .map(|record| record.extensions.clone()))
    }

    /// Replaces the cached table with the one in `path`, reporting why on failure.
    pub fn try_load_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let table = MimeTable::from_path(path)?;
        let entries = table.len();
        *self.slot() = Some(Arc::new(table));
        tracing::info!(entries, "loaded MIME database from {}", path.display());
        Ok(())
    }

    /// Replaces the cached table with the one in `path`.
    ///
    /// Returns false (cache untouched) if the file is unreadable or not a valid table.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load_from_file(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to load MIME database {}: {}", path.display(), e);
                false
            }
        }
    }
}

impl Default for MimeResolver {
    fn default() -> Self {
        Self::new(RemoteSource::default())
    }
}
