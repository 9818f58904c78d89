//! Where a resolver gets its table from when the cache is empty.
//!
//! The resolver only depends on [`TableSource`]; the remote fetcher is the
//! production implementation and tests plug in fixtures.

use crate::error::Result;
use crate::fetch::{self, FetchOptions};
use crate::table::MimeTable;

/// Default mime-db document (jshttp/mime-db, served via jsDelivr).
pub const DEFAULT_DB_URL: &str = "https://cdn.jsdelivr.net/gh/jshttp/mime-db@master/db.json";

/// Produces a complete MIME table on demand.
pub trait TableSource: Send + Sync {
    fn load_table(&self) -> Result<MimeTable>;
}

/// Fetches the table over HTTP from `url`.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    pub url: String,
    pub options: FetchOptions,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_DB_URL)
    }
}

impl TableSource for RemoteSource {
    fn load_table(&self) -> Result<MimeTable> {
        tracing::info!("fetching MIME database from {}", self.url);
        let body = fetch::get(&self.url, &self.options)?;
        MimeTable::from_json_slice(&body)
    }
}
