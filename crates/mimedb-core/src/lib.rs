//! mimedb: MIME type lookup by extension, filename or URL, backed by a
//! mime-db table that is fetched once and cached, or loaded from a local file.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod source;
pub mod table;

pub use error::{MimeDbError, Result};
pub use resolver::{MimeResolver, FALLBACK_MIME_TYPE};
pub use source::{RemoteSource, TableSource, DEFAULT_DB_URL};
pub use table::{MimeRecord, MimeTable};
