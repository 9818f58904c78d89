//! Error type for table fetch, file load and parse failures.

use std::path::PathBuf;

/// Failure while obtaining or parsing a MIME table.
///
/// Lookups themselves never fail: an unknown extension resolves to the fallback type.
#[derive(Debug, thiserror::Error)]
pub enum MimeDbError {
    /// Curl reported a transport error (DNS, connect, TLS, etc.).
    #[error("fetch failed: {0}")]
    Fetch(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Body was not a valid MIME table document.
    #[error("invalid MIME table: {0}")]
    Parse(#[from] serde_json::Error),
    /// Local database file could not be read.
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MimeDbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_names_url_and_code() {
        let err = MimeDbError::Http {
            url: "http://127.0.0.1/db.json".to_string(),
            code: 404,
        };
        assert_eq!(err.to_string(), "GET http://127.0.0.1/db.json returned HTTP 404");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = MimeDbError::Io {
            path: PathBuf::from("/nope/db.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/nope/db.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
