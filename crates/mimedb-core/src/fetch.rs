//! HTTP GET of a remote MIME database.
//!
//! Uses the curl crate (libcurl). One attempt, no retry; timeouts only when configured.

use std::time::Duration;

use crate::error::{MimeDbError, Result};

/// Transfer limits for a fetch. `None` leaves the libcurl default (no limit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Performs a GET and returns the response body.
///
/// Follows redirects. A non-2xx final status is an error.
/// Runs in the current thread and blocks until the transfer ends.
pub fn get(url: &str, opts: &FetchOptions) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(MimeDbError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!(url, bytes = body.len(), "fetched MIME database");
    Ok(body)
}
