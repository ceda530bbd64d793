//! Shared HTTP request handling
//!
//! Every operation goes through the same flow: send a GET, reject any status
//! other than `200 OK` with the raw body text, then decode the body either as
//! one JSON object or as a stream of JSON values read chunk by chunk.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, RobtexError};
use crate::utils::json_stream::JsonStreamDecoder;
use crate::utils::log_sanitizer::{redact_url, truncate_for_log};

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Send a GET request and return the response once its status is `200 OK`.
    ///
    /// # Returns
    /// * `Ok(response)` - body not yet read
    /// * `Err(RobtexError::Transport)` - the exchange failed
    /// * `Err(RobtexError::Status)` - any other status, with the full body text
    pub async fn get(client: &Client, url: Url) -> Result<Response> {
        log::debug!("[robtex] GET {}", redact_url(&url));

        let response = client.get(url).send().await?;

        let status = response.status();
        log::debug!("[robtex] Response Status: {}", status.as_u16());

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            log::debug!("[robtex] Error Body: {}", truncate_for_log(&body));
            return Err(RobtexError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Read the whole body and decode it as a single JSON value.
    ///
    /// The whole body must be that one value: trailing whitespace is accepted,
    /// anything else after it (a second object, stray text) is a
    /// `RobtexError::Decode`. This is stricter than a reader that takes the first
    /// value and ignores the rest.
    pub async fn read_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = response.bytes().await?;
        log::debug!(
            "[robtex] Response Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&body))
        );

        serde_json::from_slice(&body).map_err(|e| {
            log::debug!("[robtex] JSON parse failed: {e}");
            RobtexError::Decode(e)
        })
    }

    /// Decode the body as a stream of JSON values, one chunk at a time.
    ///
    /// The first malformed value aborts the read; values decoded before it are
    /// dropped with the error.
    pub async fn read_json_stream<T>(mut response: Response) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut decoder = JsonStreamDecoder::new();
        let mut items = Vec::new();

        while let Some(chunk) = response.chunk().await? {
            decoder.feed(&chunk, &mut items).map_err(|e| {
                log::debug!(
                    "[robtex] Stream parse failed after {} values: {e}",
                    items.len()
                );
                RobtexError::Decode(e)
            })?;
        }
        decoder.finish(&mut items).map_err(|e| {
            log::debug!("[robtex] Stream ended inside a value: {e}");
            RobtexError::Decode(e)
        })?;

        log::debug!("[robtex] Decoded {} stream values", items.len());
        Ok(items)
    }
}
