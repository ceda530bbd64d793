//! Robtex request construction and execution

use std::future::Future;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{Result, RobtexError};
use crate::http_client::HttpUtils;

use super::RobtexClient;

/// Query parameter carrying the API key.
const KEY_PARAM: &str = "key";

impl RobtexClient {
    /// Build the request URL for `segments` under the base URL.
    ///
    /// The base path prefix is preserved and each segment is percent-encoded on
    /// its own; empty segments are skipped, so an empty identifier yields
    /// `/ipquery` rather than `/ipquery/`. With an API key configured, `key` is
    /// set on the query string, keeping any other parameters of the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RobtexError::InvalidUrl(format!(
                    "{} cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments.iter().filter(|segment| !segment.is_empty()));

        if !self.api_key.is_empty() {
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| k != KEY_PARAM)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            url.query_pairs_mut()
                .clear()
                .extend_pairs(pairs)
                .append_pair(KEY_PARAM, &self.api_key);
        }

        Ok(url)
    }

    /// GET `segments` and decode the body as one JSON object.
    pub(crate) async fn fetch_json<T>(
        &self,
        cancel: &CancellationToken,
        segments: &[&str],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        with_cancel(cancel, async {
            let response = HttpUtils::get(&self.client, url).await?;
            HttpUtils::read_json(response).await
        })
        .await
    }

    /// GET `segments` and decode the body as a stream of JSON values.
    pub(crate) async fn fetch_json_stream<T>(
        &self,
        cancel: &CancellationToken,
        segments: &[&str],
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        with_cancel(cancel, async {
            let response = HttpUtils::get(&self.client, url).await?;
            HttpUtils::read_json_stream(response).await
        })
        .await
    }
}

/// Run `fut` until it completes or `cancel` fires.
///
/// On cancellation the in-flight future is dropped, which closes the connection
/// and the response body.
async fn with_cancel<T, F>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            log::debug!("[robtex] Request cancelled");
            Err(RobtexError::Cancelled)
        }
        result = fut => result,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client_with(base: &str, key: &str) -> RobtexClient {
        RobtexClient::builder()
            .api_key(key)
            .base_url(base)
            .build()
            .unwrap()
    }

    #[test]
    fn free_endpoint_has_no_key() {
        let client = RobtexClient::new("");
        let url = client.endpoint(&["ipquery", "199.19.54.1"]).unwrap();
        assert_eq!(url.as_str(), "https://freeapi.robtex.com/ipquery/199.19.54.1");
        assert!(url.query().is_none());
    }

    #[test]
    fn pro_endpoint_carries_key() {
        let client = RobtexClient::new("s3cret");
        let url = client.endpoint(&["pdns", "forward", "a.iana-servers.net"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://proapi.robtex.com/pdns/forward/a.iana-servers.net?key=s3cret"
        );
    }

    #[test]
    fn key_is_url_encoded() {
        let client = RobtexClient::new("a b&c=d");
        let url = client.endpoint(&["asquery", "1234"]).unwrap();
        assert_eq!(url.query(), Some("key=a+b%26c%3Dd"));
        let (k, v) = url.query_pairs().next().unwrap();
        assert_eq!((k.as_ref(), v.as_ref()), ("key", "a b&c=d"));
    }

    #[test]
    fn base_path_prefix_preserved() {
        let client = client_with("http://127.0.0.1:8080/api/v1", "");
        let url = client.endpoint(&["asquery", "1234"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/asquery/1234");

        let client = client_with("http://127.0.0.1:8080/api/v1/", "");
        let url = client.endpoint(&["asquery", "1234"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/asquery/1234");
    }

    #[test]
    fn existing_query_merged() {
        let client = client_with("http://127.0.0.1:8080/?format=json&key=old", "new");
        let url = client.endpoint(&["ipquery", "1.1.1.1"]).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("format".to_string(), "json".to_string()),
                ("key".to_string(), "new".to_string()),
            ]
        );
    }

    #[test]
    fn segment_slash_is_escaped() {
        let client = RobtexClient::new("");
        let url = client.endpoint(&["pdns", "reverse", "10.0.0.0/8"]).unwrap();
        assert_eq!(url.path(), "/pdns/reverse/10.0.0.0%2F8");
    }

    #[test]
    fn empty_segment_skipped() {
        let client = RobtexClient::new("");
        let url = client.endpoint(&["ipquery", ""]).unwrap();
        assert_eq!(url.as_str(), "https://freeapi.robtex.com/ipquery");

        let client = client_with("http://127.0.0.1:8080/api/v1/", "k");
        let url = client.endpoint(&["pdns", "forward", ""]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/pdns/forward?key=k");
    }

    #[test]
    fn ipv6_segment() {
        let client = RobtexClient::new("");
        let url = client.endpoint(&["ipquery", "2001:db8::1"]).unwrap();
        assert_eq!(url.path(), "/ipquery/2001:db8::1");
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = with_cancel(&cancel, std::future::pending::<Result<()>>()).await;
        assert!(matches!(result, Err(RobtexError::Cancelled)));
    }

    #[tokio::test]
    async fn completes_without_cancel() {
        let cancel = CancellationToken::new();
        let result = with_cancel(&cancel, async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
