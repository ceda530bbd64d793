//! Client configuration

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{Result, RobtexError};

use super::{ApiTier, DEFAULT_TIMEOUT_SECS, RobtexClient, create_http_client, default_user_agent};

/// Builder for [`RobtexClient`].
///
/// ```rust,no_run
/// use std::time::Duration;
/// use robtex_client::RobtexClient;
///
/// # fn demo() -> robtex_client::Result<()> {
/// let client = RobtexClient::builder()
///     .api_key("your-key")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: Option<Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            http_client: None,
        }
    }

    /// API key; an empty key selects the free tier.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Override the tier endpoint. Any path prefix on `base_url` is kept.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request timeout, 5 seconds by default. Ignored with [`http_client`](Self::http_client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header. Ignored with [`http_client`](Self::http_client).
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured transport instead of building one.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<RobtexClient> {
        let base_url = match self.base_url {
            Some(raw) => parse_base_url(&raw)?,
            None => ApiTier::for_key(&self.api_key).url(),
        };

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
                create_http_client(self.timeout, &user_agent)?
            }
        };

        Ok(RobtexClient {
            client,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(RobtexError::InvalidUrl(format!(
            "{raw} cannot carry path segments"
        )));
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_key() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.tier(), ApiTier::Free);
        assert_eq!(client.base_url().as_str(), "https://freeapi.robtex.com/");

        let client = ClientBuilder::new().api_key("k").build().unwrap();
        assert_eq!(client.tier(), ApiTier::Pro);
        assert_eq!(client.base_url().as_str(), "https://proapi.robtex.com/");
    }

    #[test]
    fn base_url_override_keeps_tier_from_key() {
        let client = ClientBuilder::new()
            .api_key("k")
            .base_url("http://localhost:9000/robtex")
            .build()
            .unwrap();
        assert_eq!(client.tier(), ApiTier::Pro);
        assert_eq!(client.base_url().path(), "/robtex");
    }

    #[test]
    fn malformed_base_url_rejected() {
        let result = ClientBuilder::new().base_url("not a url").build();
        assert!(matches!(result, Err(RobtexError::InvalidUrl(_))));
    }

    #[test]
    fn opaque_base_url_rejected() {
        let result = ClientBuilder::new().base_url("mailto:ops@example.com").build();
        assert!(matches!(result, Err(RobtexError::InvalidUrl(_))));
    }

    #[test]
    fn custom_transport_accepted() {
        let client = ClientBuilder::new()
            .http_client(Client::new())
            .build()
            .unwrap();
        assert!(!client.has_api_key());
    }
}
