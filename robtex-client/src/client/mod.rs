//! Robtex API client

mod api;
mod builder;
mod http;

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::Result;
use crate::types::{AsQueryResult, IpQueryResult, PassiveDnsRecord};

pub use builder::ClientBuilder;

/// Free API endpoint, used when no API key is configured.
pub const FREE_API_BASE_URL: &str = "https://freeapi.robtex.com";
/// Pro API endpoint, used when an API key is configured.
pub const PRO_API_BASE_URL: &str = "https://proapi.robtex.com";

/// Default request timeout (seconds)
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Service tier, selected by whether an API key is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiTier {
    Free,
    Pro,
}

impl ApiTier {
    /// `Free` for an empty key, `Pro` otherwise.
    pub fn for_key(api_key: &str) -> Self {
        if api_key.is_empty() {
            Self::Free
        } else {
            Self::Pro
        }
    }

    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Free => FREE_API_BASE_URL,
            Self::Pro => PRO_API_BASE_URL,
        }
    }

    #[allow(clippy::expect_used)]
    pub(crate) fn url(self) -> Url {
        Url::parse(self.base_url()).expect("endpoint constants are valid URLs")
    }
}

/// Create an HTTP client bounded by `timeout`.
pub(crate) fn create_http_client(timeout: Duration, user_agent: &str) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

pub(crate) fn default_user_agent() -> String {
    format!("robtex-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Robtex API client.
///
/// Holds no per-call state: clones share the underlying connection pool and a
/// single instance can serve concurrent calls.
#[derive(Clone)]
pub struct RobtexClient {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) api_key: String,
}

impl RobtexClient {
    /// Create a client for the tier matching `api_key` (empty = free tier).
    ///
    /// Every request is bounded by a 5 second timeout.
    #[allow(clippy::expect_used)]
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let client = create_http_client(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            &default_user_agent(),
        )
        .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: ApiTier::for_key(&api_key).url(),
            api_key,
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn tier(&self) -> ApiTier {
        ApiTier::for_key(&self.api_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Current forward and reverse DNS of an IP, with GEO-location and network data.
    ///
    /// `GET /ipquery/{ip}`
    pub async fn ip_query(&self, cancel: &CancellationToken, ip: &str) -> Result<IpQueryResult> {
        self.fetch_json(cancel, &["ipquery", ip]).await
    }

    /// Networks related to an AS number.
    ///
    /// `GET /asquery/{number}`
    pub async fn as_query(
        &self,
        cancel: &CancellationToken,
        number: &str,
    ) -> Result<AsQueryResult> {
        self.fetch_json(cancel, &["asquery", number]).await
    }

    /// Passive DNS history of a name, in response order.
    ///
    /// `GET /pdns/forward/{domain}`
    pub async fn passive_dns_forward(
        &self,
        cancel: &CancellationToken,
        domain: &str,
    ) -> Result<Vec<PassiveDnsRecord>> {
        self.fetch_json_stream(cancel, &["pdns", "forward", domain])
            .await
    }

    /// Passive DNS history of names that resolved to an IP, in response order.
    ///
    /// `GET /pdns/reverse/{ip}`
    pub async fn passive_dns_reverse(
        &self,
        cancel: &CancellationToken,
        ip: &str,
    ) -> Result<Vec<PassiveDnsRecord>> {
        self.fetch_json_stream(cancel, &["pdns", "reverse", ip])
            .await
    }
}

impl fmt::Debug for RobtexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobtexClient")
            .field("base_url", &self.base_url.as_str())
            .field("tier", &self.tier())
            .finish_non_exhaustive()
    }
}
