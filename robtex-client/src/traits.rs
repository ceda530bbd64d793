use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::types::{AsQueryResult, IpQueryResult, PassiveDnsRecord};

/// Robtex lookup operations.
///
/// Implemented by [`RobtexClient`](crate::RobtexClient); host applications can
/// hold an `Arc<dyn RobtexApi>` and swap in their own implementation in tests.
#[async_trait]
pub trait RobtexApi: Send + Sync {
    /// IP metadata: GEO-location, routing and current forward/reverse DNS.
    async fn ip_query(&self, cancel: &CancellationToken, ip: &str) -> Result<IpQueryResult>;

    /// Networks announced by an AS.
    async fn as_query(&self, cancel: &CancellationToken, number: &str) -> Result<AsQueryResult>;

    /// Passive DNS history of a domain name.
    async fn passive_dns_forward(
        &self,
        cancel: &CancellationToken,
        domain: &str,
    ) -> Result<Vec<PassiveDnsRecord>>;

    /// Passive DNS history of names that resolved to an IP.
    async fn passive_dns_reverse(
        &self,
        cancel: &CancellationToken,
        ip: &str,
    ) -> Result<Vec<PassiveDnsRecord>>;
}
