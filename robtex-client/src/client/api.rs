//! `RobtexApi` trait implementation

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::traits::RobtexApi;
use crate::types::{AsQueryResult, IpQueryResult, PassiveDnsRecord};

use super::RobtexClient;

#[async_trait]
impl RobtexApi for RobtexClient {
    async fn ip_query(&self, cancel: &CancellationToken, ip: &str) -> Result<IpQueryResult> {
        RobtexClient::ip_query(self, cancel, ip).await
    }

    async fn as_query(&self, cancel: &CancellationToken, number: &str) -> Result<AsQueryResult> {
        RobtexClient::as_query(self, cancel, number).await
    }

    async fn passive_dns_forward(
        &self,
        cancel: &CancellationToken,
        domain: &str,
    ) -> Result<Vec<PassiveDnsRecord>> {
        RobtexClient::passive_dns_forward(self, cancel, domain).await
    }

    async fn passive_dns_reverse(
        &self,
        cancel: &CancellationToken,
        ip: &str,
    ) -> Result<Vec<PassiveDnsRecord>> {
        RobtexClient::passive_dns_reverse(self, cancel, ip).await
    }
}
