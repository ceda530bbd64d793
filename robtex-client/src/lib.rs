//! # robtex-client
//!
//! An async client for the [Robtex](https://www.robtex.com/api/) network
//! intelligence API.
//!
//! ## Operations
//!
//! | Method | Endpoint | Response |
//! |--------|----------|----------|
//! | [`RobtexClient::ip_query`] | `/ipquery/{ip}` | JSON object |
//! | [`RobtexClient::as_query`] | `/asquery/{number}` | JSON object |
//! | [`RobtexClient::passive_dns_forward`] | `/pdns/forward/{domain}` | one JSON object per line |
//! | [`RobtexClient::passive_dns_reverse`] | `/pdns/reverse/{ip}` | one JSON object per line |
//!
//! An empty API key targets the free endpoint ([`FREE_API_BASE_URL`]); any other
//! key targets the pro endpoint ([`PRO_API_BASE_URL`]) and is sent as the `key`
//! query parameter on every request.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use robtex_client::RobtexClient;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RobtexClient::new("");
//!     let cancel = CancellationToken::new();
//!
//!     let ip = client.ip_query(&cancel, "199.19.54.1").await?;
//!     println!("{} {} AS{} {}", ip.city, ip.country, ip.as_number, ip.bgp_route);
//!
//!     for record in client.passive_dns_forward(&cancel, "a.iana-servers.net").await? {
//!         println!("{} {} {} x{}", record.rrname, record.rrtype, record.rrdata, record.count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, RobtexError>`](RobtexError):
//!
//! - [`RobtexError::Transport`] — connection, TLS or timeout failure
//! - [`RobtexError::Cancelled`] — the `CancellationToken` fired
//! - [`RobtexError::Status`] — any status other than `200`, with the raw body
//! - [`RobtexError::Decode`] — a `200` body that is not the expected JSON
//!
//! Nothing is retried or cached: each call is a single round trip.

mod client;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ApiTier, ClientBuilder, FREE_API_BASE_URL, PRO_API_BASE_URL, RobtexClient};

pub use error::{Result, RobtexError};

pub use factory::create_client;

pub use traits::RobtexApi;

pub use types::{AsQueryResult, DnsItem, IpQueryResult, NetworkPrefix, PassiveDnsRecord};

pub use utils::datetime;

// Re-export the cancellation token taken by every operation
pub use tokio_util::sync::CancellationToken;
