//! Client factory.

use std::sync::Arc;

use crate::client::RobtexClient;
use crate::traits::RobtexApi;

/// Creates a shared [`RobtexApi`] for the tier matching `api_key`.
///
/// An empty key targets the free endpoint, any other key the pro endpoint.
/// The returned client is wrapped in `Arc<dyn RobtexApi>` for sharing across
/// async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use robtex_client::create_client;
///
/// let api = create_client("");
/// ```
pub fn create_client(api_key: impl Into<String>) -> Arc<dyn RobtexApi> {
    Arc::new(RobtexClient::new(api_key))
}
