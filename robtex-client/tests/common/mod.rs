//! Shared test helpers: a mock Robtex server and assertion macros.

#![allow(dead_code)]

use robtex_client::RobtexClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Assert a `Result` is `Ok` and unwrap it (fail the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at `server` with the given API key.
pub fn client_for(server: &MockServer, api_key: &str) -> RobtexClient {
    RobtexClient::builder()
        .api_key(api_key)
        .base_url(server.uri())
        .build()
        .expect("mock base URL is valid")
}

/// Start a server answering `GET {route}` once with `status` and `body`.
pub async fn serve(route: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}
