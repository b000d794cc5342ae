#![allow(dead_code)]

use httpmock::MockServer;
use iex_rs::IexClient;
use url::Url;

pub const TOKEN: &str = "pk_test_token";
pub const SANDBOX_TOKEN: &str = "Tsk_test_token";

pub async fn setup_server() -> MockServer {
    #[cfg(feature = "tracing-subscriber")]
    iex_rs::init_tracing_for_tests();
    MockServer::start_async().await
}

/// A client whose REST and SSE hosts (both environments) all point at `server`.
///
/// Production requests land under `/{version}/...`, sandbox ones under `/stable/...`.
pub fn client_for(server: &MockServer, token: &str) -> IexClient {
    let base = Url::parse(&server.base_url()).unwrap();
    let sandbox = base.join("stable/").unwrap();
    IexClient::builder()
        .token(token)
        .base_url(base.clone())
        .sandbox_url(sandbox.clone())
        .sse_base_url(base)
        .sse_sandbox_url(sandbox)
        .build()
        .unwrap()
}

/// Offline client for tests that never send anything.
pub fn offline_client(token: &str, version: &str) -> IexClient {
    IexClient::builder()
        .token(token)
        .version(version)
        .build()
        .unwrap()
}
