use std::time::Duration;

use axum::http;
use reqwest::Client;

/// HTTP client shared by every adapter
///
/// No request timeout is set: a slow provider call is allowed to run until
/// the provider answers or the connection drops.
pub fn http_client() -> anyhow::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    let client = Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()?;

    Ok(client)
}
