use reqwest::Client;

/// Shared HTTP client for outbound calls. No timeout and no retry policy:
/// a slow service keeps the single in-flight call pending until the owning
/// view cancels it.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("encore/", env!("CARGO_PKG_VERSION")))
        .build()
}
