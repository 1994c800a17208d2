use std::sync::OnceLock;

use crate::constant::HTTP_CLIENT_TIMEOUT;

pub fn get_http_client() -> &'static reqwest::Client {
    static INSTANCE: OnceLock<reqwest::Client> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(HTTP_CLIENT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            })
    })
}
