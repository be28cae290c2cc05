// Shared blocking HTTP client for both outgoing services.

use crate::config::AppConfig;
use reqwest::blocking::Client;

/// Build the client used by `NewsClient` and `ChatClient`. The configured
/// timeout is applied here and again per request.
pub fn client(config: &AppConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
