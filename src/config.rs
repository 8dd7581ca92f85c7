use crate::constants::{DEFAULT_API_SERVER, DEFAULT_TIMEOUT};
use crate::types::{AccessToken, ApiServerUrl};
use std::time::Duration;

/// Connection settings owned by one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: ApiServerUrl,
    pub access_token: AccessToken,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(server_url: ApiServerUrl, access_token: AccessToken) -> Self {
        Self {
            server_url,
            access_token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            ApiServerUrl::from(DEFAULT_API_SERVER),
            AccessToken::anonymous(),
        )
    }
}
