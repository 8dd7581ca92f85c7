use serde::Deserialize;

/// Answer of the device authorization endpoint. Field names are snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerificationCode {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub verification_with_code_uri: Option<String>,
    pub expires_in: Option<u32>,
    pub interval: Option<u32>,
}

#[derive(Deserialize)]
pub(crate) struct AccessTokenResponse {
    pub access_token: String,
}
