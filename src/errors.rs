//! Errors for this crate.

use reqwest::StatusCode;
use std::fmt;

/// Failure of the HTTP round trip itself. The envelope was never seen.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Connection failure, timeout, or any other error from reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-2xx response whose body is not JSON.
    #[error("({status:?} {reason:?}): {text}")]
    Status {
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// 2xx response whose body is not JSON.
    #[error("malformed JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A header name or value cannot be sent over HTTP.
    #[error("invalid header: {0}")]
    Header(String),

    /// Form data could not be encoded.
    #[error(transparent)]
    Form(#[from] serde_urlencoded::ser::Error),
}

/// The platform answered, but its envelope is missing or says something went wrong.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ServerResponseError {
    /// Value of `ResponseStatus.ErrorCode`, if the platform sent one.
    pub code: Option<String>,
    pub message: String,
}

impl ServerResponseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    pub(crate) fn no_response() -> Self {
        Self::new("No response returned")
    }

    pub(crate) fn missing_status() -> Self {
        Self::new("Response envelope has no ResponseStatus")
    }
}

impl fmt::Display for ServerResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error returned by OAuth-style form endpoints, which do not use the envelope.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("BaseSpace exception: {error} - {description}")]
pub struct OAuthError {
    pub error: String,
    pub description: String,
}

/// A query parameter name is not accepted by the endpoint it was built for.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown parameter \"{0}\"")]
pub struct UnknownParameterError(pub String);

/// Errors representing a failed request to the platform.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    ServerResponse(#[from] ServerResponseError),

    /// The payload does not fit the declared model.
    #[error("response does not match the expected model: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error(transparent)]
    OAuth(#[from] OAuthError),
}

impl RequestError {
    /// The server-reported error, if that is what this is.
    pub fn as_server_response(&self) -> Option<&ServerResponseError> {
        match self {
            RequestError::ServerResponse(e) => Some(e),
            _ => None,
        }
    }
}
