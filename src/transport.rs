//! The HTTP round trip, below the envelope.

use crate::config::ClientConfig;
use crate::errors::TransportError;
use crate::params::{HeaderParams, QueryParams};
use crate::types::Method;
use lazy_static::lazy_static;
use reqwest::header::{HeaderMap, ACCEPT};
use serde_json::Value;

lazy_static! {
    static ref CLIENT: reqwest::blocking::Client = reqwest::blocking::Client::new();
}

/// Everything needed to make one call, apart from the client configuration.
#[derive(Debug, Clone, Copy)]
pub struct ApiRequest<'a> {
    /// Path relative to the server URI, e.g. `users/current`
    pub resource_path: &'a str,
    pub method: Method,
    pub query: &'a QueryParams,
    pub headers: &'a HeaderParams,
    /// Request body, sent as JSON.
    pub body: Option<&'a Value>,
    /// Send a POST even if `method` says otherwise and there is no body.
    pub force_post: bool,
}

impl ApiRequest<'_> {
    /// The HTTP verb which will actually be used.
    pub fn effective_method(&self) -> Method {
        if self.force_post {
            Method::Post
        } else {
            self.method
        }
    }
}

/// Performs network I/O on behalf of [crate::BaseApi].
///
/// Implementations return the decoded JSON body whatever the HTTP status was.
/// The envelope is interpreted by the caller.
pub trait Transport {
    /// Call a resource of the API server in `config`.
    fn call(&self, config: &ClientConfig, request: &ApiRequest) -> Result<Value, TransportError>;

    /// POST `application/x-www-form-urlencoded` data to an absolute URL.
    fn post_form(
        &self,
        config: &ClientConfig,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Value, TransportError>;
}

/// [Transport] using a blocking [reqwest] client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    fn headers(config: &ClientConfig, extra: &HeaderParams) -> Result<HeaderMap, TransportError> {
        let mut headers = accept_json();
        for (name, value) in extra {
            let name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| TransportError::Header(e.to_string()))?;
            let value = reqwest::header::HeaderValue::try_from(value.as_str())
                .map_err(|e| TransportError::Header(e.to_string()))?;
            headers.insert(name, value);
        }
        if !config.access_token.as_str().is_empty() {
            let bearer = format!("Bearer {}", config.access_token.as_str());
            let mut value = reqwest::header::HeaderValue::try_from(bearer)
                .map_err(|e| TransportError::Header(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(CLIENT.clone())
    }
}

impl Transport for HttpTransport {
    fn call(&self, config: &ClientConfig, request: &ApiRequest) -> Result<Value, TransportError> {
        let url = config.server_url.join(request.resource_path);
        let mut req = self
            .client
            .request(request.effective_method().into(), url)
            .headers(Self::headers(config, request.headers)?)
            .query(request.query)
            .timeout(config.timeout);
        if let Some(body) = request.body {
            req = req.json(body);
        }
        decode(req.send()?)
    }

    fn post_form(
        &self,
        config: &ClientConfig,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Value, TransportError> {
        let body = serde_urlencoded::to_string(fields)?;
        let res = self
            .client
            .post(url)
            .headers(accept_json())
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .timeout(config.timeout)
            .send()?;
        decode(res)
    }
}

fn accept_json() -> HeaderMap {
    HeaderMap::from_iter([(
        ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    )])
}

/// Decode a response body as JSON. An empty body is `null`.
fn decode(res: reqwest::blocking::Response) -> Result<Value, TransportError> {
    let status = res.status();
    let text = res.text()?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(TransportError::Status {
            status,
            reason: status.canonical_reason().unwrap_or("unknown reason"),
            text,
        }),
        Err(e) => Err(TransportError::Json(e)),
    }
}
