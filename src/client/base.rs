use crate::config::ClientConfig;
use crate::envelope::{check, json_text, Envelope, ResourceList, ResourcePage};
use crate::errors::{OAuthError, RequestError};
use crate::params::{HeaderParams, QueryParams};
use crate::transport::{ApiRequest, HttpTransport, Transport};
use crate::types::{AccessToken, ApiServerUrl, Method};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Mediates between endpoint methods and the [Transport]: makes the call,
/// checks the response envelope, and converts its payload to a model.
#[derive(Debug, Clone)]
pub struct BaseApi<T: Transport = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl BaseApi<HttpTransport> {
    /// Create a client for the given access token and API server (including the version).
    pub fn new(access_token: impl Into<AccessToken>, server_url: impl Into<ApiServerUrl>) -> Self {
        let config = ClientConfig::new(server_url.into(), access_token.into());
        Self::with_transport(HttpTransport::default(), config)
    }
}

impl<T: Transport> BaseApi<T> {
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Call a resource and deserialize the `Response` of its envelope as `R`.
    pub fn request<R: DeserializeOwned>(
        &self,
        resource_path: &str,
        method: Method,
        query: &QueryParams,
        headers: &HeaderParams,
        body: Option<&Value>,
        force_post: bool,
    ) -> Result<R, RequestError> {
        let request = ApiRequest {
            resource_path,
            method,
            query,
            headers,
            body,
            force_post,
        };
        let envelope = self.call(&request)?;
        let envelope: Envelope<R> = serde_json::from_value(envelope)?;
        Ok(envelope.response)
    }

    /// Call a resource which returns a list and deserialize each of its items as `R`.
    pub fn request_list<R: DeserializeOwned>(
        &self,
        resource_path: &str,
        method: Method,
        query: &QueryParams,
        headers: &HeaderParams,
    ) -> Result<Vec<R>, RequestError> {
        self.request_page(resource_path, method, query, headers)
            .map(|page| page.items)
    }

    /// Like [BaseApi::request_list], also keeping the paging information of the response.
    pub fn request_page<R: DeserializeOwned>(
        &self,
        resource_path: &str,
        method: Method,
        query: &QueryParams,
        headers: &HeaderParams,
    ) -> Result<ResourcePage<R>, RequestError> {
        let request = ApiRequest {
            resource_path,
            method,
            query,
            headers,
            body: None,
            force_post: false,
        };
        let envelope = self.call(&request)?;
        let list = serde_json::from_value::<Envelope<ResourceList>>(envelope)?.response;
        let items = list
            .items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<R>, _>>()?;
        Ok(ResourcePage {
            items,
            displayed_count: list.displayed_count,
            total_count: list.total_count,
            offset: list.offset,
            limit: list.limit,
            sort_dir: list.sort_dir,
            sort_by: list.sort_by,
        })
    }

    /// POST form data to an absolute URL which answers without an envelope,
    /// such as the OAuth endpoints.
    pub fn form_request<R: DeserializeOwned>(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<R, RequestError> {
        debug!("POST {} (form)", url);
        let res = self.transport.post_form(&self.config, url, fields)?;
        trace!("Response: {}", res);
        if let Some(error) = res.get("error") {
            return Err(OAuthError {
                error: json_text(error),
                description: res
                    .get("error_description")
                    .map(json_text)
                    .unwrap_or_default(),
            }
            .into());
        }
        Ok(serde_json::from_value(res)?)
    }

    fn call(&self, request: &ApiRequest) -> Result<Value, RequestError> {
        debug!(
            "{} {} query={:?} headers={:?} force_post={}",
            request.method.as_str(),
            request.resource_path,
            request.query,
            request.headers,
            request.force_post
        );
        let envelope = self.transport.call(&self.config, request)?;
        trace!("Response: {}", envelope);
        check(&envelope)?;
        Ok(envelope)
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.config.access_token
    }

    pub fn set_access_token(&mut self, token: impl Into<AccessToken>) {
        self.config.access_token = token.into();
    }

    /// Server URI, including the API version.
    pub fn server_url(&self) -> &ApiServerUrl {
        &self.config.server_url
    }

    pub fn set_server_url(&mut self, url: impl Into<ApiServerUrl>) {
        self.config.server_url = url.into();
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
