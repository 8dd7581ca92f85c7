use super::base::BaseApi;
use crate::errors::RequestError;
use crate::models::*;
use crate::params::{HeaderParams, QueryParameters, QueryParams};
use crate::transport::{HttpTransport, Transport};
use crate::types::{
    AccessToken, ApiServerUrl, Method, ProjectIdRef, RunIdRef, SampleIdRef, UserIdRef,
};

/// Endpoints for users, runs, projects and samples.
#[derive(Debug, Clone)]
pub struct BaseSpaceApi<T: Transport = HttpTransport> {
    base: BaseApi<T>,
}

impl BaseSpaceApi<HttpTransport> {
    pub fn new(access_token: impl Into<AccessToken>, server_url: impl Into<ApiServerUrl>) -> Self {
        Self::from(BaseApi::new(access_token, server_url))
    }
}

impl<T: Transport> From<BaseApi<T>> for BaseSpaceApi<T> {
    fn from(base: BaseApi<T>) -> Self {
        Self { base }
    }
}

impl<T: Transport> BaseSpaceApi<T> {
    pub fn base(&self) -> &BaseApi<T> {
        &self.base
    }

    /// Get the underlying client, e.g. to change its access token.
    pub fn base_mut(&mut self) -> &mut BaseApi<T> {
        &mut self.base
    }

    fn get<R: serde::de::DeserializeOwned>(&self, resource_path: &str) -> Result<R, RequestError> {
        self.base.request(
            resource_path,
            Method::Get,
            &QueryParams::new(),
            &HeaderParams::new(),
            None,
            false,
        )
    }

    fn list<R: serde::de::DeserializeOwned>(
        &self,
        resource_path: &str,
        query: &QueryParameters,
    ) -> Result<Vec<R>, RequestError> {
        self.base.request_list(
            resource_path,
            Method::Get,
            query.parameter_dict(),
            &HeaderParams::new(),
        )
    }

    /// Get a user. [UserIdRef::current] is the owner of the access token.
    pub fn get_user_by_id(&self, id: &UserIdRef) -> Result<User, RequestError> {
        self.get(&format!("users/{}", id))
    }

    pub fn get_run_by_id(&self, id: &RunIdRef) -> Result<Run, RequestError> {
        self.get(&format!("runs/{}", id))
    }

    pub fn get_project_by_id(&self, id: &ProjectIdRef) -> Result<Project, RequestError> {
        self.get(&format!("projects/{}", id))
    }

    pub fn get_sample_by_id(&self, id: &SampleIdRef) -> Result<Sample, RequestError> {
        self.get(&format!("samples/{}", id))
    }

    pub fn get_accessible_runs_by_user(
        &self,
        user_id: &UserIdRef,
        query: &QueryParameters,
    ) -> Result<Vec<RunCompact>, RequestError> {
        self.list(&format!("users/{}/runs", user_id), query)
    }

    pub fn get_projects_by_user(
        &self,
        user_id: &UserIdRef,
        query: &QueryParameters,
    ) -> Result<Vec<Project>, RequestError> {
        self.list(&format!("users/{}/projects", user_id), query)
    }

    pub fn get_samples_by_project(
        &self,
        project_id: &ProjectIdRef,
        query: &QueryParameters,
    ) -> Result<Vec<Sample>, RequestError> {
        self.list(&format!("projects/{}/samples", project_id), query)
    }

    /// Create a project, or get the existing project of the same name.
    pub fn create_project(&self, name: &str) -> Result<Project, RequestError> {
        let body = serde_json::json!({ "Name": name });
        self.base.request(
            "projects/",
            Method::Post,
            &QueryParams::new(),
            &HeaderParams::new(),
            Some(&body),
            false,
        )
    }

    /// Begin the OAuth device flow for an app.
    pub fn get_verification_code(
        &self,
        client_id: &str,
        scope: &str,
    ) -> Result<VerificationCode, RequestError> {
        let url = self.base.server_url().join("oauthv2/deviceauthorization");
        self.base.form_request(
            &url,
            &[
                ("client_id", client_id),
                ("scope", scope),
                ("response_type", "device_code"),
            ],
        )
    }

    /// Finish the OAuth device flow. The obtained token is not applied to this client.
    pub fn obtain_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        device_code: &str,
    ) -> Result<AccessToken, RequestError> {
        let url = self.base.server_url().join("oauthv2/token");
        let res: AccessTokenResponse = self.base.form_request(
            &url,
            &[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("code", device_code),
                ("grant_type", "device"),
            ],
        )?;
        Ok(AccessToken::new(res.access_token))
    }
}
