use serde::{Deserialize, Serialize};

/// HTTP verbs supported by the platform.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Sort direction of a list response.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Run status as reported by the platform.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub enum RunStatus {
    Running,
    Complete,
    Failed,
    Stopped,
    Uploading,
    #[serde(other)]
    Other,
}
