use aliri_braid::braid;

/// Base URI of the API including its version, e.g.
/// `https://api.basespace.illumina.com/v1pre3`
#[braid(serde)]
pub struct ApiServerUrl;

impl ApiServerUrl {
    /// Join a resource path onto this base URI with exactly one `/` between them.
    pub fn join(&self, resource_path: &str) -> String {
        format!(
            "{}/{}",
            self.as_str().trim_end_matches('/'),
            resource_path.trim_start_matches('/')
        )
    }
}

/// Relative URL of a resource, e.g. `users/current` or `runs/123`
#[braid(serde)]
pub struct ItemUrl;

/// Web page of a resource in the BaseSpace user interface.
#[braid(serde)]
pub struct HrefUrl;
