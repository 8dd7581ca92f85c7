use aliri_braid::braid;

/// Opaque bearer credential sent with every request.
#[braid(serde)]
pub struct AccessToken;

impl AccessToken {
    /// An empty token, meaning no `Authorization` header is sent.
    pub fn anonymous() -> Self {
        Self::new(String::new())
    }
}

/// Date string as sent by the platform, e.g. `2013-09-10T18:07:12.0000000`.
#[braid(serde)]
pub struct DateString;

/// Username of a BaseSpace user.
#[braid(serde)]
pub struct UserName;
