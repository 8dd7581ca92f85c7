use aliri_braid::braid;

/// BaseSpace IDs are strings of digits on the wire.
#[braid(serde)]
pub struct UserId;

impl UserIdRef {
    /// The owner of the access token.
    pub fn current() -> &'static Self {
        Self::from_static("current")
    }
}

#[braid(serde)]
pub struct RunId;

#[braid(serde)]
pub struct ProjectId;

#[braid(serde)]
pub struct SampleId;

#[braid(serde)]
pub struct PurchaseId;

#[braid(serde)]
pub struct ProductId;
