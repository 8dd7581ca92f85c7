use std::time::Duration;

/// Per-request timeout used unless the caller sets another one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_API_SERVER: &str = "https://api.basespace.illumina.com/v1pre3";

/// Query parameters accepted by the purchased-products filter.
pub const PURCHASED_PRODUCT_PARAMETERS: &[&str] = &["Tags", "ProductIds"];

/// Query parameters accepted by generic list endpoints.
pub const LIST_PARAMETERS: &[&str] = &[
    "Statuses",
    "SortBy",
    "Extensions",
    "Offset",
    "Limit",
    "SortDir",
    "Name",
];
