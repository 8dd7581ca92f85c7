//! The envelope wrapped around every response from the platform.
//!
//! ```json
//! {
//!   "ResponseStatus": { "ErrorCode": "...", "Message": "..." },
//!   "Response": { ... }
//! }
//! ```

use crate::errors::ServerResponseError;
use crate::types::SortDir;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status block of an envelope. Both fields are absent on success.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseStatus {
    /// Read the status block by key presence. A key which is present counts
    /// even when its value is `null` or not a string.
    pub fn from_map(status: &Map<String, Value>) -> Self {
        Self {
            error_code: status.get("ErrorCode").map(json_text),
            message: status.get("Message").map(json_text),
        }
    }

    /// `ErrorCode` takes precedence over a bare `Message`.
    pub fn into_result(self) -> Result<(), ServerResponseError> {
        match (self.error_code, self.message) {
            (Some(code), message) => Err(ServerResponseError::with_code(
                code,
                message.unwrap_or_default(),
            )),
            (None, Some(message)) => Err(ServerResponseError::new(message)),
            (None, None) => Ok(()),
        }
    }
}

/// An envelope whose payload deserializes to `T`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Envelope<T> {
    pub response: T,
}

/// Payload of list endpoints. Items are kept raw until converted to the item model.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ResourceList {
    pub items: Vec<Value>,
    pub displayed_count: Option<u32>,
    pub total_count: Option<u32>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort_dir: Option<SortDir>,
    pub sort_by: Option<String>,
}

/// One page of a list endpoint, converted to the item model.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePage<T> {
    pub items: Vec<T>,
    pub displayed_count: Option<u32>,
    pub total_count: Option<u32>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort_dir: Option<SortDir>,
    pub sort_by: Option<String>,
}

/// Check the envelope for an error signal without deserializing its payload.
pub(crate) fn check(envelope: &Value) -> Result<(), ServerResponseError> {
    if is_falsy(envelope) {
        return Err(ServerResponseError::no_response());
    }
    let status = envelope
        .get("ResponseStatus")
        .and_then(Value::as_object)
        .ok_or_else(ServerResponseError::missing_status)?;
    ResponseStatus::from_map(status).into_result()
}

/// Strings are taken as-is, `null` is empty, anything else is printed as JSON.
pub(crate) fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde_json::json;

    #[rstest]
    #[case(json!(null))]
    #[case(json!({}))]
    #[case(json!([]))]
    #[case(json!(""))]
    #[case(json!(false))]
    #[case(json!(0))]
    fn test_empty_envelope(#[case] envelope: Value) {
        assert_eq!(check(&envelope), Err(ServerResponseError::no_response()))
    }

    #[rstest]
    #[case(json!({"Response": {"Id": "1"}}))]
    #[case(json!({"ResponseStatus": null, "Response": {"Id": "1"}}))]
    #[case(json!({"ResponseStatus": "OK", "Response": {"Id": "1"}}))]
    fn test_missing_status(#[case] envelope: Value) {
        assert_eq!(check(&envelope), Err(ServerResponseError::missing_status()))
    }

    #[rstest]
    fn test_error_code_and_message() {
        let envelope = json!({
            "ResponseStatus": {"ErrorCode": "404", "Message": "Not found"},
            "Response": null
        });
        let e = check(&envelope).unwrap_err();
        assert_eq!(e.code.as_deref(), Some("404"));
        assert_eq!(e.to_string(), "404: Not found");
    }

    #[rstest]
    fn test_message_only() {
        let envelope = json!({
            "ResponseStatus": {"Message": "Sample is being deleted"},
            "Response": {"Id": "1"}
        });
        let e = check(&envelope).unwrap_err();
        assert_eq!(e.code, None);
        assert_eq!(e.to_string(), "Sample is being deleted");
    }

    #[rstest]
    fn test_error_code_checked_before_message() {
        let status = ResponseStatus {
            error_code: Some("BASESPACE.FORBIDDEN".to_string()),
            message: Some("nope".to_string()),
        };
        assert_eq!(
            status.into_result().unwrap_err().to_string(),
            "BASESPACE.FORBIDDEN: nope"
        )
    }

    #[rstest]
    #[case(json!({"ResponseStatus": {"Message": null}}), None, "")]
    #[case(json!({"ResponseStatus": {"ErrorCode": null, "Message": "boom"}}), Some(""), ": boom")]
    #[case(json!({"ResponseStatus": {"ErrorCode": 404, "Message": "Not found"}}), Some("404"), "404: Not found")]
    #[case(json!({"ResponseStatus": {"ErrorCode": "E1"}}), Some("E1"), "E1: ")]
    fn test_status_keys_count_when_present(
        #[case] envelope: Value,
        #[case] code: Option<&str>,
        #[case] display: &str,
    ) {
        let e = check(&envelope).unwrap_err();
        assert_eq!(e.code.as_deref(), code);
        assert_eq!(e.to_string(), display);
    }

    #[rstest]
    fn test_resource_list_requires_items() {
        let payload = json!({"Id": "1", "Name": "single object"});
        assert!(serde_json::from_value::<ResourceList>(payload).is_err())
    }

    #[rstest]
    #[case(json!({"ResponseStatus": {}, "Response": {"Id": "1"}}))]
    #[case(json!({"ResponseStatus": {"Stack": "ignored"}, "Response": []}))]
    fn test_ok(#[case] envelope: Value) {
        assert!(check(&envelope).is_ok())
    }

    #[rstest]
    fn test_serialize_empty_status() {
        let s = serde_json::to_value(ResponseStatus::default()).unwrap();
        assert_eq!(s, json!({}))
    }

    #[rstest]
    fn test_deserialize_resource_list() {
        let payload = json!({
            "Items": [{"Id": "a"}, {"Id": "b"}],
            "DisplayedCount": 2,
            "TotalCount": 5,
            "Offset": 0,
            "Limit": 2,
            "SortDir": "Asc",
            "SortBy": "Id"
        });
        let list: ResourceList = serde_json::from_value(payload).unwrap();
        assert_eq!(list.items, vec![json!({"Id": "a"}), json!({"Id": "b"})]);
        assert_eq!(list.total_count, Some(5));
        assert_eq!(list.sort_dir, Some(SortDir::Asc));
    }
}
