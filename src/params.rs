//! Query parameters and their validation against per-endpoint allow-lists.

use crate::constants::{LIST_PARAMETERS, PURCHASED_PRODUCT_PARAMETERS};
use crate::errors::UnknownParameterError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Query string parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Query parameters of one request, passed to the transport as-is.
pub type QueryParams = HashMap<String, ParamValue>;

/// Extra request headers, passed to the transport as-is.
pub type HeaderParams = HashMap<String, String>;

/// Query parameters which have been checked against the names an endpoint accepts.
///
/// Values are not inspected and no defaults are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    passed: QueryParams,
}

impl QueryParameters {
    /// Copy `pars`, failing on the first name which is not in `allowed`.
    pub fn new<K, V>(
        allowed: &[&str],
        pars: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, UnknownParameterError>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut passed = QueryParams::new();
        for (k, v) in pars {
            let k = k.into();
            if !allowed.contains(&k.as_str()) {
                return Err(UnknownParameterError(k));
            }
            passed.insert(k, v.into());
        }
        Ok(Self { passed })
    }

    /// Filter for the purchased-products list of a user.
    pub fn purchased_product<K, V>(
        pars: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, UnknownParameterError>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::new(PURCHASED_PRODUCT_PARAMETERS, pars)
    }

    /// Sorting, paging and filtering for generic list endpoints.
    pub fn list<K, V>(pars: impl IntoIterator<Item = (K, V)>) -> Result<Self, UnknownParameterError>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::new(LIST_PARAMETERS, pars)
    }

    pub fn parameter_dict(&self) -> &QueryParams {
        &self.passed
    }

    pub fn into_parameter_dict(self) -> QueryParams {
        self.passed
    }
}

impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.passed.keys().collect();
        keys.sort();
        f.write_str("{")?;
        for (i, k) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': '{}'", k, self.passed[k])?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    fn test_empty() {
        let p = QueryParameters::purchased_product(Vec::<(&str, &str)>::new()).unwrap();
        assert!(p.parameter_dict().is_empty());
        assert_eq!(p.to_string(), "{}");
    }

    #[rstest]
    fn test_allowed_keys_pass_through_unchanged() {
        let p = QueryParameters::purchased_product([("Tags", "a,b"), ("ProductIds", "7")]).unwrap();
        let expected = QueryParams::from([
            ("Tags".to_string(), ParamValue::from("a,b")),
            ("ProductIds".to_string(), ParamValue::from("7")),
        ]);
        assert_eq!(p.parameter_dict(), &expected);
        assert_eq!(p.to_string(), "{'ProductIds': '7', 'Tags': 'a,b'}");
    }

    #[rstest]
    #[case(vec![("Bogus", "1")])]
    #[case(vec![("Tags", "x"), ("Bogus", "1")])]
    #[case(vec![("Bogus", "1"), ("Tags", "x")])]
    #[case(vec![("ProductIds", "3"), ("Bogus", "1"), ("Tags", "x")])]
    fn test_unknown_key_is_named(#[case] pars: Vec<(&str, &str)>) {
        let e = QueryParameters::purchased_product(pars).unwrap_err();
        assert_eq!(e, UnknownParameterError("Bogus".to_string()))
    }

    #[rstest]
    fn test_unknown_key_from_hashmap() {
        let mut pars: HashMap<String, ParamValue> = LIST_PARAMETERS
            .iter()
            .map(|k| (k.to_string(), ParamValue::from(1u32)))
            .collect();
        assert!(QueryParameters::list(pars.clone()).is_ok());
        pars.insert("Tags".to_string(), "x".into());
        assert_eq!(
            QueryParameters::list(pars).unwrap_err(),
            UnknownParameterError("Tags".to_string())
        );
    }

    #[rstest]
    fn test_unsuffixed_integer_values() {
        let p = QueryParameters::list([("Limit", 10), ("Offset", 0)]).unwrap();
        assert_eq!(p.parameter_dict()["Limit"], ParamValue::Int(10));
        assert_eq!(p.parameter_dict()["Offset"], ParamValue::Int(0));
    }

    #[rstest]
    fn test_keys_are_case_sensitive() {
        assert!(QueryParameters::list([("limit", 10u32)]).is_err());
        assert!(QueryParameters::list([("Limit", 10u32)]).is_ok());
    }
}
