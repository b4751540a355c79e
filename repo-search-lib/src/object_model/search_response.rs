use super::owner::Owner;
use crate::error::DecodeError;
use serde::Deserialize;
use serde_json::Value;

/// Raw `items` of a search response, alive only while decoding.
pub(crate) struct SearchResponse {
    pub(crate) items: Vec<Value>,
}

impl SearchResponse {
    pub(crate) fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value = serde_json::from_slice::<Value>(bytes).map_err(DecodeError::Syntax)?;

        let Value::Object(mut object) = value else {
            return Err(DecodeError::NotAnObject)
        };

        let Some(Value::Array(items)) = object.remove("items") else {
            return Err(DecodeError::MissingItems)
        };

        Ok(Self { items })
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub(crate) struct Item {
    #[serde(rename = "full_name", deserialize_with = "super::lenient")]
    pub(crate) full_name: Option<String>,

    #[serde(rename = "language", deserialize_with = "super::lenient")]
    pub(crate) language: Option<String>,

    #[serde(rename = "stargazers_count", deserialize_with = "super::lenient")]
    pub(crate) stargazers_count: Option<u64>,

    #[serde(rename = "watchers_count", deserialize_with = "super::lenient")]
    pub(crate) watchers_count: Option<u64>,

    #[serde(rename = "forks_count", deserialize_with = "super::lenient")]
    pub(crate) forks_count: Option<u64>,

    #[serde(rename = "open_issues", deserialize_with = "super::lenient")]
    pub(crate) open_issues: Option<u64>,

    #[serde(rename = "owner", deserialize_with = "super::lenient")]
    pub(crate) owner: Option<Owner>,
}

impl Item {
    /// An item that is not an object at all decodes to all defaults.
    pub(crate) fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
