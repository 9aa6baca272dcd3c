//! TagPolicy - handling of list-valued form fields

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::DomainError;

/// How list-valued fields (interest tags, data interests) are checked
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TagPolicy {
    /// Anything that is not a list becomes an empty list; non-string
    /// entries are dropped.
    #[default]
    Lenient,
    /// Anything that is not a list of strings is rejected.
    Strict,
}

impl TagPolicy {
    /// Normalize a raw list-valued field.
    pub fn coerce(self, field: &str, value: Option<Value>) -> Result<Vec<String>, DomainError> {
        let rejected = || DomainError::validation(format!("{} must be a list of strings", field));

        match (self, value) {
            (_, None) | (_, Some(Value::Null)) => Ok(Vec::new()),
            (TagPolicy::Lenient, Some(Value::Array(items))) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect()),
            (TagPolicy::Lenient, Some(_)) => Ok(Vec::new()),
            (TagPolicy::Strict, Some(Value::Array(items))) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(rejected()),
                })
                .collect(),
            (TagPolicy::Strict, Some(_)) => Err(rejected()),
        }
    }
}

impl std::str::FromStr for TagPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" | "false" | "0" => Ok(TagPolicy::Lenient),
            "strict" | "true" | "1" => Ok(TagPolicy::Strict),
            _ => Err(format!("Unknown tag policy: {}", s)),
        }
    }
}
