//! Record Store Port
//!
//! Abstract interface for the spreadsheet-style table service that holds
//! every submitted application.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::errors::StoreError;

/// Column name to cell value, exactly as the remote table expects it
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A record held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Opaque identifier assigned by the store
    pub id: String,
    #[serde(default)]
    pub fields: Fields,
}

/// Formula lookup against one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub filter_by_formula: String,
    pub max_records: u32,
}

impl RecordQuery {
    /// Records whose `field` equals `value` exactly.
    pub fn field_equals(field: &str, value: &str, max_records: u32) -> Self {
        Self {
            filter_by_formula: format!("{{{}}} = '{}'", field, escape_formula_string(value)),
            max_records,
        }
    }
}

/// Escape a value for use inside a single-quoted formula string.
pub fn escape_formula_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Table access used by the intake workflow
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return up to `query.max_records` records matching the formula
    async fn select(&self, table: &str, query: &RecordQuery)
        -> Result<Vec<StoredRecord>, StoreError>;

    /// Create one record per field set, returning them in the same order
    async fn create(&self, table: &str, records: Vec<Fields>)
        -> Result<Vec<StoredRecord>, StoreError>;
}

/// Acquires a store client for the duration of one request
///
/// Credentials are read at acquisition time, so a missing key fails the
/// request that needed it rather than process startup.
pub trait RecordStoreConnector: Send + Sync {
    fn connect(&self) -> Result<Arc<dyn RecordStore>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_equals_formula() {
        let query = RecordQuery::field_equals("Work Email", "a@b.com", 1);
        assert_eq!(query.filter_by_formula, "{Work Email} = 'a@b.com'");
        assert_eq!(query.max_records, 1);
    }

    #[test]
    fn test_quotes_cannot_escape_the_literal() {
        let query = RecordQuery::field_equals("Email", "o'brien@x.io", 1);
        assert_eq!(query.filter_by_formula, r"{Email} = 'o\'brien@x.io'");

        let query = RecordQuery::field_equals("Email", r"a\'@x.io", 1);
        assert_eq!(query.filter_by_formula, r"{Email} = 'a\\\'@x.io'");
    }
}
