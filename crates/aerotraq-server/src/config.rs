//! Server configuration
//!
//! Read from Shuttle secrets, falling back to the process environment
//! (a `.env` file is loaded in development).
//!
//! Airtable credentials are allowed to be missing at startup. Requests that
//! need them fail with a configuration error instead.

use aerotraq::TagPolicy;
use thiserror::Error;

pub const DEFAULT_ENDPOINT_URL: &str = "https://api.airtable.com";
pub const DEFAULT_OPERATOR_TABLE: &str = "Drone Inquiry";
pub const DEFAULT_BUYER_TABLE: &str = "For Data Buyers";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Airtable connection settings
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// `AIRTABLE_API_KEY`
    pub api_key: Option<String>,
    /// `AIRTABLE_BASE_ID`
    pub base_id: Option<String>,
    /// `AIRTABLE_ENDPOINT_URL`
    pub endpoint_url: String,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_id: None,
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub airtable: AirtableConfig,
    /// `AIRTABLE_OPERATOR_TABLE`
    pub operator_table: String,
    /// `AIRTABLE_BUYER_TABLE`
    pub buyer_table: String,
    /// `STRICT_TAG_VALIDATION`
    pub tag_policy: TagPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            airtable: AirtableConfig::default(),
            operator_table: DEFAULT_OPERATOR_TABLE.to_string(),
            buyer_table: DEFAULT_BUYER_TABLE.to_string(),
            tag_policy: TagPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build from any key lookup (secret store, environment, test map).
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let tag_policy = match get("STRICT_TAG_VALIDATION") {
            Some(raw) => raw.parse::<TagPolicy>().map_err(|message| ConfigError::Invalid {
                key: "STRICT_TAG_VALIDATION",
                message,
            })?,
            None => defaults.tag_policy,
        };

        Ok(Self {
            airtable: AirtableConfig {
                api_key: get("AIRTABLE_API_KEY"),
                base_id: get("AIRTABLE_BASE_ID"),
                endpoint_url: get("AIRTABLE_ENDPOINT_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.airtable.endpoint_url),
            },
            operator_table: get("AIRTABLE_OPERATOR_TABLE").unwrap_or(defaults.operator_table),
            buyer_table: get("AIRTABLE_BUYER_TABLE").unwrap_or(defaults.buyer_table),
            tag_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_any_keys() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.airtable.api_key.is_none());
        assert!(config.airtable.base_id.is_none());
        assert_eq!(config.airtable.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.operator_table, "Drone Inquiry");
        assert_eq!(config.buyer_table, "For Data Buyers");
        assert_eq!(config.tag_policy, TagPolicy::Lenient);
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AIRTABLE_API_KEY", "pat123"),
            ("AIRTABLE_BASE_ID", "appXYZ"),
            ("AIRTABLE_ENDPOINT_URL", "http://localhost:9000/"),
            ("AIRTABLE_OPERATOR_TABLE", "Early Access"),
            ("STRICT_TAG_VALIDATION", "true"),
        ]))
        .unwrap();

        assert_eq!(config.airtable.api_key.as_deref(), Some("pat123"));
        assert_eq!(config.airtable.base_id.as_deref(), Some("appXYZ"));
        assert_eq!(config.airtable.endpoint_url, "http://localhost:9000");
        assert_eq!(config.operator_table, "Early Access");
        assert_eq!(config.tag_policy, TagPolicy::Strict);
    }

    #[test]
    fn test_blank_key_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[("AIRTABLE_API_KEY", "  ")])).unwrap();
        assert!(config.airtable.api_key.is_none());
    }

    #[test]
    fn test_rejects_unknown_tag_policy() {
        let err = AppConfig::from_lookup(lookup(&[("STRICT_TAG_VALIDATION", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("STRICT_TAG_VALIDATION"));
    }
}
