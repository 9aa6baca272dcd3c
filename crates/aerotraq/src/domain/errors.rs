//! Domain Errors
//!
//! Error types for intake operations.

use thiserror::Error;

/// Substrings in a Record Store failure that point at bad credentials
/// or a missing base rather than a transient fault.
const CONFIGURATION_MARKERS: &[&str] = &[
    "API_KEY_INVALID",
    "BASE_NOT_FOUND",
    "AUTHENTICATION_REQUIRED",
];

/// Intake errors, one variant per response class
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unclassified error: {0}")]
    Unclassified(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }
}

/// Failures raised by a Record Store client
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Record store is not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({status}) {kind}: {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl StoreError {
    /// Whether this failure comes from credentials or base configuration.
    pub fn is_configuration(&self) -> bool {
        if matches!(self, StoreError::NotConfigured(_)) {
            return true;
        }
        let message = self.to_string();
        CONFIGURATION_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        if err.is_configuration() {
            DomainError::Configuration(err.to_string())
        } else {
            DomainError::Unclassified(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_key_is_configuration() {
        let err = StoreError::Api {
            status: 401,
            kind: "API_KEY_INVALID".to_string(),
            message: "Invalid API key".to_string(),
        };
        assert!(matches!(DomainError::from(err), DomainError::Configuration(_)));
    }

    #[test]
    fn test_marker_inside_transport_message() {
        let err = StoreError::RequestFailed("upstream said BASE_NOT_FOUND".to_string());
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_credentials_is_configuration() {
        let err = StoreError::NotConfigured("AIRTABLE_API_KEY is not set".to_string());
        assert!(matches!(DomainError::from(err), DomainError::Configuration(_)));
    }

    #[test]
    fn test_other_failures_are_unclassified() {
        let err = StoreError::Api {
            status: 422,
            kind: "INVALID_VALUE_FOR_COLUMN".to_string(),
            message: "Field \"Role\" cannot accept the provided value".to_string(),
        };
        assert!(matches!(DomainError::from(err), DomainError::Unclassified(_)));
        assert!(!StoreError::RequestFailed("connection reset".to_string()).is_configuration());
    }
}
