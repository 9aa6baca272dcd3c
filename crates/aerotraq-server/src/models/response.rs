//! Response envelopes

use serde::Serialize;
use utoipa::ToSchema;

/// Returned with 201 once the record exists
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    /// Identifier assigned by the Record Store
    #[schema(example = "recA1b2C3d4E5f6G7")]
    pub record_id: String,
}

/// Returned with every 4xx/5xx
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
}
