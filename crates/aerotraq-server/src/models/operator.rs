//! Operator application body

use serde::Deserialize;
use utoipa::ToSchema;

use aerotraq::OperatorApplicationInput;

/// Operator / early-access application
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatorApplicationRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    /// commercial-mapping, agriculture, inspection, security-surveillance,
    /// delivery, recreational or other
    #[schema(example = "inspection")]
    pub drone_use_case: Option<String>,
    /// Free text, kept only when `droneUseCase` is `other`
    pub other_drone_use_case: Option<String>,
    /// compliance, ip-tokenization, data-monetization
    #[schema(value_type = Option<Vec<String>>)]
    pub interest: Option<serde_json::Value>,
    pub challenge: Option<String>,
    /// Must be `true`
    pub agreed_to_terms: Option<bool>,
}

impl From<OperatorApplicationRequest> for OperatorApplicationInput {
    fn from(req: OperatorApplicationRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            role: req.role,
            drone_use_case: req.drone_use_case,
            other_drone_use_case: req.other_drone_use_case,
            interest: req.interest,
            challenge: req.challenge,
            agreed_to_terms: req.agreed_to_terms,
        }
    }
}
