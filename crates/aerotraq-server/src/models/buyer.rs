//! Buyer application body

use serde::Deserialize;
use utoipa::ToSchema;

use aerotraq::BuyerApplicationInput;

/// Data-buyer application
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyerApplicationRequest {
    #[schema(example = "Alex Buyer")]
    pub full_name: Option<String>,
    pub organization: Option<String>,
    #[schema(example = "alex@company.com")]
    pub work_email: Option<String>,
    pub role: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub data_interests: Option<serde_json::Value>,
    pub preferred_regions: Option<String>,
    pub data_specs: Option<String>,
    pub data_licensing_type: Option<String>,
    pub intended_use_case: Option<String>,
    pub timeline: Option<String>,
    pub custom_pilot: Option<String>,
    pub additional_comments: Option<String>,
}

impl From<BuyerApplicationRequest> for BuyerApplicationInput {
    fn from(req: BuyerApplicationRequest) -> Self {
        Self {
            full_name: req.full_name,
            organization: req.organization,
            work_email: req.work_email,
            role: req.role,
            data_interests: req.data_interests,
            preferred_regions: req.preferred_regions,
            data_specs: req.data_specs,
            data_licensing_type: req.data_licensing_type,
            intended_use_case: req.intended_use_case,
            timeline: req.timeline,
            custom_pilot: req.custom_pilot,
            additional_comments: req.additional_comments,
        }
    }
}
