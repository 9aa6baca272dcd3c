//! BuyerApplication - data-buyer interest form

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{or_blank, present, Email, TagPolicy};
use crate::domain::Submission;
use crate::ports::Fields;

pub const MISSING_BUYER_FIELDS: &str = "Full Name and Work Email are required.";
pub const INVALID_BUYER_EMAIL: &str = "Invalid email format.";

/// Raw buyer form values, as received
#[derive(Debug, Clone, Default)]
pub struct BuyerApplicationInput {
    pub full_name: Option<String>,
    pub organization: Option<String>,
    pub work_email: Option<String>,
    pub role: Option<String>,
    pub data_interests: Option<Value>,
    pub preferred_regions: Option<String>,
    pub data_specs: Option<String>,
    pub data_licensing_type: Option<String>,
    pub intended_use_case: Option<String>,
    pub timeline: Option<String>,
    pub custom_pilot: Option<String>,
    pub additional_comments: Option<String>,
}

/// Validated buyer application
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerApplication {
    pub full_name: String,
    pub organization: String,
    pub work_email: Email,
    pub role: String,
    pub data_interests: Vec<String>,
    pub preferred_regions: String,
    pub data_specs: String,
    pub data_licensing_type: String,
    pub intended_use_case: String,
    pub timeline: String,
    pub custom_pilot: String,
    pub additional_comments: String,
}

impl BuyerApplication {
    pub fn validate(input: BuyerApplicationInput, tags: TagPolicy) -> Result<Self, DomainError> {
        let (Some(full_name), Some(work_email)) =
            (present(input.full_name), present(input.work_email))
        else {
            return Err(DomainError::validation(MISSING_BUYER_FIELDS));
        };

        let work_email = Email::parse(work_email, INVALID_BUYER_EMAIL)?;
        let data_interests = tags.coerce("dataInterests", input.data_interests)?;

        Ok(Self {
            full_name,
            organization: or_blank(input.organization),
            work_email,
            role: or_blank(input.role),
            data_interests,
            preferred_regions: or_blank(input.preferred_regions),
            data_specs: or_blank(input.data_specs),
            data_licensing_type: or_blank(input.data_licensing_type),
            intended_use_case: or_blank(input.intended_use_case),
            timeline: or_blank(input.timeline),
            custom_pilot: or_blank(input.custom_pilot),
            additional_comments: or_blank(input.additional_comments),
        })
    }
}

impl Submission for BuyerApplication {
    fn email_column(&self) -> &'static str {
        "Work Email"
    }

    fn email(&self) -> &Email {
        &self.work_email
    }

    /// Buyer records carry no submission date.
    fn to_fields(&self, _submitted_on: NaiveDate) -> Fields {
        let mut fields = Fields::new();
        fields.insert("Full Name".into(), json!(self.full_name));
        fields.insert("Organization / Company".into(), json!(self.organization));
        fields.insert("Work Email".into(), json!(self.work_email));
        fields.insert("Role".into(), json!(self.role));
        fields.insert("Data Interests".into(), json!(self.data_interests));
        fields.insert("Preferred Regions".into(), json!(self.preferred_regions));
        fields.insert(
            "Data Specs / Format Requirements".into(),
            json!(self.data_specs),
        );
        fields.insert("Data Licensing Type".into(), json!(self.data_licensing_type));
        fields.insert("Intended Use Case".into(), json!(self.intended_use_case));
        fields.insert("Timeline to Access Data".into(), json!(self.timeline));
        fields.insert("Interested in Custom Pilot".into(), json!(self.custom_pilot));
        fields.insert(
            "Additional Comments / Requirements".into(),
            json!(self.additional_comments),
        );
        fields
    }
}
