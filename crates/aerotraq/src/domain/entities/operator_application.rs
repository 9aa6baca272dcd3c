//! OperatorApplication - early-access request from a drone operator

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{or_blank, present, DroneUseCase, Email, TagPolicy};
use crate::domain::Submission;
use crate::ports::Fields;

pub const MISSING_OPERATOR_FIELDS: &str =
    "Missing required fields: name, email, and terms agreement are required";
pub const INVALID_OPERATOR_EMAIL: &str = "Invalid email format";

/// Raw operator form values, as received
#[derive(Debug, Clone, Default)]
pub struct OperatorApplicationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub drone_use_case: Option<String>,
    pub other_drone_use_case: Option<String>,
    pub interest: Option<Value>,
    pub challenge: Option<String>,
    pub agreed_to_terms: Option<bool>,
}

/// Validated operator application
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorApplication {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub drone_use_case: DroneUseCase,
    pub interest: Vec<String>,
    pub challenge: String,
}

impl OperatorApplication {
    /// Check required fields and email shape, then normalize the rest.
    pub fn validate(input: OperatorApplicationInput, tags: TagPolicy) -> Result<Self, DomainError> {
        let (Some(name), Some(email), Some(true)) = (
            present(input.name),
            present(input.email),
            input.agreed_to_terms,
        ) else {
            return Err(DomainError::validation(MISSING_OPERATOR_FIELDS));
        };

        let email = Email::parse(email, INVALID_OPERATOR_EMAIL)?;
        let interest = tags.coerce("interest", input.interest)?;

        Ok(Self {
            name,
            email,
            phone: or_blank(input.phone),
            company: or_blank(input.company),
            role: or_blank(input.role),
            drone_use_case: DroneUseCase::from_selection(
                input.drone_use_case,
                input.other_drone_use_case,
            ),
            interest,
            challenge: or_blank(input.challenge),
        })
    }
}

impl Submission for OperatorApplication {
    fn email_column(&self) -> &'static str {
        "Email"
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn to_fields(&self, submitted_on: NaiveDate) -> Fields {
        let mut fields = Fields::new();
        fields.insert("Name".into(), json!(self.name));
        fields.insert("Email".into(), json!(self.email));
        fields.insert("Phone".into(), json!(self.phone));
        fields.insert("Company/Organization".into(), json!(self.company));
        fields.insert("Your Role".into(), json!(self.role));
        fields.insert(
            "Primary Drone Use Case".into(),
            json!(self.drone_use_case.primary_label()),
        );
        fields.insert(
            "Other Use Case Description".into(),
            json!(self.drone_use_case.description()),
        );
        fields.insert("Excitement about Aerotraq".into(), json!(self.interest));
        fields.insert("Biggest Challenge".into(), json!(self.challenge));
        // Only accepted applications get this far.
        fields.insert("Terms Agreement".into(), json!(true));
        fields.insert(
            "Submission Date".into(),
            json!(submitted_on.format("%Y-%m-%d").to_string()),
        );
        fields
    }
}
