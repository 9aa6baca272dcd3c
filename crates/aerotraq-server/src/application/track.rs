//! Intake tracks and their user-facing wording

use aerotraq::DomainError;

/// Which form a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeTrack {
    /// Operator / early-access applications
    Operator,
    /// Data-buyer applications
    Buyer,
}

impl IntakeTrack {
    pub fn success_message(self) -> &'static str {
        match self {
            IntakeTrack::Operator => "Application submitted successfully",
            IntakeTrack::Buyer => "Buyer application submitted successfully",
        }
    }

    pub fn conflict_message(self) -> &'static str {
        match self {
            IntakeTrack::Operator => {
                "An application with this email address has already been submitted. Please use a different email."
            }
            IntakeTrack::Buyer => {
                "An application with this email address has already been submitted."
            }
        }
    }

    /// Sanitized message for a failure that reached the Record Store.
    ///
    /// Only the operator track tells configuration faults apart.
    pub fn failure_message(self, err: &DomainError) -> &'static str {
        match (self, err) {
            (IntakeTrack::Operator, DomainError::Configuration(_)) => "Server configuration error",
            (IntakeTrack::Operator, _) => "Failed to submit application. Please try again.",
            (IntakeTrack::Buyer, _) => "Failed to submit buyer application. Please try again.",
        }
    }
}

impl std::fmt::Display for IntakeTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeTrack::Operator => write!(f, "operator"),
            IntakeTrack::Buyer => write!(f, "buyer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_distinguishes_configuration() {
        let config = DomainError::Configuration("API_KEY_INVALID".to_string());
        let other = DomainError::Unclassified("timeout".to_string());
        assert_eq!(
            IntakeTrack::Operator.failure_message(&config),
            "Server configuration error"
        );
        assert_eq!(
            IntakeTrack::Operator.failure_message(&other),
            "Failed to submit application. Please try again."
        );
    }

    #[test]
    fn test_buyer_has_single_failure_message() {
        let config = DomainError::Configuration("API_KEY_INVALID".to_string());
        assert_eq!(
            IntakeTrack::Buyer.failure_message(&config),
            "Failed to submit buyer application. Please try again."
        );
    }
}
