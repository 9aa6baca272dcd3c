//! DroneUseCase - primary use case picked on the operator form

/// Primary drone use case
///
/// The form offers a fixed list; values it does not know are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DroneUseCase {
    #[default]
    Unspecified,
    CommercialMapping,
    Agriculture,
    Inspection,
    SecuritySurveillance,
    Delivery,
    Recreational,
    /// "other", with the operator's own description
    Other(Option<String>),
    Custom(String),
}

impl DroneUseCase {
    /// Build from the raw selector value and the free-text elaboration.
    ///
    /// The elaboration is only kept when the selector is `other`.
    pub fn from_selection(selection: Option<String>, elaboration: Option<String>) -> Self {
        match selection.as_deref() {
            None | Some("") => DroneUseCase::Unspecified,
            Some("commercial-mapping") => DroneUseCase::CommercialMapping,
            Some("agriculture") => DroneUseCase::Agriculture,
            Some("inspection") => DroneUseCase::Inspection,
            Some("security-surveillance") => DroneUseCase::SecuritySurveillance,
            Some("delivery") => DroneUseCase::Delivery,
            Some("recreational") => DroneUseCase::Recreational,
            Some("other") => DroneUseCase::Other(elaboration.filter(|e| !e.is_empty())),
            Some(other) => DroneUseCase::Custom(other.to_string()),
        }
    }

    /// Value written to the primary use-case column.
    pub fn primary_label(&self) -> String {
        match self {
            DroneUseCase::Other(_) => "Other".to_string(),
            _ => self.to_string(),
        }
    }

    /// Value written to the secondary description column.
    pub fn description(&self) -> &str {
        match self {
            DroneUseCase::Other(Some(text)) => text,
            _ => "",
        }
    }
}

impl std::fmt::Display for DroneUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DroneUseCase::Unspecified => write!(f, ""),
            DroneUseCase::CommercialMapping => write!(f, "commercial-mapping"),
            DroneUseCase::Agriculture => write!(f, "agriculture"),
            DroneUseCase::Inspection => write!(f, "inspection"),
            DroneUseCase::SecuritySurveillance => write!(f, "security-surveillance"),
            DroneUseCase::Delivery => write!(f, "delivery"),
            DroneUseCase::Recreational => write!(f, "recreational"),
            DroneUseCase::Other(_) => write!(f, "other"),
            DroneUseCase::Custom(value) => write!(f, "{}", value),
        }
    }
}
