//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    BuyerApplicationRequest, ErrorResponse, HealthCheck, OperatorApplicationRequest,
    SubmissionResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::operator::submit_access,
        super::buyer::submit_buyer,
        super::health::health_check,
    ),
    info(
        title = "Aerotraq Intake API",
        version = "0.1.0",
        description = "Lead-capture endpoints for the Aerotraq landing page.\n\nSubmissions are stored in Airtable.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Intake", description = "Operator and data-buyer applications"),
    ),
    components(
        schemas(
            OperatorApplicationRequest,
            BuyerApplicationRequest,
            SubmissionResponse,
            ErrorResponse,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;
