//! Operator Intake Route

use axum::{body::Bytes, extract::State, routing::post, Router};

use aerotraq::OperatorApplication;

use super::intake::{parse_body, reject, store_application, SubmissionResult};
use crate::application::IntakeTrack;
use crate::models::{ErrorResponse, OperatorApplicationRequest, SubmissionResponse};
use crate::AppState;

/// Submit an operator / early-access application
#[utoipa::path(
    post,
    path = "/api/submit-access",
    request_body = OperatorApplicationRequest,
    responses(
        (status = 201, description = "Application stored", body = SubmissionResponse),
        (status = 400, description = "Missing required field or invalid email", body = ErrorResponse),
        (status = 409, description = "Email already submitted", body = ErrorResponse),
        (status = 500, description = "Record store failure", body = ErrorResponse)
    ),
    tag = "Intake"
)]
pub async fn submit_access(State(state): State<AppState>, body: Bytes) -> SubmissionResult {
    let track = IntakeTrack::Operator;
    let request: OperatorApplicationRequest = parse_body(track, &body)?;
    let application = OperatorApplication::validate(request.into(), state.config.tag_policy)
        .map_err(|err| reject(track, err))?;

    store_application(&state, track, &state.config.operator_table, application).await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/submit-access", post(submit_access))
}
