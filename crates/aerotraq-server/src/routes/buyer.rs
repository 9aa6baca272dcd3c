//! Buyer Intake Route

use axum::{body::Bytes, extract::State, routing::post, Router};

use aerotraq::BuyerApplication;

use super::intake::{parse_body, reject, store_application, SubmissionResult};
use crate::application::IntakeTrack;
use crate::models::{BuyerApplicationRequest, ErrorResponse, SubmissionResponse};
use crate::AppState;

/// Submit a data-buyer application
#[utoipa::path(
    post,
    path = "/api/submit-buyer",
    request_body = BuyerApplicationRequest,
    responses(
        (status = 201, description = "Application stored", body = SubmissionResponse),
        (status = 400, description = "Missing required field or invalid email", body = ErrorResponse),
        (status = 409, description = "Work email already submitted", body = ErrorResponse),
        (status = 500, description = "Record store failure", body = ErrorResponse)
    ),
    tag = "Intake"
)]
pub async fn submit_buyer(State(state): State<AppState>, body: Bytes) -> SubmissionResult {
    let track = IntakeTrack::Buyer;
    let request: BuyerApplicationRequest = parse_body(track, &body)?;
    let application = BuyerApplication::validate(request.into(), state.config.tag_policy)
        .map_err(|err| reject(track, err))?;

    store_application(&state, track, &state.config.buyer_table, application).await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/submit-buyer", post(submit_buyer))
}
