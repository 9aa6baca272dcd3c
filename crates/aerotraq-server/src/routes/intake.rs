//! Shared intake plumbing: body parsing, error mapping, store call

use axum::{http::StatusCode, Json};
use serde::de::DeserializeOwned;

use aerotraq::{DomainError, Submission};

use crate::application::{IntakeService, IntakeTrack};
use crate::models::{ErrorResponse, SubmissionResponse};
use crate::AppState;

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type SubmissionResult = Result<(StatusCode, Json<SubmissionResponse>), ApiError>;

pub const INVALID_BODY: &str = "Invalid request body";

/// Decode a JSON object body, answering 400 on anything else
pub fn parse_body<T: DeserializeOwned>(track: IntakeTrack, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::warn!("Unreadable {} application body: {}", track, err);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_BODY)))
    })
}

/// Log the full error, then answer with the sanitized message
pub fn reject(track: IntakeTrack, err: DomainError) -> ApiError {
    let (status, message) = match err {
        DomainError::Validation(message) => {
            tracing::warn!("Rejected {} application: {}", track, message);
            (StatusCode::BAD_REQUEST, message)
        }
        DomainError::Conflict(message) => (StatusCode::CONFLICT, message),
        other => {
            tracing::error!("Error submitting {} application: {}", track, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                track.failure_message(&other).to_string(),
            )
        }
    };

    (status, Json(ErrorResponse::new(message)))
}

/// Acquire a store client for this request and run the intake workflow
pub async fn store_application<A: Submission>(
    state: &AppState,
    track: IntakeTrack,
    table: &str,
    application: A,
) -> SubmissionResult {
    let store = state
        .connector
        .connect()
        .map_err(|err| reject(track, err.into()))?;

    let service = IntakeService::new(store, table, track);
    let record = service
        .submit(&application, chrono::Utc::now().date_naive())
        .await
        .map_err(|err| reject(track, err))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            message: track.success_message().to_string(),
            record_id: record.id,
        }),
    ))
}
