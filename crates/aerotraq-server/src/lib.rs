//! Aerotraq Intake API
//!
//! HTTP surface for the landing page's two lead-capture forms. Each request
//! is validated, checked for a duplicate email, and stored as one Airtable
//! record.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use aerotraq::RecordStoreConnector;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

pub use adapters::AirtableConnector;
pub use config::AppConfig;

/// Application state shared across all routes
///
/// Holds no store client; one is acquired per request through `connector`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub connector: Arc<dyn RecordStoreConnector>,
}

impl AppState {
    pub fn new(config: AppConfig, connector: Arc<dyn RecordStoreConnector>) -> Self {
        Self {
            config: Arc::new(config),
            connector,
        }
    }
}

/// Build the full router: intake endpoints, health check and API docs
pub fn create_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::operator::router())
        .merge(routes::buyer::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
