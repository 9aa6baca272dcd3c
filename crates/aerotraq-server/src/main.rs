use anyhow::Context;
use std::sync::Arc;

use aerotraq_server::{create_router, AirtableConnector, AppConfig, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🛩️  Aerotraq intake API initializing...");

    dotenvy::dotenv().ok();
    let config =
        AppConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
            .context("Failed to load configuration")?;

    if config.airtable.api_key.is_none() || config.airtable.base_id.is_none() {
        tracing::warn!("⚠️  AIRTABLE_API_KEY or AIRTABLE_BASE_ID not set - submissions will fail");
    } else {
        tracing::info!("📇 Airtable base configured");
    }
    tracing::info!(
        "🗂️  Tables: operator='{}', buyer='{}', tag policy {:?}",
        config.operator_table,
        config.buyer_table,
        config.tag_policy
    );

    let connector = AirtableConnector::new(config.airtable.clone())
        .context("Failed to build Airtable connector")?;
    let state = AppState::new(config, Arc::new(connector));

    let router = create_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Aerotraq intake API ready");

    Ok(router.into())
}
