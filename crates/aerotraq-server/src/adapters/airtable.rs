//! Airtable Record Store
//!
//! REST client for the Airtable `v0` API. A connector hands out one client
//! per request; the underlying reqwest pool is shared.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use aerotraq::{Fields, RecordQuery, RecordStore, RecordStoreConnector, StoreError, StoredRecord};

use crate::config::AirtableConfig;

const USER_AGENT: &str = concat!("aerotraq-server/", env!("CARGO_PKG_VERSION"));

/// Builds an [`AirtableClient`] from configuration on every request
#[derive(Clone)]
pub struct AirtableConnector {
    http: Client,
    config: AirtableConfig,
}

impl AirtableConnector {
    pub fn new(config: AirtableConfig) -> Result<Self, StoreError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| StoreError::RequestFailed(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, config })
    }
}

impl RecordStoreConnector for AirtableConnector {
    fn connect(&self) -> Result<Arc<dyn RecordStore>, StoreError> {
        let api_key = self
            .config
            .api_key
            .clone()
            .ok_or_else(|| StoreError::NotConfigured("AIRTABLE_API_KEY is not set".to_string()))?;
        let base_id = self
            .config
            .base_id
            .clone()
            .ok_or_else(|| StoreError::NotConfigured("AIRTABLE_BASE_ID is not set".to_string()))?;

        Ok(Arc::new(AirtableClient {
            http: self.http.clone(),
            endpoint_url: self.config.endpoint_url.clone(),
            api_key,
            base_id,
        }))
    }
}

/// Airtable client bound to one base
pub struct AirtableClient {
    http: Client,
    endpoint_url: String,
    api_key: String,
    base_id: String,
}

impl AirtableClient {
    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/v0/{}/{}",
            self.endpoint_url,
            self.base_id,
            urlencoding::encode(table)
        )
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| StoreError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        response
            .json()
            .await
            .map_err(|err| StoreError::Parse(err.to_string()))
    }
}

#[async_trait]
impl RecordStore for AirtableClient {
    async fn select(
        &self,
        table: &str,
        query: &RecordQuery,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let max_records = query.max_records.to_string();
        let request = self.http.get(self.table_url(table)).query(&[
            ("filterByFormula", query.filter_by_formula.as_str()),
            ("maxRecords", max_records.as_str()),
        ]);

        let page: RecordList = self.send(request).await?;
        Ok(page.records)
    }

    async fn create(
        &self,
        table: &str,
        records: Vec<Fields>,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let body = CreateRecords {
            records: records.into_iter().map(|fields| NewRecord { fields }).collect(),
        };
        let request = self.http.post(self.table_url(table)).json(&body);

        let created: RecordList = self.send(request).await?;
        Ok(created.records)
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct CreateRecords {
    records: Vec<NewRecord>,
}

#[derive(Serialize)]
struct NewRecord {
    fields: Fields,
}

#[derive(Deserialize)]
struct RecordList {
    #[serde(default)]
    records: Vec<StoredRecord>,
}

// ============================================
// Helper Functions
// ============================================

/// Airtable reports errors either as `{"error": "TYPE"}` or as
/// `{"error": {"type": "TYPE", "message": "..."}}`.
fn map_http_error(status: StatusCode, body: String) -> StoreError {
    let error = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| json.get("error").cloned());

    let (kind, message) = match error {
        Some(Value::String(kind)) => (kind, String::new()),
        Some(Value::Object(obj)) => (
            obj.get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN_ERROR")
                .to_string(),
            obj.get("message")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        ),
        _ => ("UNKNOWN_ERROR".to_string(), body),
    };

    StoreError::Api {
        status: status.as_u16(),
        kind,
        message,
    }
}
