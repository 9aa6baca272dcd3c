//! Shared fixtures for intake API tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use aerotraq::{Fields, RecordQuery, RecordStore, RecordStoreConnector, StoreError, StoredRecord};
use aerotraq_server::{create_router, AppConfig, AppState};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory Record Store that records every call it receives.
#[derive(Default)]
pub struct RecordingStore {
    existing: Mutex<Vec<StoredRecord>>,
    fail_with: Mutex<Option<StoreError>>,
    pub selects: Mutex<Vec<(String, RecordQuery)>>,
    pub creates: Mutex<Vec<(String, Vec<Fields>)>>,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store that already holds one record for every lookup.
    pub fn with_existing(id: &str) -> Arc<Self> {
        let store = Self::default();
        store.existing.lock().unwrap().push(StoredRecord {
            id: id.to_string(),
            fields: Fields::new(),
        });
        Arc::new(store)
    }

    /// Store whose every call fails with `err`.
    pub fn failing(err: StoreError) -> Arc<Self> {
        let store = Self::default();
        *store.fail_with.lock().unwrap() = Some(err);
        Arc::new(store)
    }

    pub fn select_count(&self) -> usize {
        self.selects.lock().unwrap().len()
    }

    pub fn create_count(&self) -> usize {
        self.creates.lock().unwrap().len()
    }

    /// Field set of the single record created so far.
    pub fn only_created(&self) -> (String, Fields) {
        let creates = self.creates.lock().unwrap();
        assert_eq!(creates.len(), 1, "expected exactly one create call");
        let (table, records) = &creates[0];
        assert_eq!(records.len(), 1, "expected exactly one record per create");
        (table.clone(), records[0].clone())
    }

    fn failure(&self) -> Option<StoreError> {
        self.fail_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn select(
        &self,
        table: &str,
        query: &RecordQuery,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        self.selects
            .lock()
            .unwrap()
            .push((table.to_string(), query.clone()));
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let existing = self.existing.lock().unwrap();
        Ok(existing
            .iter()
            .take(query.max_records as usize)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        table: &str,
        records: Vec<Fields>,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut creates = self.creates.lock().unwrap();
        creates.push((table.to_string(), records.clone()));
        let batch = creates.len();
        Ok(records
            .into_iter()
            .enumerate()
            .map(|(i, fields)| StoredRecord {
                id: format!("recTest{batch}x{i}"),
                fields,
            })
            .collect())
    }
}

/// Connector that always hands out the same recording store.
pub struct FixedConnector {
    store: Arc<RecordingStore>,
    refuse: Option<StoreError>,
}

impl RecordStoreConnector for FixedConnector {
    fn connect(&self) -> Result<Arc<dyn RecordStore>, StoreError> {
        match &self.refuse {
            Some(err) => Err(err.clone()),
            None => Ok(self.store.clone() as Arc<dyn RecordStore>),
        }
    }
}

pub fn router_with(store: Arc<RecordingStore>, config: AppConfig) -> Router {
    let connector = FixedConnector {
        store,
        refuse: None,
    };
    create_router(AppState::new(config, Arc::new(connector)))
}

pub fn router(store: Arc<RecordingStore>) -> Router {
    router_with(store, AppConfig::default())
}

/// Router whose connector fails as if credentials were missing.
pub fn unconfigured_router(store: Arc<RecordingStore>) -> Router {
    let connector = FixedConnector {
        store,
        refuse: Some(StoreError::NotConfigured(
            "AIRTABLE_API_KEY is not set".to_string(),
        )),
    };
    create_router(AppState::new(AppConfig::default(), Arc::new(connector)))
}

/// Send a request and decode the JSON response body.
pub async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, &body.to_string()).await
}

pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
