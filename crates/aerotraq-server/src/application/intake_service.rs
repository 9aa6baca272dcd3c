//! Intake Application Service (Use Case)
//!
//! duplicate-check -> transform -> create, against one table.
//!
//! The duplicate check and the create are two separate store calls. Two
//! concurrent submissions with the same address can both pass the check;
//! Airtable offers no unique constraint to close that window.

use chrono::NaiveDate;
use std::sync::Arc;

use aerotraq::{DomainError, RecordQuery, RecordStore, StoredRecord, Submission};

use super::IntakeTrack;

/// Application service for one intake track
pub struct IntakeService<S: RecordStore + ?Sized> {
    store: Arc<S>,
    table: String,
    track: IntakeTrack,
}

impl<S: RecordStore + ?Sized> IntakeService<S> {
    pub fn new(store: Arc<S>, table: impl Into<String>, track: IntakeTrack) -> Self {
        Self {
            store,
            table: table.into(),
            track,
        }
    }

    /// Store a validated application unless its email is already on file
    pub async fn submit<A: Submission>(
        &self,
        application: &A,
        submitted_on: NaiveDate,
    ) -> Result<StoredRecord, DomainError> {
        self.ensure_unique(application).await?;

        let fields = application.to_fields(submitted_on);
        let record = self
            .store
            .create(&self.table, vec![fields])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                DomainError::Unclassified("Record store returned no created record".to_string())
            })?;

        tracing::info!(
            "Created {} application {} in '{}'",
            self.track,
            record.id,
            self.table
        );

        Ok(record)
    }

    async fn ensure_unique<A: Submission>(&self, application: &A) -> Result<(), DomainError> {
        let query =
            RecordQuery::field_equals(application.email_column(), application.email().as_str(), 1);
        let existing = self.store.select(&self.table, &query).await?;

        if let Some(record) = existing.first() {
            tracing::warn!(
                "Duplicate {} application rejected (existing record {})",
                self.track,
                record.id
            );
            return Err(DomainError::conflict(self.track.conflict_message()));
        }

        Ok(())
    }
}
