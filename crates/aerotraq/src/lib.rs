//! Aerotraq Domain Library
//!
//! Core domain types and interfaces for the Aerotraq lead-intake service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Transient application payloads (OperatorApplication, BuyerApplication)
//!   - `value_objects/`: Validated value types (Email, DroneUseCase, TagPolicy)
//!   - `errors/`: Intake error taxonomy and Record Store failures
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `record_store`: Remote table access and per-request client acquisition
//!
//! # Usage
//!
//! ```rust,ignore
//! use aerotraq::domain::{OperatorApplication, Submission};
//! use aerotraq::ports::{RecordStore, RecordStoreConnector};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BuyerApplication, BuyerApplicationInput, DomainError, DroneUseCase, Email,
    OperatorApplication, OperatorApplicationInput, StoreError, Submission, TagPolicy,
};
pub use ports::{Fields, RecordQuery, RecordStore, RecordStoreConnector, StoredRecord};
