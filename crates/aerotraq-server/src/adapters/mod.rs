//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod airtable;

// Re-exports
pub use airtable::{AirtableClient, AirtableConnector};
