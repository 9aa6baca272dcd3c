//! Application Layer (Use Cases)
//!
//! Orchestrates the intake workflow between validated applications
//! and the Record Store.

mod intake_service;
mod track;

pub use intake_service::IntakeService;
pub use track::IntakeTrack;
