//! Domain Entities
//!
//! Transient application payloads. Each is built from a request body,
//! validated, mapped onto Record Store columns and then dropped.

mod buyer_application;
mod operator_application;
mod submission;

pub use buyer_application::*;
pub use operator_application::*;
pub use submission::*;
