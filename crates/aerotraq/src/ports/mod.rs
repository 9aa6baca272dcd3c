//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with the external Record Store.
//!
//! Implementations of these traits live in the server crate.

mod record_store;

pub use record_store::*;
