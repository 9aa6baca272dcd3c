//! Value Objects
//!
//! Immutable, validated values used by the application entities.

mod drone_use_case;
mod email;
mod tag_policy;
mod text;

pub use drone_use_case::*;
pub use email::*;
pub use tag_policy::*;
pub use text::*;
