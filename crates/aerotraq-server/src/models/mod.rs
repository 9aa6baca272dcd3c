//! Aerotraq Request/Response Models
//!
//! - Operator: early-access application body
//! - Buyer: data-buyer application body
//! - Response: success and error envelopes shared by both tracks

mod buyer;
mod operator;
mod response;

pub use buyer::*;
pub use operator::*;
pub use response::*;
