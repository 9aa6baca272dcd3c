//! Aerotraq API Routes
//!
//! - /api/submit-access - Operator / early-access applications
//! - /api/submit-buyer - Data-buyer applications
//! - /health - Liveness probe

pub mod buyer;
pub mod health;
pub mod intake;
pub mod operator;
pub mod swagger;
