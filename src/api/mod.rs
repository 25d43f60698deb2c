//! HTTP API module for the payroll engine.
//!
//! This module exposes the pure calculators (compensation breakdown, EOSB
//! and attendance classification) as JSON endpoints. Pay runs are not
//! exposed; they need a salary-record client supplied by the embedding
//! application.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{BreakdownRequest, ClassifyRequest, EosbRequest};
pub use response::{ApiError, ApiErrorResponse};
