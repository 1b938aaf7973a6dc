//! Shared types for the employee service
//!
//! Domain model, validation rules and the unified error/response types used
//! by the HTTP server and by anything that talks to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeCreate, EmployeeFields, EmployeeId, EmployeeUpdate};
