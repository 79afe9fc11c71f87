//! Shared types for the employee service
//!
//! Domain model, error codes and the JSON response envelope used by
//! `employee-server` and by anything that talks to it.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeChanges};
pub use response::{ApiResponse, ResponseStatus};
