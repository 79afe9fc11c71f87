//! Error system for the employee service
//!
//! - [`ErrorCode`]: standardized error codes
//! - [`AppError`]: code + human-readable message, renders as a `fail` envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (request parsing, validation)
//! - 8xxx: Employee errors
//! - 9xxx: System errors (database, timeouts)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("all fields are mandatory");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use self::http::FailureShape;
pub use types::{AppError, AppResult};
