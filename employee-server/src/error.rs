//! Service-layer error type
//!
//! `ServiceError` is what the persistence gateway reports. Handlers turn it
//! into `AppError` with `?`, which fixes the status code and envelope layout:
//! every gateway failure lands on the 500 `data.error` branch.

use std::time::Duration;

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input the gateway refused before touching the store
    #[error("{0}")]
    Validation(String),
    /// No row with this id
    #[error("employee with ID {0} not found")]
    NotFound(i32),
    /// Driver or SQL failure
    #[error(transparent)]
    Store(#[from] sqlx::Error),
    /// The database call outlived its deadline
    #[error("database call timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// The task running the database call panicked or was cancelled
    #[error("dispatch task failed: {0}")]
    Dispatch(#[from] tokio::task::JoinError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::EmployeeQueryRejected,
            Self::NotFound(_) => ErrorCode::EmployeeNotFound,
            Self::Store(_) => ErrorCode::DatabaseError,
            Self::Timeout(_) => ErrorCode::TimeoutError,
            Self::Dispatch(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::with_message(e.code(), e.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
