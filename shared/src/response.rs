//! API Response envelope
//!
//! Every response body is a JSON object tagged with `status`:
//! ```json
//! { "status": "success", "employeeDetails": { ... } }
//! { "status": "fail", "error": "all fields are mandatory" }
//! { "status": "fail", "data": { "error": "employee with ID 9 not found" } }
//! ```
//! Success payloads are flattened next to `status`, so each endpoint picks
//! its own top-level key.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, FailureShape};

/// Envelope status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Nested failure detail for gateway errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureData {
    pub error: String,
}

/// Unified response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FailureData>,
    /// Endpoint payload, flattened next to `status`
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response carrying a payload
    pub fn success(payload: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            error: None,
            data: None,
            payload: Some(payload),
        }
    }
}

impl ApiResponse<()> {
    /// Create a bare `{"status":"success"}` response
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            error: None,
            data: None,
            payload: None,
        }
    }

    /// Create a success response with a message
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok()
        }
    }

    /// Create a `fail` response laid out according to the error code
    pub fn failure(err: &AppError) -> Self {
        let mut resp = Self {
            status: ResponseStatus::Fail,
            ..Self::ok()
        };
        match err.code.failure_shape() {
            FailureShape::Message => resp.message = Some(err.message.clone()),
            FailureShape::Error => resp.error = Some(err.message.clone()),
            FailureShape::Data => {
                resp.data = Some(FailureData {
                    error: err.message.clone(),
                })
            }
        }
        resp
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
