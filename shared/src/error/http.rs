//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

/// Which key of the `fail` envelope carries the error text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureShape {
    /// `{"status":"fail","message":"..."}` (unparseable input)
    Message,
    /// `{"status":"fail","error":"..."}` (input parsed but rejected)
    Error,
    /// `{"status":"fail","data":{"error":"..."}}` (gateway failure)
    Data,
}

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Unmatched routes only
            Self::NotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request: rejected before the gateway was called
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,

            // 500: everything the gateway reports, not-found included
            Self::EmployeeNotFound
            | Self::EmployeeQueryRejected
            | Self::InternalError
            | Self::DatabaseError
            | Self::TimeoutError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope layout used when this code is rendered as a failure
    pub fn failure_shape(&self) -> FailureShape {
        if self.http_status().is_server_error() {
            FailureShape::Data
        } else if matches!(self, Self::ValidationFailed) {
            FailureShape::Error
        } else {
            FailureShape::Message
        }
    }
}
