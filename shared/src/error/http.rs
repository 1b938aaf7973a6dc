//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Store write failures map to 400 while store read failures map to 500:
    /// a rejected write is most likely caused by the submitted document.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            Self::InternalError | Self::DatabaseError | Self::EmployeeLookupFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation and rejected writes)
            Self::ValidationFailed
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::HireDateInFuture
            | Self::EmployeeSaveFailed => StatusCode::BAD_REQUEST,
        }
    }
}
