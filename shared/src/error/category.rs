//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Who is at fault, as recorded in server-error logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The submitted input was rejected
    Input,
    /// An employee record could not be found, read or written
    Employee,
    /// The service itself failed
    System,
}

impl ErrorCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Employee => "employee",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Success
            | Self::ValidationFailed
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::HireDateInFuture => ErrorCategory::Input,

            Self::EmployeeNotFound | Self::EmployeeLookupFailed | Self::EmployeeSaveFailed => {
                ErrorCategory::Employee
            }

            Self::InternalError | Self::DatabaseError => ErrorCategory::System,
        }
    }
}
