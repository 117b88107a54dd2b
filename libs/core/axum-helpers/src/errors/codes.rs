//! Type-safe error codes attached to error log events.
//!
//! Response bodies stay minimal (`detail` or `message`); the integer code
//! is emitted as the `error_code` field of the corresponding log event so
//! failures can be grouped in log aggregation.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or path failed to deserialize into the expected schema
    ValidationError,

    /// Requested resource was not found
    NotFound,

    // Server errors (5000-5999)
    /// An unexpected internal server error occurred
    InternalError,

    /// A handler panicked while processing the request
    HandlerPanic,
}

impl ErrorCode {
    /// Integer code for logging and monitoring
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 5001,
            ErrorCode::HandlerPanic => 5002,
        }
    }
}
