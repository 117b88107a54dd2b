//! Standard error messages for consistent error responses.

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const NOT_FOUND: &str = "Not Found";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
