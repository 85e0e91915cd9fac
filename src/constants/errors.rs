//! Error message constants used throughout the application.

pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
