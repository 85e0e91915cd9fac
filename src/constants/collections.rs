//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "usuarios";
