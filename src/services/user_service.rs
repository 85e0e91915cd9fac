//! User service delegating to the repository port.

use std::sync::Arc;

use log::debug;

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;

/// Pass-through business layer between handlers and the repository.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// All users in storage order.
    pub async fn list_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Fetching all users");
        self.repository.find_all().await
    }

    /// Persist the user; insert when it has no identifier, update otherwise.
    pub async fn save(&self, user: User) -> Result<User, ApiError> {
        debug!("Saving user with email: {}", user.email);
        self.repository.save(user).await
    }

    /// Look up a user by exact email; absence is not a failure.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Finding user by email: {}", email);
        self.repository.find_by_email(email).await
    }
}
