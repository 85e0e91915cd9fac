//! In-memory implementation of the user repository (for development and
//! testing).

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;

/// Keeps users in insertion order, which doubles as the storage order
/// reported by `find_all`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn save(&self, mut user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        match user.id {
            Some(id) => {
                if let Some(slot) = users.iter_mut().find(|u| u.id == Some(id)) {
                    *slot = user.clone();
                } else {
                    users.push(user.clone());
                }
            }
            None => {
                user.id = Some(ObjectId::new());
                users.push(user.clone());
            }
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        // Reverse scan so the most recently saved match wins
        Ok(users.iter().rev().find(|u| u.email == email).cloned())
    }
}
