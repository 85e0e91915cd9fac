//! User repository port and its MongoDB adapter.
//!
//! The trait captures the three operations the service layer needs; the
//! adapter encapsulates all database access for the users collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::User;

/// Persistence port for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in storage order; empty when none exist.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    /// Insert when the user has no identifier, replace otherwise. The
    /// returned user always carries an identifier.
    async fn save(&self, user: User) -> Result<User, ApiError>;

    /// Zero-or-one user whose email matches exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
}

/// Repository for user-related database operations.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new repository over the users collection.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// Called once during application startup. Email uniqueness lives here,
    /// in the storage engine, not in the layers above.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding all users");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn save(&self, mut user: User) -> Result<User, ApiError> {
        match user.id {
            Some(id) => {
                debug!("Repository: Replacing user: {}", id);
                self.collection
                    .replace_one(doc! { "_id": id }, &user)
                    .upsert(true)
                    .await?;
            }
            None => {
                let id = ObjectId::new();
                user.id = Some(id);
                debug!("Repository: Inserting user: {}", id);
                self.collection.insert_one(&user).await?;
            }
        }
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", email);
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }
}
