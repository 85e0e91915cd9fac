use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Postal address captured on the signup form.
///
/// Wire names stay the Portuguese ones the frontend sends.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct Address {
    #[serde(rename = "rua", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "cep", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// User document stored in MongoDB.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(rename = "dataNascimento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Address,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}

/// Request payload for creating a user through the JSON API.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[serde(rename = "nome")]
    #[schema(example = "Ana")]
    pub name: String,
    /// Contact address, also used as a lookup key
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[serde(default)]
    pub cpf: Option<String>,
    /// Date of birth in YYYY-MM-DD format
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Address,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        let now = mongodb::bson::DateTime::now();
        User {
            id: None,
            name: req.name,
            email: req.email,
            cpf: req.cpf,
            birth_date: req.birth_date,
            address: req.address,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields posted by the signup form.
///
/// Address fields arrive flattened, the way the HTML form names them. The
/// optional `id` carries an existing identifier when a saved user is
/// re-submitted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveUserForm {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<String>,
    #[serde(rename = "rua")]
    pub street: Option<String>,
    #[serde(rename = "cidade")]
    pub city: Option<String>,
    #[serde(rename = "estado")]
    pub state: Option<String>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
}

impl SaveUserForm {
    /// Bind the form fields into a [`User`] ready to be saved.
    pub fn into_user(self, id: Option<ObjectId>) -> User {
        let now = mongodb::bson::DateTime::now();
        User {
            id,
            name: self.name,
            email: self.email,
            cpf: self.cpf,
            birth_date: self.birth_date,
            address: Address {
                street: self.street,
                city: self.city,
                state: self.state,
                postal_code: self.postal_code,
            },
            created_at: now,
            updated_at: now,
        }
    }
}

/// User data returned in API responses.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[serde(rename = "nome")]
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(rename = "dataNascimento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Address,
    /// When the user was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            cpf: user.cpf,
            birth_date: user.birth_date,
            address: user.address,
            created_at: DateTime::from_timestamp_millis(user.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
