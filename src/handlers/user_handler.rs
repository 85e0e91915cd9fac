//! User handlers for the listing and signup operations.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::{info, warn};
use mongodb::bson::oid::ObjectId;

use crate::constants::ERR_INVALID_USER_ID;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, SaveUserForm, UserResponse};
use crate::services::UserService;

/// List all registered users
///
/// The body is a bare array; the reservation frontend binds it directly.
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.list_all().await?;
    let body: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Accept the signup form and redirect back to the listing
#[utoipa::path(
    post,
    path = "/usuarios/salvar",
    tag = "Users",
    request_body(content = SaveUserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "User saved, redirect to the listing"),
        (status = 400, description = "Malformed user ID", body = crate::errors::ErrorResponse)
    )
)]
pub async fn save_user(
    user_service: web::Data<UserService>,
    form: web::Form<SaveUserForm>,
) -> Result<HttpResponse, ApiError> {
    let form = form.into_inner();

    // An empty id field comes through as "" on HTML forms
    let id = match form.id.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(ObjectId::parse_str(raw).map_err(|_| {
            warn!("Save failed: invalid user id: {}", raw);
            ApiError::BadRequest(ERR_INVALID_USER_ID.to_string())
        })?),
        None => None,
    };

    let saved = user_service.save(form.into_user(id)).await?;
    info!(
        "Saved user: {}",
        saved.id.map(|id| id.to_hex()).unwrap_or_default()
    );

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/usuarios"))
        .finish())
}

/// Create a user through the JSON API
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let saved = user_service.save(body.into_inner().into()).await?;
    let response: UserResponse = saved.into();
    info!("Created user: {}", response.id);
    Ok(HttpResponse::Created().json(response))
}
