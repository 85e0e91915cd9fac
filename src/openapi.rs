use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{Address, CreateUserRequest, HealthResponse, SaveUserForm, UserResponse};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuario Service API",
        version = "1.0.0",
        description = "User listing and signup endpoints for the room reservation system."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User listing and signup endpoints")
    ),
    paths(
        crate::handlers::list_users,
        crate::handlers::save_user,
        crate::handlers::create_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            SaveUserForm,
            Address,
            UserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
