use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Listing page contract: list + form post with redirect
        .service(
            web::scope("/usuarios")
                .route("", web::get().to(handlers::list_users))
                .route("/salvar", web::post().to(handlers::save_user)),
        )
        // JSON API consumed by the reservation frontend
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health_check))
                .service(
                    web::scope("/usuarios")
                        .route("", web::get().to(handlers::list_users))
                        .route("", web::post().to(handlers::create_user)),
                ),
        )
        .route("/api-docs/openapi.json", web::get().to(openapi_json));
}

/// Service health probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
