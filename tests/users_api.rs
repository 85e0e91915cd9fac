//! HTTP contract tests exercising the real route table against the
//! in-memory repository.

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::json;

use usuario_service::models::UserResponse;
use usuario_service::repositories::InMemoryUserRepository;
use usuario_service::routes::configure_routes;
use usuario_service::services::UserService;

fn user_service() -> web::Data<UserService> {
    web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
}

#[actix_web::test]
async fn listing_starts_empty() {
    let app = test::init_service(
        App::new()
            .app_data(user_service())
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/usuarios").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<UserResponse> = test::read_body_json(resp).await;
    assert!(users.is_empty());
}

#[actix_web::test]
async fn form_create_redirects_and_shows_up_in_listing() {
    let app = test::init_service(
        App::new()
            .app_data(user_service())
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/usuarios/salvar")
            .set_form([("nome", "Ana"), ("email", "ana@x.com")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/usuarios"
    );

    let resp = test::call_service(&app, test::TestRequest::get().uri("/usuarios").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<UserResponse> = test::read_body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ana");
    assert_eq!(users[0].email, "ana@x.com");
    assert!(!users[0].id.is_empty());
}

#[actix_web::test]
async fn json_create_returns_the_persisted_user() {
    let app = test::init_service(
        App::new()
            .app_data(user_service())
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/usuarios")
            .set_json(json!({
                "nome": "Ana",
                "email": "ana@x.com",
                "cpf": "123.456.789-00",
                "endereco": { "cidade": "Campinas", "estado": "SP" }
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: UserResponse = test::read_body_json(resp).await;
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Ana");
    assert_eq!(created.address.city.as_deref(), Some("Campinas"));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/usuarios").to_request()).await;
    let users: Vec<UserResponse> = test::read_body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, created.id);
}

#[actix_web::test]
async fn resubmitting_the_form_with_an_id_updates_the_record() {
    let app = test::init_service(
        App::new()
            .app_data(user_service())
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/usuarios")
            .set_json(json!({ "nome": "Ana", "email": "ana@x.com" }))
            .to_request(),
    )
    .await;
    let created: UserResponse = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/usuarios/salvar")
            .set_form([
                ("id", created.id.as_str()),
                ("nome", "Ana Maria"),
                ("email", "ana@x.com"),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/usuarios").to_request()).await;
    let users: Vec<UserResponse> = test::read_body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, created.id);
    assert_eq!(users[0].name, "Ana Maria");
}

#[actix_web::test]
async fn malformed_id_on_the_form_is_a_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(user_service())
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/usuarios/salvar")
            .set_form([("id", "not-an-id"), ("nome", "Ana"), ("email", "ana@x.com")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_endpoint_responds() {
    let app = test::init_service(
        App::new()
            .app_data(user_service())
            .configure(configure_routes),
    )
    .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
}
