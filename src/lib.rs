//! User registration service for the room reservation system.
//!
//! Serves the user listing, accepts signup form posts, and exposes the JSON
//! API consumed by the reservation frontend. Persistence goes through the
//! [`repositories::UserRepository`] port; the binary wires the MongoDB
//! adapter, tests use the in-memory one.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
