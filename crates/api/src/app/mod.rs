//! HTTP API application wiring (Axum router).
//!
//! - `services.rs`: request evaluation (validate, calculate, tax credit)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Largest accepted request body; a calculation request is a few hundred bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(DefaultBodyLimit::max(MAX_BODY_BYTES)))
}
