use axum::{
    Router,
    routing::{get, post},
};

pub mod calculate;
pub mod system;

/// Router for the engine endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/grid-regions", get(system::grid_regions))
        .route("/calculate", post(calculate::calculate))
}
