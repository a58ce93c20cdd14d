//! rheuma-api
//!
//! JSON-over-HTTP adapter for the disease-activity scoring engine. Marshals
//! request bodies into raw inputs and results or validation failures back out.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use config::ApiConfig;
use state::AppState;

pub fn router(config: &ApiConfig) -> Router {
    let origin = match &config.cors_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/indices", get(routes::indices::list_indices))
        .route("/indices/{id}", get(routes::indices::get_index_detail))
        .route("/indices/{id}/compute", post(routes::indices::compute))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(AppState::default())
}
