pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::forms::handlers;
use crate::page;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/v1/integrations", get(page::handle_integrations))
        .route(
            "/api/v1/properties/search",
            post(handlers::handle_property_search),
        )
        .route(
            "/api/v1/mortgage/estimate",
            post(handlers::handle_mortgage_estimate),
        )
        .route("/api/v1/tours", post(handlers::handle_schedule_tour))
        .fallback(not_found)
        .with_state(state)
}
