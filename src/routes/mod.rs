use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::state::AppState;

pub mod recommend;
pub mod titles;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/titles", get(titles::list))
        .route("/recommend", post(recommend::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
