//! Health check route

use axum::{routing::get, Json, Router};

use super::book_routes::MessageResponse;

/// Health check route at `/ping`
pub fn health_routes() -> Router {
    Router::new().route("/ping", get(ping_handler))
}

async fn ping_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}
