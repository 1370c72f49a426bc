use super::types::FlatEvent;
use crate::transform::queue::EventQueue;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Extension, Router};
use std::sync::Arc;

/// Builds the HTTP router exposing the single ingestion route.
///
/// `POST /submit` accepts a flat event payload; any other method on the route
/// is answered by the method fallback. Unknown paths fall through to axum's
/// default 404.
pub fn router(queue: Arc<EventQueue>) -> Router {
    Router::new()
        .route(
            "/submit",
            post(handle_submit).fallback(handle_invalid_method),
        )
        .layer(Extension(queue))
}

/// Accepts a flat event payload and hands it off for transformation.
///
/// The body is decoded from the raw string, so no particular content type is
/// required. Decode failures are terminal for the request: the client gets a
/// 400 and nothing is handed off or logged. On success the record is queued
/// and the client gets a 200 immediately — "accepted for processing", not
/// "processed". The handler never waits for or inspects the transform outcome.
pub async fn handle_submit(
    Extension(queue): Extension<Arc<EventQueue>>,
    body: String,
) -> (StatusCode, &'static str) {
    let event: FlatEvent = match serde_json::from_str(&body) {
        Ok(event) => event,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    // Waits until the worker side has room; request latency is coupled to
    // consumer availability.
    if queue.submit(event).await.is_err() {
        tracing::error!("Event queue closed, dropping request");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Request not accepted");
    }

    (StatusCode::OK, "Request received")
}

/// Any non-POST method on the ingestion route.
pub async fn handle_invalid_method() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}
