use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use thinu_core::{Speechlet, SpeechletRequestHandler};
use thinu_types::{RequestEnvelope, ResponseEnvelope};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Builds the skill router. The skill endpoint answers on `/` and `/thinu`.
pub fn router<S>(handler: Arc<SpeechletRequestHandler<S>>) -> Router
where
    S: Speechlet + Send + Sync + 'static,
{
    // Configure a permissive CORS policy so a test console can post envelopes directly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", post(skill::<S>))
        .route("/thinu", post(skill::<S>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(handler)
}

/// Runs one turn. The body is parsed here rather than by the extractor so
/// malformed envelopes get the same JSON error shape as everything else.
async fn skill<S>(
    State(handler): State<Arc<SpeechletRequestHandler<S>>>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError>
where
    S: Speechlet + Send + Sync + 'static,
{
    let Json(envelope) = payload?;
    let response = handler.handle(envelope)?;
    Ok(Json(response))
}

async fn health() -> &'static str {
    "ok"
}
