//! Route handlers
//!
//! - `POST /chat/message`: plain request/response chat
//! - `POST /chat/stream`: same pipeline, streamed word-by-word as SSE
//! - `GET /memory/history/:session_id`, `GET /memory/sessions`,
//!   `DELETE /memory/clear/:session_id`: session management
//! - `GET /health`: backend availability and live session count
//!
//! The full response is computed and recorded in memory before any
//! streaming starts, so a client disconnect never leaves a half-written
//! exchange.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use futures::Stream;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use adalat_config::ServerSettings;
use adalat_core::Message;

use crate::state::AppState;
use crate::ServerError;

/// Delay between streamed words
const STREAM_WORD_DELAY: Duration = Duration::from_millis(30);

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub timestamp: String,
    pub conversation_history: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub retrieval_status: &'static str,
    pub generator_status: &'static str,
    pub memory_sessions: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub message_count: usize,
}

pub fn router(state: AppState, server: &ServerSettings) -> Result<Router, ServerError> {
    let mut router = Router::new()
        .route("/chat/message", post(chat_message))
        .route("/chat/stream", post(chat_stream))
        .route("/memory/history/:session_id", get(memory_history))
        .route("/memory/sessions", get(memory_sessions))
        .route("/memory/clear/:session_id", delete(memory_clear))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if server.cors_enabled {
        router = router.layer(build_cors_layer(&server.cors_origins)?);
    }
    Ok(router)
}

fn build_cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::permissive());
    }

    let parsed: Result<Vec<_>, _> = origins
        .iter()
        .map(|origin| origin.parse::<axum::http::HeaderValue>())
        .collect();
    let parsed = parsed.map_err(|e| ServerError::InvalidOrigin(e.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any))
}

fn resolve_session_id(requested: Option<String>) -> String {
    requested
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

async fn chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = resolve_session_id(request.session_id);
    tracing::info!(
        session_id,
        query = %truncate_for_log(&request.query),
        "Chat message"
    );

    let response = state.front_door.handle(&session_id, &request.query).await;
    let conversation_history = state.store.history(&session_id);

    Json(ChatResponse {
        response,
        session_id,
        timestamp: Utc::now().to_rfc3339(),
        conversation_history,
    })
}

async fn chat_stream(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = resolve_session_id(request.session_id);
    tracing::info!(
        session_id,
        query = %truncate_for_log(&request.query),
        "Chat stream"
    );

    // Compute and record the full response first; only then stream it.
    let response = state.front_door.handle(&session_id, &request.query).await;

    let stream = async_stream::stream! {
        let words: Vec<&str> = response.split_whitespace().collect();
        let last = words.len().saturating_sub(1);
        for (i, word) in words.iter().enumerate() {
            let chunk = if i < last {
                format!("{} ", word)
            } else {
                (*word).to_string()
            };
            let payload = serde_json::json!({ "chunk": chunk }).to_string();
            yield Ok(Event::default().data(payload));
            tokio::time::sleep(STREAM_WORD_DELAY).await;
        }
        let done = serde_json::json!({ "done": true }).to_string();
        yield Ok(Event::default().data(done));
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn memory_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<serde_json::Value> {
    let history = state.store.history(&session_id);
    Json(serde_json::json!({
        "session_id": session_id,
        "message_count": history.len(),
        "history": history,
    }))
}

async fn memory_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions: Vec<SessionInfo> = state
        .store
        .session_ids()
        .into_iter()
        .map(|session_id| {
            let message_count = state.store.history(&session_id).len();
            SessionInfo {
                session_id,
                message_count,
            }
        })
        .collect();
    let total = sessions.len();
    Json(serde_json::json!({ "sessions": sessions, "total": total }))
}

async fn memory_clear(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<serde_json::Value> {
    state.store.delete(&session_id);
    Json(serde_json::json!({
        "message": format!("Memory cleared for session {}", session_id),
    }))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let retrieval = state.front_door.retrieval_available().await;
    let generator = state.front_door.generator_available().await;
    let status = if retrieval || generator {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        message: "Legal assistant API is running",
        retrieval_status: availability(retrieval),
        generator_status: availability(generator),
        memory_sessions: state.store.session_count(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn availability(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Not Available"
    }
}

fn truncate_for_log(query: &str) -> String {
    query.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generated_when_missing() {
        let id = resolve_session_id(None);
        assert!(Uuid::parse_str(&id).is_ok());

        let id = resolve_session_id(Some("  ".to_string()));
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_session_id_preserved_when_given() {
        assert_eq!(
            resolve_session_id(Some("my-session".to_string())),
            "my-session"
        );
    }

    #[test]
    fn test_cors_layer_rejects_bad_origin() {
        assert!(build_cors_layer(&["http://localhost:3000".to_string()]).is_ok());
        assert!(build_cors_layer(&["not a header value\u{0}".to_string()]).is_err());
    }
}
