//! API route handlers for the gateway.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::server::AppState;

/// Liveness message, kept in the shape the chat UI's backend test expects.
pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Backend is running fine ✅" }))
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "nietbot-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "examples": state.agent.example_count(),
    }))
}

/// Answer a chat message. A missing or non-string `message` counts as empty.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let message = body["message"].as_str().unwrap_or("");
    let result = state.agent.process_chat(message);
    tracing::info!(intent = %result.predicted_intent, "💬 chat answered");
    Json(serde_json::to_value(&result).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize chat result: {e}");
        serde_json::json!({ "answer": result.answer, "predicted_intent": result.predicted_intent.as_str() })
    }))
}
