//! REST endpoint for the visa questionnaire.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::engine::FlowEngine;
use super::state::Session;

/// Shared state for flow routes.
#[derive(Clone, Default)]
pub struct FlowRouteState {
    pub engine: FlowEngine,
}

/// Body of `POST /chatbot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    /// Session returned by the previous turn; omit to start over.
    #[serde(default)]
    pub state: Option<Session>,
}

/// Reply to `POST /chatbot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: String,
    pub message: String,
    pub state: Session,
}

/// POST /chatbot
///
/// Runs one questionnaire turn against the caller-supplied session.
async fn chat(
    State(state): State<FlowRouteState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let session = request.state.unwrap_or_default();
    let step = session.current_step;

    let outcome = state.engine.advance(session, &request.user_message);

    info!(
        session_id = %session_id,
        from = %step,
        to = %outcome.session.current_step,
        "Chat turn processed"
    );

    Json(ChatResponse {
        response: outcome.reply,
        status: "success".to_string(),
        message: "Chat processed successfully".to_string(),
        state: outcome.session,
    })
}

/// Build the questionnaire routes.
pub fn flow_routes(state: FlowRouteState) -> Router {
    Router::new()
        .route("/chatbot", post(chat))
        .with_state(state)
}
