//! HTTP application: routes, health checks, and middleware.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::affirmation::{AffirmationResponder, AffirmationRouteState, affirmation_routes};
use crate::config::{AffirmationConfig, ServerConfig};
use crate::flow::{FlowRouteState, flow_routes};
use crate::llm::LlmProvider;

/// Prefix for the chatbot API.
pub const API_PREFIX: &str = "/api/v1";

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "visa-assist";

// ── Health ──────────────────────────────────────────────────────────────

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to Visa Assist!",
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

// ── Router ──────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn app(llm: Arc<dyn LlmProvider>, affirmation: AffirmationConfig) -> Router {
    let responder = Arc::new(AffirmationResponder::new(llm, affirmation));

    let api = Router::new()
        .merge(flow_routes(FlowRouteState::default()))
        .merge(affirmation_routes(AffirmationRouteState { responder }));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(API_PREFIX, api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, app: Router) -> crate::error::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Visa Assist server started");
    axum::serve(listener, app).await?;
    Ok(())
}
