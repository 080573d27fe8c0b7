//! REST endpoint for the affirmation responder.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::responder::{AffirmationRequest, AffirmationResponder, AffirmationResponse};
use crate::error::ApiError;

/// Shared state for affirmation routes.
#[derive(Clone)]
pub struct AffirmationRouteState {
    pub responder: Arc<AffirmationResponder>,
}

/// POST /affirmation
///
/// Any provider failure becomes a 500 with the error text as `detail`.
async fn affirm(
    State(state): State<AffirmationRouteState>,
    Json(request): Json<AffirmationRequest>,
) -> Result<Json<AffirmationResponse>, ApiError> {
    let response = state.responder.respond(&request).await?;
    Ok(Json(response))
}

/// Build the affirmation routes.
pub fn affirmation_routes(state: AffirmationRouteState) -> Router {
    Router::new()
        .route("/affirmation", post(affirm))
        .with_state(state)
}
