//! Affirmation responder — one prompt in, one completion out.

pub mod responder;
pub mod routes;

pub use responder::{
    AffirmationRequest, AffirmationResponder, AffirmationResponse, PLACEHOLDER_PROMPT,
    build_prompt,
};
pub use routes::{AffirmationRouteState, affirmation_routes};
