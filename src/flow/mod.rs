//! Visa questionnaire — a scripted, multi-turn conversation flow.
//!
//! The flow walks a user through a fixed sequence of questions (destination,
//! purpose, current country, application status, applicant type), records
//! answers found by keyword matching, and finishes with a summary and a
//! recommendation. The service keeps nothing between requests: the caller
//! sends the whole `Session` back on every turn.

pub mod engine;
pub mod extract;
pub mod prompts;
pub mod routes;
pub mod state;

pub use engine::{FlowEngine, FlowOutcome};
pub use routes::{ChatRequest, ChatResponse, FlowRouteState, flow_routes};
pub use state::{ConversationState, FactKey, FactValue, Session, UserInfo};
