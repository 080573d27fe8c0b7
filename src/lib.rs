//! Visa Assist — scripted visa questionnaire and affirmation chat service.

pub mod affirmation;
pub mod config;
pub mod error;
pub mod flow;
pub mod llm;
pub mod server;
