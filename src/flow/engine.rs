//! FlowEngine — runs one turn of the visa questionnaire.
//!
//! A turn first interprets the user's message against the step the session
//! is in, then runs that step's node, which writes the reply and may move the
//! session forward. Unrecognized input never fails; the node re-prompts.

use tracing::{debug, warn};

use super::extract;
use super::prompts;
use super::state::{ConversationState, FactKey, Session};

/// Result of a single turn.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOutcome {
    /// Reply to show the user (same as `session.current_message`).
    pub reply: String,
    /// Updated session for the caller to send back next turn.
    pub session: Session,
}

/// Stateless driver for the questionnaire.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowEngine;

impl FlowEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run one turn.
    pub fn advance(&self, mut session: Session, user_message: &str) -> FlowOutcome {
        let before = session.current_step;

        if session.current_step != ConversationState::Start {
            self.interpret(&mut session, user_message);
        }

        match session.current_step {
            ConversationState::Start => {
                start_node(&mut session);
                country_selection_node(&mut session);
            }
            ConversationState::CountrySelection => country_selection_node(&mut session),
            ConversationState::PurposeSelection => purpose_selection_node(&mut session),
            ConversationState::InfoGathering => info_gathering_node(&mut session),
            ConversationState::Analysis => analysis_node(&mut session),
            ConversationState::Recommendation => recommendation_node(&mut session),
            // Finished conversations echo their last message.
            ConversationState::End => {}
        }

        debug!(
            from = %before,
            to = %session.current_step,
            facts = session.user_info.len(),
            "Flow turn complete"
        );

        FlowOutcome {
            reply: session.current_message.clone(),
            session,
        }
    }

    /// Record at most one fact extracted from `message` for the current step.
    fn interpret(&self, session: &mut Session, message: &str) {
        match session.current_step {
            ConversationState::CountrySelection => {
                if let Some(country) = extract::match_country(message) {
                    session.record(FactKey::DestinationCountry, country);
                }
            }
            ConversationState::PurposeSelection => {
                if let Some(purpose) = extract::match_purpose(message) {
                    session.record(FactKey::Purpose, purpose);
                }
            }
            ConversationState::InfoGathering => {
                if !session.has_fact(FactKey::CurrentCountry) {
                    let country = message.trim();
                    // Every info-gathering turn records a fact except a blank
                    // one: a stored "" would shadow every later answer.
                    if !country.is_empty() {
                        session.record(FactKey::CurrentCountry, country);
                    }
                } else if !session.has_fact(FactKey::ApplicationStatus) {
                    session.record(
                        FactKey::ApplicationStatus,
                        extract::application_started(message),
                    );
                } else if !session.has_fact(FactKey::ApplicantType) {
                    session.record(FactKey::ApplicantType, extract::applicant_type(message));
                }
            }
            ConversationState::Start
            | ConversationState::Analysis
            | ConversationState::Recommendation
            | ConversationState::End => {}
        }
    }
}

/// Move the session one step forward. A finished session stays where it is.
fn step_forward(session: &mut Session) {
    let from = session.current_step;
    match from.next() {
        Some(next) if from.can_transition_to(next) => session.current_step = next,
        _ => warn!(step = %from, "Cannot step forward from this step"),
    }
}

fn start_node(session: &mut Session) {
    session.current_message = prompts::GREETING.to_string();
    step_forward(session);
}

fn country_selection_node(session: &mut Session) {
    match session.fact(FactKey::DestinationCountry).filter(|v| v.is_truthy()) {
        Some(destination) => {
            session.current_message = prompts::destination_confirmed(&destination.to_string());
            step_forward(session);
        }
        None => session.current_message = prompts::ASK_DESTINATION.to_string(),
    }
}

fn purpose_selection_node(session: &mut Session) {
    match session.fact(FactKey::Purpose).filter(|v| v.is_truthy()) {
        Some(purpose) => {
            session.current_message = prompts::purpose_confirmed(&purpose.to_string());
            step_forward(session);
        }
        None => session.current_message = prompts::ASK_PURPOSE.to_string(),
    }
}

fn info_gathering_node(session: &mut Session) {
    let reply = if !session.has_fact(FactKey::CurrentCountry) {
        prompts::ASK_CURRENT_COUNTRY
    } else if !session.has_fact(FactKey::ApplicationStatus) {
        prompts::ASK_APPLICATION_STATUS
    } else if !session.has_fact(FactKey::ApplicantType) {
        prompts::ASK_APPLICANT_TYPE
    } else {
        step_forward(session);
        prompts::ASK_PRIOR_APPLICATION
    };
    session.current_message = reply.to_string();
}

fn analysis_node(session: &mut Session) {
    session.current_message = prompts::analysis_summary(session);
    step_forward(session);
}

fn recommendation_node(session: &mut Session) {
    session.current_message = prompts::RECOMMENDATION.to_string();
    step_forward(session);
}
