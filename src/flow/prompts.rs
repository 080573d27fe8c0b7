//! Canned replies for each step of the questionnaire.

use super::state::{FactKey, Session};

pub const GREETING: &str =
    "🏆 Hi! I'm Immigration AI Assistant. Let's find the perfect visa for you.";

pub const ASK_DESTINATION: &str = "Nice. Which country are you applying to?";

pub const ASK_PURPOSE: &str = "What is the purpose of your visit? Study Visa, Work Visa, Tourism, Business, or Family Visit?";

pub const ASK_CURRENT_COUNTRY: &str = "Which country are you currently living in?";

pub const ASK_APPLICATION_STATUS: &str = "Have you already started any visa application?";

pub const ASK_APPLICANT_TYPE: &str = "Are you applying for yourself or someone else?";

pub const ASK_PRIOR_APPLICATION: &str = "Have you ever applied for this visa before?";

pub const RECOMMENDATION: &str = "\
Perfect! I've gathered your basic info. Based on your answers, I can recommend the exact visa form you should fill and walk you through each step so you don't make any mistakes.

To continue, please unlock your personalized immigration AI assistant. It'll guide you through your official immigration form.

💼 Buy I Form    💰 Buy Family Package";

pub fn destination_confirmed(destination: &str) -> String {
    format!("Great! You're applying to {destination}. What's the purpose of your visit?")
}

pub fn purpose_confirmed(purpose: &str) -> String {
    format!("Perfect! You're looking for a {purpose}. Which country are you currently living in?")
}

/// Summary of the collected answers shown before the recommendation.
pub fn analysis_summary(session: &Session) -> String {
    let show = |key: FactKey| {
        session
            .fact(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "not provided".to_string())
    };

    // The blank second line holds eight spaces and the purpose line ends in a
    // space; clients render this text as-is.
    format!(
        concat!(
            "Great! What is the purpose of your visit?\n",
            "        \n",
            "Based on your information:\n",
            "- Applying to: {}\n",
            "- Purpose: {} \n",
            "- Current location: {}\n",
            "\n",
            "I'm analyzing your requirements...",
        ),
        show(FactKey::DestinationCountry),
        show(FactKey::Purpose),
        show(FactKey::CurrentCountry),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_interpolates_collected_facts() {
        let mut session = Session::new();
        session.record(FactKey::DestinationCountry, "Canada");
        session.record(FactKey::Purpose, "Study Visa");
        session.record(FactKey::CurrentCountry, "Kenya");

        let summary = analysis_summary(&session);
        assert!(summary.contains("- Applying to: Canada"));
        assert!(summary.contains("- Purpose: Study Visa"));
        assert!(summary.contains("- Current location: Kenya"));
        assert!(summary.ends_with("I'm analyzing your requirements..."));
    }

    #[test]
    fn summary_keeps_exact_layout() {
        let mut session = Session::new();
        session.record(FactKey::DestinationCountry, "Canada");
        session.record(FactKey::Purpose, "Study Visa");
        session.record(FactKey::CurrentCountry, "Kenya");

        assert_eq!(
            analysis_summary(&session),
            "Great! What is the purpose of your visit?\n        \nBased on your information:\n\
             - Applying to: Canada\n- Purpose: Study Visa \n- Current location: Kenya\n\n\
             I'm analyzing your requirements..."
        );
    }

    #[test]
    fn summary_marks_missing_facts() {
        let summary = analysis_summary(&Session::new());
        assert!(summary.contains("- Applying to: not provided"));
    }

    #[test]
    fn confirmations_embed_the_answer() {
        assert!(destination_confirmed("Australia").contains("applying to Australia."));
        assert!(purpose_confirmed("Work Visa").contains("looking for a Work Visa."));
    }
}
