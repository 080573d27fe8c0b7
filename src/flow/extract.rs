//! Keyword extraction for free-text answers.
//!
//! Matching is case-insensitive substring containment. Tables are scanned in
//! order and the first hit wins.

/// Destination countries the flow recognizes.
pub const COUNTRY_KEYWORDS: &[(&str, &str)] = &[
    ("united states", "United States"),
    ("canada", "Canada"),
    ("united kingdom", "United Kingdom"),
    ("australia", "Australia"),
];

/// Visit purposes the flow recognizes.
pub const PURPOSE_KEYWORDS: &[(&str, &str)] = &[
    ("study", "Study Visa"),
    ("work", "Work Visa"),
    ("tourism", "Tourism"),
    ("business", "Business"),
    ("family", "Family Visit"),
];

/// Return the canonical name for the first keyword contained in `message`.
pub fn match_keyword(table: &[(&str, &'static str)], message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, name)| *name)
}

pub fn match_country(message: &str) -> Option<&'static str> {
    match_keyword(COUNTRY_KEYWORDS, message)
}

pub fn match_purpose(message: &str) -> Option<&'static str> {
    match_keyword(PURPOSE_KEYWORDS, message)
}

/// Whether the user said they already started an application.
pub fn application_started(message: &str) -> bool {
    message.to_lowercase().contains("yes")
}

/// Who the application is for.
pub fn applicant_type(message: &str) -> &'static str {
    if message.to_lowercase().contains("myself") {
        "myself"
    } else {
        "someone else"
    }
}
