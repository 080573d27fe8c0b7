//! Conversation state machine and the caller-held session record.

use serde::{Deserialize, Deserializer, Serialize};

/// The steps of the visa questionnaire.
///
/// Progresses linearly: Start → CountrySelection → PurposeSelection →
/// InfoGathering → Analysis → Recommendation → End. Declaration order is the
/// progression order, so `Ord` compares how far along a conversation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Start,
    CountrySelection,
    PurposeSelection,
    InfoGathering,
    Analysis,
    Recommendation,
    End,
}

impl ConversationState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: ConversationState) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            (Start, CountrySelection)
                | (CountrySelection, PurposeSelection)
                | (PurposeSelection, InfoGathering)
                | (InfoGathering, Analysis)
                | (Analysis, Recommendation)
                | (Recommendation, End)
        )
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<ConversationState> {
        use ConversationState::*;
        match self {
            Start => Some(CountrySelection),
            CountrySelection => Some(PurposeSelection),
            PurposeSelection => Some(InfoGathering),
            InfoGathering => Some(Analysis),
            Analysis => Some(Recommendation),
            Recommendation => Some(End),
            End => None,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::Start
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::CountrySelection => "country_selection",
            Self::PurposeSelection => "purpose_selection",
            Self::InfoGathering => "info_gathering",
            Self::Analysis => "analysis",
            Self::Recommendation => "recommendation",
            Self::End => "end",
        };
        write!(f, "{s}")
    }
}

/// Keys of the facts the flow collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKey {
    DestinationCountry,
    Purpose,
    CurrentCountry,
    ApplicationStatus,
    ApplicantType,
}

impl FactKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DestinationCountry => "destination_country",
            Self::Purpose => "purpose",
            Self::CurrentCountry => "current_country",
            Self::ApplicationStatus => "application_status",
            Self::ApplicantType => "applicant_type",
        }
    }
}

impl std::fmt::Display for FactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded answer.
///
/// Anything that is neither a string nor a boolean (a client may send it) is
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Flag(bool),
    Text(String),
    Other(serde_json::Value),
}

impl FactValue {
    /// Whether the value counts as a real answer for string-valued facts:
    /// empty strings, `false` and `null` do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => !s.is_empty(),
            Self::Other(v) => match v {
                serde_json::Value::Null => false,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                serde_json::Value::Array(a) => !a.is_empty(),
                serde_json::Value::Object(o) => !o.is_empty(),
                _ => true,
            },
        }
    }
}

impl From<&str> for FactValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FactValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FactValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl std::fmt::Display for FactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// One entry of the fact list. Normally holds exactly one key.
pub type FactEntry = serde_json::Map<String, serde_json::Value>;

/// Append-only list of single-key fact mappings.
///
/// Lookups return the first entry holding the key, so appending a key twice
/// never overrides the earlier answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(Vec<FactEntry>);

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// First recorded value for `key`.
    pub fn get(&self, key: FactKey) -> Option<FactValue> {
        self.0
            .iter()
            .find_map(|entry| entry.get(key.as_str()))
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Append a `{key: value}` entry.
    pub fn push(&mut self, key: FactKey, value: impl Into<FactValue>) {
        let value = match value.into() {
            FactValue::Flag(b) => serde_json::Value::Bool(b),
            FactValue::Text(s) => serde_json::Value::String(s),
            FactValue::Other(v) => v,
        };
        let mut entry = FactEntry::new();
        entry.insert(key.as_str().to_string(), value);
        self.0.push(entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<UserInfo, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<UserInfo>::deserialize(deserializer)?.unwrap_or_default())
}

/// Caller-held conversation record, resent in full on every turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The last message the flow produced.
    #[serde(default)]
    pub current_message: String,
    #[serde(default)]
    pub current_step: ConversationState,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_info: UserInfo,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fact(&self, key: FactKey) -> Option<FactValue> {
        self.user_info.get(key)
    }

    /// Whether `key` holds a usable answer.
    ///
    /// `application_status` is a yes/no answer, so any recorded non-null
    /// value counts, `false` included. Other facts need a non-empty value.
    pub fn has_fact(&self, key: FactKey) -> bool {
        match key {
            FactKey::ApplicationStatus => self
                .fact(key)
                .is_some_and(|v| !matches!(v, FactValue::Other(serde_json::Value::Null))),
            _ => self.fact(key).is_some_and(|v| v.is_truthy()),
        }
    }

    pub fn record(&mut self, key: FactKey, value: impl Into<FactValue>) {
        self.user_info.push(key, value);
    }
}
