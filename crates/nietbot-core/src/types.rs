//! Intent vocabulary and chat result types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user is asking about. The vocabulary is closed: the training
/// corpus may only use these labels, and every label has an answer branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    FeesQuery,
    AdmissionQuery,
    InfrastructureQuery,
    ScholarshipQuery,
    StudentWelfareQuery,
    InnovationQuery,
    PlacementQuery,
    ClubQuery,
    HostelQuery,
    ContactQuery,
    RulesQuery,
    CodeOfConductQuery,
    /// Universal fallback.
    GeneralQuery,
}

impl IntentLabel {
    pub const ALL: [IntentLabel; 13] = [
        IntentLabel::FeesQuery,
        IntentLabel::AdmissionQuery,
        IntentLabel::InfrastructureQuery,
        IntentLabel::ScholarshipQuery,
        IntentLabel::StudentWelfareQuery,
        IntentLabel::InnovationQuery,
        IntentLabel::PlacementQuery,
        IntentLabel::ClubQuery,
        IntentLabel::HostelQuery,
        IntentLabel::ContactQuery,
        IntentLabel::RulesQuery,
        IntentLabel::CodeOfConductQuery,
        IntentLabel::GeneralQuery,
    ];

    /// The wire token, e.g. `fees_query`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeesQuery => "fees_query",
            Self::AdmissionQuery => "admission_query",
            Self::InfrastructureQuery => "infrastructure_query",
            Self::ScholarshipQuery => "scholarship_query",
            Self::StudentWelfareQuery => "student_welfare_query",
            Self::InnovationQuery => "innovation_query",
            Self::PlacementQuery => "placement_query",
            Self::ClubQuery => "club_query",
            Self::HostelQuery => "hostel_query",
            Self::ContactQuery => "contact_query",
            Self::RulesQuery => "rules_query",
            Self::CodeOfConductQuery => "code_of_conduct_query",
            Self::GeneralQuery => "general_query",
        }
    }

    /// Parse a token, mapping anything outside the vocabulary to `GeneralQuery`.
    pub fn from_token_lossy(token: &str) -> Self {
        token.parse().unwrap_or(Self::GeneralQuery)
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == token)
            .ok_or_else(|| format!("Unknown intent label: {token}"))
    }
}

/// A rendered answer plus optional follow-up choices for the chat UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    pub text: String,
    pub options: Vec<String>,
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: vec![],
        }
    }

    pub fn with_options(text: impl Into<String>, options: &[&str]) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// The response to one chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    pub answer: String,
    pub predicted_intent: IntentLabel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl ChatResult {
    pub fn new(answer: Answer, predicted_intent: IntentLabel) -> Self {
        Self {
            answer: answer.text,
            predicted_intent,
            options: answer.options,
        }
    }
}
