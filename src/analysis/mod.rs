//! Analysis result model.
//!
//! These types mirror the JSON object the analysis backend produces for a
//! ticket. Field names on the wire are snake_case. Categorical fields are
//! closed enums: an unknown level or feeling is rejected when the payload is
//! decoded rather than mapped to a fallback.

pub mod envelope;
pub mod prompt;

use serde::{Deserialize, Serialize};

pub use envelope::{AnalysisEnvelope, AnalysisFailure, GENERIC_FAILURE_MESSAGE, InnerAnalysis};

/// Strength indicator attached to a suggested category (confidence) or
/// automation (feasibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::High, Level::Medium, Level::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Medium => "medium",
            Level::Low => "low",
        }
    }
}

/// Inferred emotional tone of the ticket's originator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Positive,
    Neutral,
    Negative,
    Frustrated,
    Urgent,
}

impl Feeling {
    pub const ALL: [Feeling; 5] = [
        Feeling::Positive,
        Feeling::Neutral,
        Feeling::Negative,
        Feeling::Frustrated,
        Feeling::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feeling::Positive => "positive",
            Feeling::Neutral => "neutral",
            Feeling::Negative => "negative",
            Feeling::Frustrated => "frustrated",
            Feeling::Urgent => "urgent",
        }
    }
}

/// Urgency classification of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }
}


/// A category the ticket could be filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    pub confidence: Level,
    #[serde(default)]
    pub reason: String,
}

/// Something that could be automated to resolve the ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationSuggestion {
    pub automation: String,
    #[serde(default)]
    pub description: String,
    pub feasibility: Level,
}

/// Tone and urgency of the ticket's originator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSentiment {
    pub overall_feeling: Feeling,
    #[serde(default)]
    pub indicators: Vec<String>,
    pub urgency_level: UrgencyLevel,
}

/// Payload of a successful analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub possible_categories: Vec<CategorySuggestion>,
    #[serde(default)]
    pub possible_automations: Vec<AutomationSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_sentiment: Option<UserSentiment>,
}

impl AnalysisResult {
    /// True when the payload carries nothing worth showing: blank summary,
    /// no suggestions, and no sentiment record.
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty()
            && self.possible_categories.is_empty()
            && self.possible_automations.is_empty()
            && self.user_sentiment.is_none()
    }
}
