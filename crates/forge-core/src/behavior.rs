//! Read-only behavioral snapshot supplied by the host application.
//!
//! The snapshot is accumulated outside the pipeline (feature usage, notes,
//! AI exchanges). Every field is optional in practice: absent collections
//! are empty and absent metrics are `None`. Hosts can hand it over as a
//! camelCase JSON document.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One past exchange with the AI coach.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConversationExchange {
    pub query: String,
    pub response: String,
}

/// One note the user wrote, tagged with its category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoteEntry {
    pub category: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSnapshot {
    /// Recent activity counts keyed by category (e.g. `"ideas"`, `"goals"`).
    #[serde(default)]
    pub activity_by_category: BTreeMap<String, u32>,
    /// Usage counts keyed by feature name.
    #[serde(default)]
    pub feature_usage: BTreeMap<String, u32>,
    /// Business-focus keywords inferred from the user's activity.
    #[serde(default)]
    pub focus_keywords: Vec<String>,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
    /// Oldest first; the context builder takes the tail.
    #[serde(default)]
    pub recent_conversations: Vec<ConversationExchange>,
    /// Oldest first; the context builder takes the tail.
    #[serde(default)]
    pub recent_notes: Vec<NoteEntry>,
    /// Fraction of goals completed, `0.0..=1.0`.
    #[serde(default)]
    pub goal_completion_rate: Option<f64>,
    #[serde(default)]
    pub ai_interaction_count: Option<u32>,
    /// Hours of day (`0..=23`) the user prefers reminders at.
    #[serde(default)]
    pub preferred_reminder_hours: Vec<u8>,
}

impl BehaviorSnapshot {
    /// True when no field carries any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activity_by_category.is_empty()
            && self.feature_usage.is_empty()
            && self.focus_keywords.is_empty()
            && self.preferred_industries.is_empty()
            && self.recent_conversations.is_empty()
            && self.recent_notes.is_empty()
            && self.goal_completion_rate.is_none()
            && self.ai_interaction_count.is_none()
            && self.preferred_reminder_hours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_fills_defaults() {
        let snapshot: BehaviorSnapshot = serde_json::from_str(
            r#"{"focusKeywords": ["bakery"], "aiInteractionCount": 4}"#,
        )
        .unwrap();
        assert_eq!(snapshot.focus_keywords, vec!["bakery"]);
        assert_eq!(snapshot.ai_interaction_count, Some(4));
        assert!(snapshot.recent_notes.is_empty());
        assert!(snapshot.goal_completion_rate.is_none());
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(BehaviorSnapshot::default().is_empty());
    }
}
