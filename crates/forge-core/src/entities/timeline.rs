use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ModificationKind;

/// One stage of a launch timeline. Order is significant and assigned by
/// position in the containing sequence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStage {
    pub title: String,
    pub description: String,
    /// Human duration such as `"2-3 weeks"`. Named `duration` on the wire.
    #[serde(rename = "duration")]
    pub duration_label: String,
    pub key_tasks: Vec<String>,
    pub success_metrics: Vec<String>,
    pub emoji: String,
}

/// A stage the caller already owns, identified so that change operations
/// can reference it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExistingStage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "duration")]
    pub duration_label: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// One edit inside a [`TimelineModificationPlan`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOp {
    /// Target stage id; `None` when the change adds a new stage.
    pub stage_id: Option<String>,
    #[serde(default)]
    pub new_stage: Option<TimelineStage>,
    /// Zero-based ordinal the stage should end up at.
    #[serde(default)]
    pub new_position: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedReminder {
    pub title: String,
    pub message: String,
    pub days_from_now: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedNote {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// A model-proposed change to an existing timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineModificationPlan {
    pub kind: ModificationKind,
    /// Model confidence in `0.0..=1.0`.
    pub confidence: f64,
    pub reasoning: String,
    pub changes: Vec<ChangeOp>,
    #[serde(default)]
    pub suggested_reminders: Vec<SuggestedReminder>,
    #[serde(default)]
    pub suggested_notes: Vec<SuggestedNote>,
}

/// Recommended execution order for existing stages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOrder {
    pub ordered_stage_ids: Vec<String>,
    pub reasoning: String,
}
