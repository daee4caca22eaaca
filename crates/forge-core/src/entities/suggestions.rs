use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Level;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub title: String,
    pub description: String,
    pub priority: Level,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementOpportunity {
    pub area: String,
    pub suggestion: String,
    pub impact: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub risk: String,
    pub severity: Level,
    pub mitigation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecommendation {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneAdjustment {
    pub stage_title: String,
    pub adjustment: String,
    pub reason: String,
}

/// Proactive suggestions for a user's current plan. Missing lists decode
/// as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SmartSuggestionBundle {
    #[serde(default)]
    pub next_actions: Vec<NextAction>,
    #[serde(default)]
    pub improvement_opportunities: Vec<ImprovementOpportunity>,
    #[serde(default)]
    pub risk_items: Vec<RiskItem>,
    #[serde(default)]
    pub resource_recommendations: Vec<ResourceRecommendation>,
    #[serde(default)]
    pub milestone_adjustments: Vec<MilestoneAdjustment>,
}
