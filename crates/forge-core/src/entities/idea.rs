use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Difficulty, Level};

/// A business idea suggested to the user, either parsed from model output or
/// synthesized as a fallback. Every field is always populated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BusinessIdeaDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub estimated_revenue_range: String,
    pub launch_timeframe: String,
    pub required_skills: Vec<String>,
    pub startup_cost_range: String,
    pub profit_margin_range: String,
    pub market_demand: Level,
    pub competition_level: Level,
    pub personal_note: String,
}
