use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SWOT-style viability analysis of a business idea.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SwotAnalysis {
    /// Score in `0..=100`.
    pub viability_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub recommendations: Vec<String>,
}
