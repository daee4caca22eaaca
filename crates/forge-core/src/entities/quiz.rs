use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuizStep;

/// Options offered for one onboarding quiz step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizOptionSet {
    pub step_category: QuizStep,
    /// Plain option lines, in model order, without numbering or bullets.
    pub options: Vec<String>,
}
