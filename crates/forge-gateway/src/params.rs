//! Generation parameters and per-task presets.

use forge_core::enums::TaskKind;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent as `generationConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// Preset for `kind`.
    ///
    /// Conversational advice runs hot with a large budget. Structured
    /// extraction (SWOT, JSON tasks) runs cold so the format holds.
    #[must_use]
    pub const fn preset(kind: TaskKind) -> Self {
        match kind {
            TaskKind::CoachingAdvice => Self::new(0.9, 40, 0.95, 2048),
            TaskKind::IdeaGeneration => Self::new(0.8, 40, 0.95, 2048),
            TaskKind::QuizOptions => Self::new(0.7, 40, 0.9, 512),
            TaskKind::SwotAnalysis => Self::new(0.4, 32, 0.9, 1024),
            TaskKind::TimelineGeneration => Self::new(0.3, 32, 0.9, 2048),
            TaskKind::TimelineModification
            | TaskKind::SmartSuggestions
            | TaskKind::Optimization => Self::new(0.2, 20, 0.8, 1024),
        }
    }

    #[must_use]
    pub const fn new(temperature: f32, top_k: u32, top_p: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_k,
            top_p,
            max_output_tokens,
        }
    }
}
