//! Typed parameters for each AI task.
//!
//! Each request implements [`PromptTask`], flattening itself into
//! [`TemplateParams`] and a short request line that closes the prompt.

use forge_core::entities::ExistingStage;
use forge_core::enums::{QuizStep, TaskKind};
use serde::{Deserialize, Serialize};

use crate::engine::PromptTask;
use crate::params::TemplateParams;

/// Quiz answers used to generate business ideas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub skills: Vec<String>,
    pub personality: Vec<String>,
    pub interests: Vec<String>,
}

impl PromptTask for IdeaRequest {
    const KIND: TaskKind = TaskKind::IdeaGeneration;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_list("skills", self.skills.iter().cloned())
            .with_list("personality", self.personality.iter().cloned())
            .with_list("interests", self.interests.iter().cloned())
    }

    fn request_text(&self) -> String {
        "Generate business ideas that fit my profile.".to_string()
    }
}

/// A free-text coaching question plus the situation around it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub situation: String,
    pub active_goals: Vec<String>,
    pub query: String,
}

impl PromptTask for AdviceRequest {
    const KIND: TaskKind = TaskKind::CoachingAdvice;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("situation", self.situation.clone())
            .with_list("goals", self.active_goals.iter().cloned())
    }

    fn request_text(&self) -> String {
        self.query.trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub step: QuizStep,
    /// Answers already chosen in earlier steps, used to tailor the options.
    #[serde(default)]
    pub previous_answers: Vec<String>,
    pub count: u32,
}

impl PromptTask for QuizRequest {
    const KIND: TaskKind = TaskKind::QuizOptions;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("step", self.step.as_str())
            .with_text("step_description", self.step.describe())
            .with_text("count", self.count.to_string())
            .with_list("previous", self.previous_answers.iter().cloned())
    }

    fn request_text(&self) -> String {
        format!("Suggest {} options for the {} step.", self.count, self.step)
    }
}

/// An idea to run a SWOT-style viability analysis on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl PromptTask for SwotRequest {
    const KIND: TaskKind = TaskKind::SwotAnalysis;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("title", self.title.clone())
            .with_text("description", self.description.clone())
            .with_text("category", self.category.clone())
    }

    fn request_text(&self) -> String {
        format!("Analyze the viability of \"{}\".", self.title.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRequest {
    pub idea_summary: String,
    pub stage_count: u32,
}

impl PromptTask for TimelineRequest {
    const KIND: TaskKind = TaskKind::TimelineGeneration;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("idea", self.idea_summary.clone())
            .with_text("count", self.stage_count.to_string())
    }

    fn request_text(&self) -> String {
        format!("Plan a {}-stage launch timeline.", self.stage_count)
    }
}

/// A natural-language instruction to change an existing timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationRequest {
    pub idea_summary: String,
    pub stages: Vec<ExistingStage>,
    pub instruction: String,
}

impl PromptTask for ModificationRequest {
    const KIND: TaskKind = TaskKind::TimelineModification;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("idea", self.idea_summary.clone())
            .with_list("stages", stage_lines(&self.stages))
    }

    fn request_text(&self) -> String {
        self.instruction.trim().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub idea_summary: String,
    pub stages: Vec<ExistingStage>,
}

impl PromptTask for SuggestionRequest {
    const KIND: TaskKind = TaskKind::SmartSuggestions;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("idea", self.idea_summary.clone())
            .with_list("stages", stage_lines(&self.stages))
    }

    fn request_text(&self) -> String {
        "What should I focus on next?".to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub idea_summary: String,
    pub stages: Vec<ExistingStage>,
}

impl PromptTask for OptimizationRequest {
    const KIND: TaskKind = TaskKind::Optimization;

    fn parameters(&self) -> TemplateParams {
        TemplateParams::new()
            .with_text("idea", self.idea_summary.clone())
            .with_list("stages", stage_lines(&self.stages))
    }

    fn request_text(&self) -> String {
        "Recommend the best order for my remaining stages.".to_string()
    }
}

/// One line per stage: `[id] title (duration) - status`.
fn stage_lines(stages: &[ExistingStage]) -> Vec<String> {
    stages
        .iter()
        .map(|stage| {
            let status = if stage.is_completed { "completed" } else { "pending" };
            let mut line = format!("[{}] {}", stage.id, stage.title.trim());
            if !stage.duration_label.trim().is_empty() {
                line.push_str(&format!(" ({})", stage.duration_label.trim()));
            }
            line.push_str(&format!(" - {status}"));
            if !stage.description.trim().is_empty() {
                line.push_str(&format!(": {}", stage.description.trim()));
            }
            line
        })
        .collect()
}
