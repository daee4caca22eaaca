use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use forge_core::enums::QuizStep;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate business ideas from quiz answers.
    Ideas(IdeasArgs),
    /// Ask the coach a free-form question.
    Advice(AdviceArgs),
    /// Suggest options for an onboarding quiz step.
    Quiz(QuizArgs),
    /// Run a SWOT viability analysis on an idea.
    Swot(SwotArgs),
    /// Generate a launch timeline for an idea.
    Timeline(TimelineArgs),
    /// Propose changes to an existing timeline.
    Modify(ModifyArgs),
    /// Suggest next actions, risks, and resources for a timeline.
    Suggest(StagesArgs),
    /// Recommend an execution order for existing stages.
    Optimize(StagesArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IdeasArgs {
    /// Skills (repeat or comma-separate)
    #[arg(long = "skill", value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Personality traits (repeat or comma-separate)
    #[arg(long = "trait", value_delimiter = ',')]
    pub personality: Vec<String>,

    /// Interests (repeat or comma-separate)
    #[arg(long = "interest", value_delimiter = ',')]
    pub interests: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AdviceArgs {
    /// The question to ask
    pub query: String,

    /// Background on the current situation
    #[arg(long, default_value = "")]
    pub situation: String,

    /// Active goal titles (repeatable)
    #[arg(long = "goal")]
    pub goals: Vec<String>,
}

/// Quiz step accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StepArg {
    Skills,
    Personality,
    Interests,
}

impl From<StepArg> for QuizStep {
    fn from(step: StepArg) -> Self {
        match step {
            StepArg::Skills => Self::Skills,
            StepArg::Personality => Self::Personality,
            StepArg::Interests => Self::Interests,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct QuizArgs {
    pub step: StepArg,

    /// Answers chosen in earlier steps (repeat or comma-separate)
    #[arg(long, value_delimiter = ',')]
    pub previous: Vec<String>,

    /// Number of options to request (defaults to `general.quiz_option_count`)
    #[arg(long)]
    pub count: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SwotArgs {
    /// Idea title
    #[arg(long)]
    pub title: String,

    /// Idea description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Idea category
    #[arg(long, default_value = "General")]
    pub category: String,
}

#[derive(Clone, Debug, Args)]
pub struct TimelineArgs {
    /// Short summary of the business idea
    pub idea: String,

    /// Number of stages (defaults to `general.default_stage_count`)
    #[arg(long)]
    pub count: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ModifyArgs {
    /// Short summary of the business idea
    pub idea: String,

    /// What should change
    pub instruction: String,

    /// JSON file holding the current stages
    #[arg(long)]
    pub stages: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct StagesArgs {
    /// Short summary of the business idea
    pub idea: String,

    /// JSON file holding the current stages
    #[arg(long)]
    pub stages: PathBuf,
}
