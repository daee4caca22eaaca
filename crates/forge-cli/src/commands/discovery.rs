//! Handlers for idea discovery: ideas, advice, quiz, swot.

use forge_coach::{Coach, ContextSource};
use forge_config::ForgeConfig;
use forge_gateway::Gateway;
use forge_prompt::tasks::{AdviceRequest, IdeaRequest, QuizRequest, SwotRequest};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AdviceArgs, IdeasArgs, QuizArgs, SwotArgs};
use crate::output::output;

pub async fn ideas<G: Gateway, C: ContextSource>(
    args: IdeasArgs,
    coach: &Coach<G, C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = IdeaRequest {
        skills: args.skills,
        personality: args.personality,
        interests: args.interests,
    };
    let ideas = coach.generate_ideas(&request).await;
    output(&ideas, flags.format)
}

/// Advice is free text, so it is printed as-is rather than as JSON.
pub async fn advice<G: Gateway, C: ContextSource>(
    args: AdviceArgs,
    coach: &Coach<G, C>,
) -> anyhow::Result<()> {
    let request = AdviceRequest {
        situation: args.situation,
        active_goals: args.goals,
        query: args.query,
    };
    let text = coach.coaching_advice(&request).await?;
    println!("{}", text.trim_end());
    Ok(())
}

pub async fn quiz<G: Gateway, C: ContextSource>(
    args: QuizArgs,
    coach: &Coach<G, C>,
    config: &ForgeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = QuizRequest {
        step: args.step.into(),
        previous_answers: args.previous,
        count: args.count.unwrap_or(config.general.quiz_option_count),
    };
    let options = coach.quiz_options(&request).await?;
    output(&options, flags.format)
}

pub async fn swot<G: Gateway, C: ContextSource>(
    args: SwotArgs,
    coach: &Coach<G, C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = SwotRequest {
        title: args.title,
        description: args.description,
        category: args.category,
    };
    let analysis = coach.analyze_idea(&request).await?;
    output(&analysis, flags.format)
}
