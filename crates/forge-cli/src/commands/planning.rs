//! Handlers for timeline planning: timeline, modify, suggest, optimize.

use forge_coach::{Coach, ContextSource};
use forge_config::ForgeConfig;
use forge_gateway::Gateway;
use forge_prompt::tasks::{
    ModificationRequest, OptimizationRequest, SuggestionRequest, TimelineRequest,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ModifyArgs, StagesArgs, TimelineArgs};
use crate::input::read_stages;
use crate::output::output;

pub async fn timeline<G: Gateway, C: ContextSource>(
    args: TimelineArgs,
    coach: &Coach<G, C>,
    config: &ForgeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = TimelineRequest {
        idea_summary: args.idea,
        stage_count: args.count.unwrap_or(config.general.default_stage_count),
    };
    let stages = coach.generate_timeline(&request).await;
    output(&stages, flags.format)
}

pub async fn modify<G: Gateway, C: ContextSource>(
    args: ModifyArgs,
    coach: &Coach<G, C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = ModificationRequest {
        idea_summary: args.idea,
        stages: read_stages(&args.stages)?,
        instruction: args.instruction,
    };
    let plan = coach.modify_timeline(&request).await?;
    output(&plan, flags.format)
}

pub async fn suggest<G: Gateway, C: ContextSource>(
    args: StagesArgs,
    coach: &Coach<G, C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = SuggestionRequest {
        idea_summary: args.idea,
        stages: read_stages(&args.stages)?,
    };
    let bundle = coach.smart_suggestions(&request).await?;
    output(&bundle, flags.format)
}

pub async fn optimize<G: Gateway, C: ContextSource>(
    args: StagesArgs,
    coach: &Coach<G, C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = OptimizationRequest {
        idea_summary: args.idea,
        stages: read_stages(&args.stages)?,
    };
    let order = coach.optimize_order(&request).await?;
    output(&order, flags.format)
}
