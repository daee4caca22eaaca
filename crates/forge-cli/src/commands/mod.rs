pub mod discovery;
pub mod planning;

use forge_coach::{Coach, ContextSource};
use forge_config::ForgeConfig;
use forge_gateway::Gateway;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch<G: Gateway, C: ContextSource>(
    command: Commands,
    coach: &Coach<G, C>,
    config: &ForgeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ideas(args) => discovery::ideas(args, coach, flags).await,
        Commands::Advice(args) => discovery::advice(args, coach).await,
        Commands::Quiz(args) => discovery::quiz(args, coach, config, flags).await,
        Commands::Swot(args) => discovery::swot(args, coach, flags).await,
        Commands::Timeline(args) => planning::timeline(args, coach, config, flags).await,
        Commands::Modify(args) => planning::modify(args, coach, flags).await,
        Commands::Suggest(args) => planning::suggest(args, coach, flags).await,
        Commands::Optimize(args) => planning::optimize(args, coach, flags).await,
    }
}
