use anyhow::Context;
use clap::Parser;
use forge_coach::{Coach, CoachError};
use forge_config::ForgeConfig;

mod cli;
mod commands;
mod input;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        match error.downcast_ref::<CoachError>() {
            Some(coach_error) => {
                eprintln!("forge error: {} ({coach_error})", coach_error.user_message());
            }
            None => eprintln!("forge error: {error:#}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = ForgeConfig::load_with_dotenv().context("failed to load configuration")?;
    warn_unconfigured(&config);

    let snapshot = input::read_snapshot(flags.snapshot.as_deref())?;
    let coach = Coach::from_config(&config, snapshot)
        .context("failed to initialize the AI gateway")?;

    commands::dispatch(cli.command, &coach, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FORGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn warn_unconfigured(config: &ForgeConfig) {
    if !config.gemini.is_configured() {
        tracing::warn!(
            "no Gemini API key configured; set FORGE_GEMINI__API_KEY. \
             Idea and timeline commands will return fallback content."
        );
    }
}
