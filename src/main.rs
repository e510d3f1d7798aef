use clap::Parser;
use std::process::ExitCode;

use urlshortener::cli::{Cli, execute};
use urlshortener::config;
use urlshortener::state::AppState;
use urlshortener::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init_tracing(&config)?;
    config.print_summary();

    let state = AppState::connect(&config).await?;

    let stdout = std::io::stdout();
    let result = execute(cli.command, &state.actions, &mut stdout.lock()).await;

    state.close().await;

    Ok(match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(kind = e.kind(), "command failed");
            ExitCode::FAILURE
        }
    })
}
