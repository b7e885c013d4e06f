mod analysis;
mod cli;
mod coaching;
mod config;
mod errors;
mod input;
mod llm_client;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::pipeline::{run_coach, run_tailor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    // Logs go to stderr; stdout carries the JSON report
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                default_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_api_key_override(cli.command.api_key());

    info!("Starting Resume Coach v{}", env!("CARGO_PKG_VERSION"));

    let outcome = match Command::from(cli.command) {
        Command::Tailor(params) => run_tailor(&params, &config)
            .await
            .and_then(|report| Ok(serde_json::to_string_pretty(&report)?)),
        Command::Coach(params) => run_coach(&params, &config)
            .await
            .and_then(|report| Ok(serde_json::to_string(&report)?)),
    };

    match outcome {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) if e.is_config() => {
            error!("{e}");
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
