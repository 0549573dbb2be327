mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use dotenv_flow::dotenv_flow;
use keyproof_crypto::KeyManager;
use tracing::error;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Cli, config::Config};

#[tokio::main]
async fn main() -> ExitCode {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // Enable logging
    config_tracing(cli.log_level.unwrap_or(config.log_level));

    let manager = KeyManager::default();
    match commands::run(&manager, cli.command, config.exportable).await {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn config_tracing(level: tracing::Level) {
    // Logs go to stderr; stdout carries the command output.
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("keyproof", level)
        .with_target("keyproof_crypto", level)
        .with_default(tracing::Level::WARN);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
