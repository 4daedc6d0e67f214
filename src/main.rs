//! circledump - Inventory CircleCI contexts, project variables and keys

use clap::Parser;
use colored::Colorize;
use log::debug;

mod cli;
mod client;
mod config;
mod credentials;
mod error;
mod output;
mod report;

use cli::Cli;
use client::CircleClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("circledump v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::new(cli.api_host.as_deref())?;
    debug!("Using API at {}", config.api_base_url());

    let token = credentials::resolve_token(
        std::env::var(credentials::TOKEN_ENV_VAR).ok(),
        credentials::prompt_for_token,
    )?;

    let client = CircleClient::new(token, config.api_base_url())?;
    cli::dump::run(&client, &config).await
}
