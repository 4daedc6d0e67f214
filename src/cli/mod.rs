//! CLI definition and the dump command

use clap::Parser;

pub mod dump;

/// circledump - Inventory CircleCI secrets metadata across every accessible organization
///
/// Reads the API token from CIRCLE_TOKEN (or prompts for it), walks every
/// organization's contexts and projects, and writes circleci-data.json to the
/// current directory.
#[derive(Parser, Debug)]
#[command(name = "circledump")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, env = "CIRCLEDUMP_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Override the CircleCI API host
    #[arg(long, env = "CIRCLEDUMP_API_HOST", hide = true)]
    pub api_host: Option<String>,
}
