//! API token resolution
//!
//! The token comes from `CIRCLE_TOKEN` when set, otherwise from a single
//! masked prompt. Either way it is resolved before any request is made.

use std::io::IsTerminal;

use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;
use log::debug;

use crate::error::{ConfigError, Result};

/// Environment variable holding the personal API token
pub const TOKEN_ENV_VAR: &str = "CIRCLE_TOKEN";

/// Pick the environment value if usable, otherwise ask `prompt` exactly once.
pub fn resolve_token<P>(env_token: Option<String>, prompt: P) -> Result<String>
where
    P: FnOnce() -> Result<String>,
{
    if let Some(token) = env_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        debug!("Using token from {} environment variable", TOKEN_ENV_VAR);
        return Ok(token.to_string());
    }

    debug!("{} not set, prompting for token", TOKEN_ENV_VAR);
    let token = prompt()?;
    let token = token.trim();
    if token.is_empty() {
        return Err(ConfigError::MissingToken.into());
    }
    Ok(token.to_string())
}

/// Ask for the token on the terminal with masked input.
///
/// Without an interactive stdin there is nobody to ask, so this fails with
/// [`ConfigError::MissingToken`] instead of blocking.
pub fn prompt_for_token() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(ConfigError::MissingToken.into());
    }

    let token = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your CircleCI API token")
        .interact()?;
    Ok(token)
}
