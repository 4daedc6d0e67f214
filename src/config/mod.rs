//! Runtime configuration for circledump

use std::path::PathBuf;

use reqwest::Url;

use crate::error::{ConfigError, Result};

/// Production API host
pub const DEFAULT_API_HOST: &str = "https://circleci.com";

/// Path of the v2 API under the host
const API_PATH: &str = "/api/v2";

/// Web app host used for settings-page links in the report
pub const APP_URL: &str = "https://app.circleci.com";

/// Report file, always written to the working directory
pub const OUTPUT_FILE: &str = "circleci-data.json";

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// API host without trailing slash (e.g. `https://circleci.com`)
    pub api_host: String,

    /// Web app base URL for report links
    pub app_url: String,

    /// Where the report is written
    pub output_path: PathBuf,
}

impl Config {
    /// Build the configuration, applying an optional API host override.
    pub fn new(api_host: Option<&str>) -> Result<Self> {
        let api_host = match api_host {
            Some(host) => validate_host(host)?,
            None => DEFAULT_API_HOST.to_string(),
        };

        Ok(Self {
            api_host,
            app_url: APP_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
        })
    }

    /// Base URL for v2 API requests
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_host, API_PATH)
    }
}

/// Check that a host override is an absolute http(s) URL and trim it.
fn validate_host(host: &str) -> Result<String> {
    let trimmed = host.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidHost(host.to_string()).into()),
    }
}
