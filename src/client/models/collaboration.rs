//! Collaboration (account) models

use serde::{Deserialize, Serialize};

use super::VcsProvider;
use crate::error::Result;

/// An organization or personal namespace the token can access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaboration {
    /// Organization ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Organization slug (e.g. `gh/acme`)
    pub slug: String,

    /// Version control provider tag as reported by the API
    #[serde(rename = "vcs-type")]
    pub vcs_type: String,

    /// Avatar URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Collaboration {
    /// Resolve the provider tag, failing on anything unrecognized.
    pub fn provider(&self) -> Result<VcsProvider> {
        self.vcs_type.parse()
    }
}
