//! Project (repository) models

use serde::{Deserialize, Serialize};

/// Repository registered with CircleCI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    #[serde(default)]
    pub id: String,

    /// Repository name
    pub name: String,

    /// Project slug (e.g. `gh/acme/api`)
    pub slug: String,
}

/// Project environment variable; only the name is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectVariable {
    /// Variable name
    pub name: String,
}

/// Checkout (SSH deploy) key metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutKey {
    /// Key kind (`deploy-key` or `github-user-key`)
    #[serde(rename = "type")]
    pub key_type: String,

    /// SSH fingerprint
    pub fingerprint: String,

    /// Whether this is the key used for checkout
    #[serde(default)]
    pub preferred: bool,

    /// Creation timestamp (`created-at` on the wire)
    #[serde(
        rename = "created-at",
        alias = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}
