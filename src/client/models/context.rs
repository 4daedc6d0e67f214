//! Context models

use serde::{Deserialize, Serialize};

/// Account-scoped group of secret environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Context ID
    pub id: String,

    /// Context name
    pub name: String,

    /// Creation timestamp (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Variable stored in a context; the API never returns the value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextVariable {
    /// Variable name
    pub variable: String,

    /// Owning context ID
    #[serde(default)]
    pub context_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
