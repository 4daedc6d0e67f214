//! In-memory report built during one dump
//!
//! The report keeps accounts in the order they were fetched and serializes
//! as a JSON array of single-key objects, `[{"<account>": {...}}, ...]`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::client::CheckoutKey;

pub mod aggregate;

pub use aggregate::collect_report;

/// Everything collected for one run, keyed by account display name.
#[derive(Debug, Clone, Default)]
pub struct Report {
    accounts: Vec<(String, AccountData)>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account's data.
    pub fn push(&mut self, account_name: impl Into<String>, data: AccountData) {
        self.accounts.push((account_name.into(), data));
    }

    /// Number of accounts in the report.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterate accounts in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AccountData)> {
        self.accounts.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Look up an account by display name.
    #[cfg(test)]
    pub fn get(&self, account_name: &str) -> Option<&AccountData> {
        self.iter()
            .find(|(name, _)| *name == account_name)
            .map(|(_, data)| data)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Entry<'a>(&'a str, &'a AccountData);

        impl Serialize for Entry<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.0, self.1)?;
                map.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.accounts.len()))?;
        for (name, data) in &self.accounts {
            seq.serialize_element(&Entry(name, data))?;
        }
        seq.end()
    }
}

/// Data collected for one account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    /// Contexts with their variable names
    pub contexts: Vec<ContextEntry>,

    /// Projects with their variable names and keys
    pub projects: Vec<ProjectEntry>,

    /// Accounts whose data could not be fetched; never populated by a
    /// normal run since fetch failures abort it.
    pub unavailable: Vec<String>,
}

impl AccountData {
    /// Total number of context variables across all contexts.
    pub fn context_variable_count(&self) -> usize {
        self.contexts.iter().map(|c| c.variables.len()).sum()
    }

    /// Total number of project variables across all projects.
    pub fn project_variable_count(&self) -> usize {
        self.projects.iter().map(|p| p.variables.len()).sum()
    }

    /// Total number of checkout keys across all projects.
    pub fn key_count(&self) -> usize {
        self.projects.iter().map(|p| p.keys.len()).sum()
    }
}

/// A context and the names of its variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub id: String,
    pub name: String,
    /// Settings page for the context
    pub url: String,
    pub variables: Vec<String>,
}

/// A project, its variable names and its checkout key metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub slug: String,
    /// Environment variable settings page for the project
    pub url: String,
    pub variables: Vec<String>,
    pub keys: Vec<KeyEntry>,
}

/// Checkout key metadata; never includes key material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEntry {
    #[serde(rename = "type")]
    pub key_type: String,
    pub fingerprint: String,
    pub preferred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<CheckoutKey> for KeyEntry {
    fn from(key: CheckoutKey) -> Self {
        Self {
            key_type: key.key_type,
            fingerprint: key.fingerprint,
            preferred: key.preferred,
            created_at: key.created_at,
        }
    }
}

/// Settings page of a context, e.g.
/// `https://app.circleci.com/settings/organization/gh/acme/contexts/<id>`
pub fn context_url(app_url: &str, account_slug: &str, context_id: &str) -> String {
    format!(
        "{}/settings/organization/{}/contexts/{}",
        app_url.trim_end_matches('/'),
        account_slug,
        context_id
    )
}

/// Environment variable settings page of a project, e.g.
/// `https://app.circleci.com/settings/project/gh/acme/api/environment-variables`
pub fn project_url(app_url: &str, project_slug: &str) -> String {
    format!(
        "{}/settings/project/{}/environment-variables",
        app_url.trim_end_matches('/'),
        project_slug
    )
}
