//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{
    CheckoutKey, Collaboration, Context, ContextVariable, Project, ProjectVariable,
};

// ============================================================================
// CollaborationBuilder
// ============================================================================

/// Builder for creating test Collaboration instances.
///
/// # Example
/// ```ignore
/// let org = CollaborationBuilder::new("org-123")
///     .name("acme")
///     .vcs_type("bitbucket")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CollaborationBuilder {
    id: String,
    name: String,
    slug: Option<String>,
    vcs_type: String,
}

impl CollaborationBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("org-{}", &id),
            id,
            slug: None,
            vcs_type: "github".to_string(),
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the slug explicitly (defaults to `gh/<name>`).
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the provider tag.
    pub fn vcs_type(mut self, vcs_type: impl Into<String>) -> Self {
        self.vcs_type = vcs_type.into();
        self
    }

    /// Build the Collaboration.
    pub fn build(self) -> Collaboration {
        Collaboration {
            slug: self.slug.unwrap_or_else(|| format!("gh/{}", self.name)),
            id: self.id,
            name: self.name,
            vcs_type: self.vcs_type,
            avatar_url: None,
        }
    }
}

// ============================================================================
// ContextBuilder
// ============================================================================

/// Builder for creating test Context instances.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    id: String,
    name: String,
}

impl ContextBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("context-{}", &id),
            id,
        }
    }

    /// Set the context name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Build the Context.
    pub fn build(self) -> Context {
        Context {
            id: self.id,
            name: self.name,
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }
}

/// Context variable with the given name.
pub fn context_variable(context_id: &str, name: &str) -> ContextVariable {
    ContextVariable {
        variable: name.to_string(),
        context_id: context_id.to_string(),
        created_at: None,
        updated_at: None,
    }
}

// ============================================================================
// ProjectBuilder
// ============================================================================

/// Builder for creating test Project instances.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    slug: String,
    name: Option<String>,
}

impl ProjectBuilder {
    /// Create a new builder with the given slug (e.g. `gh/acme/api`).
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
        }
    }

    /// Set the repository name (defaults to the last slug segment).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the Project.
    pub fn build(self) -> Project {
        let name = self.name.unwrap_or_else(|| {
            self.slug
                .rsplit('/')
                .next()
                .unwrap_or(&self.slug)
                .to_string()
        });
        Project {
            id: format!("id-{}", name),
            name,
            slug: self.slug,
        }
    }
}

/// Project variable with the given name.
pub fn project_variable(name: &str) -> ProjectVariable {
    ProjectVariable {
        name: name.to_string(),
    }
}

/// Deploy key with the given fingerprint.
pub fn checkout_key(fingerprint: &str) -> CheckoutKey {
    CheckoutKey {
        key_type: "deploy-key".to_string(),
        fingerprint: fingerprint.to_string(),
        preferred: true,
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaboration_builder_defaults() {
        let org = CollaborationBuilder::new("1").name("acme").build();
        assert_eq!(org.id, "1");
        assert_eq!(org.slug, "gh/acme");
        assert_eq!(org.vcs_type, "github");
    }

    #[test]
    fn test_project_builder_derives_name() {
        let project = ProjectBuilder::new("bb/acme/web").build();
        assert_eq!(project.name, "web");
        assert_eq!(project.slug, "bb/acme/web");
    }
}
