//! CircleCI API client

use async_trait::async_trait;

use crate::error::Result;

pub mod circleci;
#[cfg(test)]
pub mod fixtures;
pub mod models;
pub mod pagination;
pub mod response;

pub use circleci::CircleClient;
#[cfg(test)]
pub use mock::MockCircleClient;
pub use models::{
    CheckoutKey, Collaboration, Context, ContextVariable, Project, ProjectVariable, VcsProvider,
};
pub use pagination::{Page, collect_all};
pub use response::ApiResponse;

/// CircleCI API surface used by the dump.
///
/// Each operation issues exactly one GET. Non-2xx statuses come back inside
/// the [`ApiResponse`]; only transport and parse failures are errors.
/// List operations take the cursor from the previous page, `None` for the first.
#[async_trait]
pub trait CircleApi: Send + Sync {
    /// List every organization the token can access (not paginated)
    async fn list_collaborations(&self) -> Result<ApiResponse<Vec<Collaboration>>>;

    /// List contexts owned by an organization
    async fn list_contexts(
        &self,
        owner_id: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<Context>>>;

    /// List the variable names stored in a context
    async fn list_context_variables(
        &self,
        context_id: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<ContextVariable>>>;

    /// List projects (repositories) of an organization
    async fn list_projects(
        &self,
        org_id: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<Project>>>;

    /// List environment variable names of a project
    async fn list_project_variables(
        &self,
        project_slug: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<ProjectVariable>>>;

    /// List checkout (SSH deploy) keys of a project
    async fn list_checkout_keys(
        &self,
        project_slug: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<CheckoutKey>>>;
}
