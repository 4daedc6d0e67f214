//! CircleCI v2 API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use super::pagination::PAGE_TOKEN_PARAM;
use super::{
    ApiResponse, CheckoutKey, CircleApi, Collaboration, Context, ContextVariable, Page, Project,
    ProjectVariable,
};
use crate::error::{ApiError, Result};

/// Header CircleCI reads the personal API token from
const TOKEN_HEADER: &str = "Circle-Token";

/// Overall per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CircleCI API client
pub struct CircleClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl CircleClient {
    /// Create a client for the given API base URL (e.g. `https://circleci.com/api/v2`)
    pub fn new(token: String, base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("circledump/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Issue one authenticated GET and wrap the outcome.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        ApiResponse::from_body(status, body)
    }
}

/// Query pairs for a list call, adding the cursor when present.
fn with_cursor<'a>(
    mut query: Vec<(&'static str, &'a str)>,
    page_token: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    if let Some(token) = page_token {
        query.push((PAGE_TOKEN_PARAM, token));
    }
    query
}

#[async_trait]
impl CircleApi for CircleClient {
    async fn list_collaborations(&self) -> Result<ApiResponse<Vec<Collaboration>>> {
        self.get("/me/collaborations", &[]).await
    }

    async fn list_contexts(
        &self,
        owner_id: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<Context>>> {
        let query = with_cursor(vec![("owner-id", owner_id)], page_token);
        self.get("/context", &query).await
    }

    async fn list_context_variables(
        &self,
        context_id: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<ContextVariable>>> {
        let path = format!("/context/{}/environment-variable", context_id);
        self.get(&path, &with_cursor(Vec::new(), page_token)).await
    }

    async fn list_projects(
        &self,
        org_id: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<Project>>> {
        let path = format!("/organization/{}/project", org_id);
        self.get(&path, &with_cursor(Vec::new(), page_token)).await
    }

    async fn list_project_variables(
        &self,
        project_slug: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<ProjectVariable>>> {
        let path = format!("/project/{}/envvar", project_slug);
        self.get(&path, &with_cursor(Vec::new(), page_token)).await
    }

    async fn list_checkout_keys(
        &self,
        project_slug: &str,
        page_token: Option<&str>,
    ) -> Result<ApiResponse<Page<CheckoutKey>>> {
        let path = format!("/project/{}/checkout-key", project_slug);
        self.get(&path, &with_cursor(Vec::new(), page_token)).await
    }
}
