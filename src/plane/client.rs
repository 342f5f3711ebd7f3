use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::PlaneConfig;
use crate::plane::error::{PlaneError, PlaneResult};
use crate::plane::models::{
    Comment, CreateComment, CreateIssue, Cycle, Issue, IssueFilters, Module, Page, Project, Reply,
    State, UpdateIssue, Workspace,
};

const API_KEY_HEADER: &str = "X-API-Key";

/// API client for a single Plane workspace
///
/// The workspace slug is bound at construction; every call is a stateless
/// round trip with no retries.
pub struct PlaneClient {
    base_url: String,
    workspace_slug: String,
    api_key: String,
    client: Client,
}

impl PlaneClient {
    /// Create a new client from validated configuration
    pub fn new(config: &PlaneConfig) -> PlaneResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| PlaneError::ClientBuild { source })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            workspace_slug: config.workspace_slug.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn workspace_slug(&self) -> &str {
        &self.workspace_slug
    }

    fn workspace_path(&self) -> String {
        format!("/api/v1/workspaces/{}", self.workspace_slug)
    }

    fn project_path(&self, project_id: &str) -> String {
        format!("{}/projects/{}", self.workspace_path(), project_id)
    }

    fn issue_path(&self, project_id: &str, issue_id: &str) -> String {
        format!("{}/issues/{}", self.project_path(project_id), issue_id)
    }

    /// Create a request builder with auth and content-type headers attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "Plane API request");
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> PlaneResult<Reply<T>> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> PlaneResult<Reply<T>> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> PlaneResult<Reply<Vec<T>>> {
        let page: Reply<Page<T>> = self.send(request).await?;
        Ok(page.map(Page::into_results))
    }

    /// Handle API response with standardized error handling
    ///
    /// Any 204 No Content becomes [`Reply::NoContent`], whatever the
    /// operation. Non-success status codes become [`PlaneError::Api`]
    /// carrying the raw response body.
    pub async fn handle_response<T: DeserializeOwned>(
        response: Response,
    ) -> PlaneResult<Reply<T>> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(Reply::NoContent);
        }

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body)
                .map(Reply::Body)
                .map_err(|e| PlaneError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(PlaneError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    // Workspaces

    pub async fn get_workspace(&self) -> PlaneResult<Reply<Workspace>> {
        self.get(&format!("{}/", self.workspace_path())).await
    }

    pub async fn list_workspaces(&self) -> PlaneResult<Reply<Vec<Workspace>>> {
        self.list(self.request(Method::GET, "/api/v1/workspaces/"))
            .await
    }

    // Projects

    pub async fn list_projects(&self) -> PlaneResult<Reply<Vec<Project>>> {
        let path = format!("{}/projects/", self.workspace_path());
        self.list(self.request(Method::GET, &path)).await
    }

    pub async fn get_project(&self, project_id: &str) -> PlaneResult<Reply<Project>> {
        self.get(&format!("{}/", self.project_path(project_id)))
            .await
    }

    pub async fn get_project_states(&self, project_id: &str) -> PlaneResult<Reply<Vec<State>>> {
        let path = format!("{}/states/", self.project_path(project_id));
        self.list(self.request(Method::GET, &path)).await
    }

    // Cycles

    pub async fn list_cycles(&self, project_id: &str) -> PlaneResult<Reply<Vec<Cycle>>> {
        let path = format!("{}/cycles/", self.project_path(project_id));
        self.list(self.request(Method::GET, &path)).await
    }

    pub async fn get_cycle(&self, project_id: &str, cycle_id: &str) -> PlaneResult<Reply<Cycle>> {
        self.get(&format!(
            "{}/cycles/{}/",
            self.project_path(project_id),
            cycle_id
        ))
        .await
    }

    // Modules

    pub async fn list_modules(&self, project_id: &str) -> PlaneResult<Reply<Vec<Module>>> {
        let path = format!("{}/modules/", self.project_path(project_id));
        self.list(self.request(Method::GET, &path)).await
    }

    pub async fn get_module(
        &self,
        project_id: &str,
        module_id: &str,
    ) -> PlaneResult<Reply<Module>> {
        self.get(&format!(
            "{}/modules/{}/",
            self.project_path(project_id),
            module_id
        ))
        .await
    }

    // Issues

    /// List issues, passing only the filters that are set
    pub async fn list_issues(
        &self,
        project_id: &str,
        filters: &IssueFilters,
    ) -> PlaneResult<Reply<Vec<Issue>>> {
        let path = format!("{}/issues/", self.project_path(project_id));
        self.list(self.request(Method::GET, &path).query(filters))
            .await
    }

    pub async fn get_issue(&self, project_id: &str, issue_id: &str) -> PlaneResult<Reply<Issue>> {
        self.get(&format!("{}/", self.issue_path(project_id, issue_id)))
            .await
    }

    pub async fn create_issue(
        &self,
        project_id: &str,
        issue: &CreateIssue,
    ) -> PlaneResult<Reply<Issue>> {
        let path = format!("{}/issues/", self.project_path(project_id));
        self.send(self.request(Method::POST, &path).json(issue))
            .await
    }

    /// Update an existing issue (PATCH semantics - only updates provided fields)
    pub async fn update_issue(
        &self,
        project_id: &str,
        issue_id: &str,
        update: &UpdateIssue,
    ) -> PlaneResult<Reply<Issue>> {
        let path = format!("{}/", self.issue_path(project_id, issue_id));
        self.send(self.request(Method::PATCH, &path).json(update))
            .await
    }

    /// Delete an issue. Plane answers 204, which surfaces as [`Reply::NoContent`].
    pub async fn delete_issue(
        &self,
        project_id: &str,
        issue_id: &str,
    ) -> PlaneResult<Reply<Value>> {
        let path = format!("{}/", self.issue_path(project_id, issue_id));
        self.send(self.request(Method::DELETE, &path)).await
    }

    // Comments

    pub async fn list_issue_comments(
        &self,
        project_id: &str,
        issue_id: &str,
    ) -> PlaneResult<Reply<Vec<Comment>>> {
        let path = format!("{}/comments/", self.issue_path(project_id, issue_id));
        self.list(self.request(Method::GET, &path)).await
    }

    pub async fn add_issue_comment(
        &self,
        project_id: &str,
        issue_id: &str,
        comment: &CreateComment,
    ) -> PlaneResult<Reply<Comment>> {
        let path = format!("{}/comments/", self.issue_path(project_id, issue_id));
        self.send(self.request(Method::POST, &path).json(comment))
            .await
    }
}
