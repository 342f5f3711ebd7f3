//! Tool dispatch
//!
//! Maps a tool name and its JSON arguments onto exactly one [`PlaneClient`]
//! call. Every outcome, including unknown tools and bad arguments, comes
//! back as a [`CallToolResult`]; tool-level failures are error-tagged
//! results, never protocol faults.

use std::sync::Arc;

use miette::Diagnostic;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::tools::ToolName;
use super::tools::params::{
    AddIssueCommentParams, CreateIssueParams, CycleParams, IssueParams, ListIssuesParams,
    ModuleParams, ProjectParams, UpdateIssueParams,
};
use crate::plane::{PlaneClient, PlaneError};

#[derive(Error, Diagnostic, Debug)]
pub enum DispatchError {
    #[error("Unknown tool: {name}")]
    #[diagnostic(code(plane_mcp::mcp::unknown_tool))]
    UnknownTool { name: String },

    #[error("Missing required parameter(s) for {tool}: {}", .missing.join(", "))]
    #[diagnostic(code(plane_mcp::mcp::missing_params))]
    MissingParams {
        tool: ToolName,
        missing: Vec<&'static str>,
    },

    #[error("Invalid parameters for {tool}: {message}")]
    #[diagnostic(code(plane_mcp::mcp::invalid_params))]
    InvalidParams { tool: ToolName, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Plane(#[from] PlaneError),

    #[error("Failed to serialize response: {0}")]
    #[diagnostic(code(plane_mcp::mcp::serialization))]
    Serialization(#[from] serde_json::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Routes tool calls to the Plane client
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<PlaneClient>,
}

impl Dispatcher {
    pub fn new(client: Arc<PlaneClient>) -> Self {
        Self { client }
    }

    /// Run one tool call and wrap the outcome for the MCP host.
    ///
    /// Success yields the pretty-printed JSON result as a single text item.
    /// Failure yields `Error: <message>` with `is_error` set.
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.execute(name, arguments.unwrap_or_default()).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!(tool = name, error = %e, "Tool call failed");
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }

    async fn execute(&self, name: &str, arguments: JsonObject) -> DispatchResult<String> {
        let tool = ToolName::parse(name).ok_or_else(|| DispatchError::UnknownTool {
            name: name.to_string(),
        })?;

        let missing = tool.missing_params(&arguments);
        if !missing.is_empty() {
            return Err(DispatchError::MissingParams { tool, missing });
        }

        debug!(%tool, "Dispatching tool call");
        let client = &self.client;

        match tool {
            ToolName::ListWorkspaces => render(&client.list_workspaces().await?),
            ToolName::GetWorkspace => render(&client.get_workspace().await?),
            ToolName::ListProjects => render(&client.list_projects().await?),
            ToolName::GetProject => {
                let p: ProjectParams = parse(tool, arguments)?;
                render(&client.get_project(&p.project_id).await?)
            }
            ToolName::GetProjectStates => {
                let p: ProjectParams = parse(tool, arguments)?;
                render(&client.get_project_states(&p.project_id).await?)
            }
            ToolName::ListCycles => {
                let p: ProjectParams = parse(tool, arguments)?;
                render(&client.list_cycles(&p.project_id).await?)
            }
            ToolName::GetCycle => {
                let p: CycleParams = parse(tool, arguments)?;
                render(&client.get_cycle(&p.project_id, &p.cycle_id).await?)
            }
            ToolName::ListModules => {
                let p: ProjectParams = parse(tool, arguments)?;
                render(&client.list_modules(&p.project_id).await?)
            }
            ToolName::GetModule => {
                let p: ModuleParams = parse(tool, arguments)?;
                render(&client.get_module(&p.project_id, &p.module_id).await?)
            }
            ToolName::ListIssues => {
                let p: ListIssuesParams = parse(tool, arguments)?;
                let (project_id, filters) = p.into_parts();
                render(&client.list_issues(&project_id, &filters).await?)
            }
            ToolName::GetIssue => {
                let p: IssueParams = parse(tool, arguments)?;
                render(&client.get_issue(&p.project_id, &p.issue_id).await?)
            }
            ToolName::CreateIssue => {
                let p: CreateIssueParams = parse(tool, arguments)?;
                let (project_id, issue) = p.into_parts();
                render(&client.create_issue(&project_id, &issue).await?)
            }
            ToolName::UpdateIssue => {
                let p: UpdateIssueParams = parse(tool, arguments)?;
                let (project_id, issue_id, update) = p.into_parts();
                render(&client.update_issue(&project_id, &issue_id, &update).await?)
            }
            ToolName::DeleteIssue => {
                let p: IssueParams = parse(tool, arguments)?;
                render(&client.delete_issue(&p.project_id, &p.issue_id).await?)
            }
            ToolName::ListIssueComments => {
                let p: IssueParams = parse(tool, arguments)?;
                render(&client.list_issue_comments(&p.project_id, &p.issue_id).await?)
            }
            ToolName::AddIssueComment => {
                let p: AddIssueCommentParams = parse(tool, arguments)?;
                let (project_id, issue_id, comment) = p.into_parts();
                render(
                    &client
                        .add_issue_comment(&project_id, &issue_id, &comment)
                        .await?,
                )
            }
        }
    }
}

fn parse<T: DeserializeOwned>(tool: ToolName, arguments: JsonObject) -> DispatchResult<T> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| DispatchError::InvalidParams {
        tool,
        message: e.to_string(),
    })
}

fn render<T: Serialize>(value: &T) -> DispatchResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
