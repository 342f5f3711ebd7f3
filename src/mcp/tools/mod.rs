//! Static tool catalog
//!
//! One [`ToolName`] per Plane operation. Input schemas are generated from the
//! parameter structs in [`params`], and the schema's `required` list is what
//! the dispatcher validates against.

pub mod params;

use std::fmt;
use std::sync::{Arc, LazyLock};

use rmcp::model::{JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde_json::Value;

use params::{
    AddIssueCommentParams, CreateIssueParams, CycleParams, IssueParams, ListIssuesParams,
    ModuleParams, NoParams, ProjectParams, UpdateIssueParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ListWorkspaces,
    GetWorkspace,
    ListProjects,
    GetProject,
    GetProjectStates,
    ListCycles,
    GetCycle,
    ListModules,
    GetModule,
    ListIssues,
    GetIssue,
    CreateIssue,
    UpdateIssue,
    DeleteIssue,
    ListIssueComments,
    AddIssueComment,
}

impl ToolName {
    /// Every tool, in declaration order.
    pub const ALL: [ToolName; 16] = [
        ToolName::ListWorkspaces,
        ToolName::GetWorkspace,
        ToolName::ListProjects,
        ToolName::GetProject,
        ToolName::GetProjectStates,
        ToolName::ListCycles,
        ToolName::GetCycle,
        ToolName::ListModules,
        ToolName::GetModule,
        ToolName::ListIssues,
        ToolName::GetIssue,
        ToolName::CreateIssue,
        ToolName::UpdateIssue,
        ToolName::DeleteIssue,
        ToolName::ListIssueComments,
        ToolName::AddIssueComment,
    ];

    /// Canonical kebab-case identifier
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ListWorkspaces => "list-workspaces",
            ToolName::GetWorkspace => "get-workspace",
            ToolName::ListProjects => "list-projects",
            ToolName::GetProject => "get-project",
            ToolName::GetProjectStates => "get-project-states",
            ToolName::ListCycles => "list-cycles",
            ToolName::GetCycle => "get-cycle",
            ToolName::ListModules => "list-modules",
            ToolName::GetModule => "get-module",
            ToolName::ListIssues => "list-issues",
            ToolName::GetIssue => "get-issue",
            ToolName::CreateIssue => "create-issue",
            ToolName::UpdateIssue => "update-issue",
            ToolName::DeleteIssue => "delete-issue",
            ToolName::ListIssueComments => "list-issue-comments",
            ToolName::AddIssueComment => "add-issue-comment",
        }
    }

    /// Resolve an identifier, treating `_` and `-` as the same separator.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.replace('_', "-");
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == normalized)
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::ListWorkspaces => "List all workspaces the API key has access to",
            ToolName::GetWorkspace => "Get details about the current workspace",
            ToolName::ListProjects => "List all projects in the workspace",
            ToolName::GetProject => "Get detailed information about a specific project",
            ToolName::GetProjectStates => "Get all states available in a project",
            ToolName::ListCycles => "List all cycles in a project",
            ToolName::GetCycle => "Get detailed information about a specific cycle",
            ToolName::ListModules => "List all modules in a project",
            ToolName::GetModule => "Get detailed information about a specific module",
            ToolName::ListIssues => "List issues from a project with optional filtering",
            ToolName::GetIssue => "Get detailed information about a specific issue",
            ToolName::CreateIssue => "Create a new issue in a project",
            ToolName::UpdateIssue => "Update an existing issue in a project",
            ToolName::DeleteIssue => "Delete an issue from a project",
            ToolName::ListIssueComments => "List all comments on an issue",
            ToolName::AddIssueComment => "Add a comment to an issue",
        }
    }

    fn input_schema(self) -> JsonObject {
        match self {
            ToolName::ListWorkspaces | ToolName::GetWorkspace | ToolName::ListProjects => {
                schema_for::<NoParams>()
            }
            ToolName::GetProject
            | ToolName::GetProjectStates
            | ToolName::ListCycles
            | ToolName::ListModules => schema_for::<ProjectParams>(),
            ToolName::GetCycle => schema_for::<CycleParams>(),
            ToolName::GetModule => schema_for::<ModuleParams>(),
            ToolName::ListIssues => schema_for::<ListIssuesParams>(),
            ToolName::GetIssue | ToolName::DeleteIssue | ToolName::ListIssueComments => {
                schema_for::<IssueParams>()
            }
            ToolName::CreateIssue => schema_for::<CreateIssueParams>(),
            ToolName::UpdateIssue => schema_for::<UpdateIssueParams>(),
            ToolName::AddIssueComment => schema_for::<AddIssueCommentParams>(),
        }
    }

    /// The MCP descriptor for this tool
    pub fn descriptor(self) -> &'static Tool {
        // CATALOG is built from ALL, which follows declaration order
        &CATALOG[self as usize]
    }

    /// Names of required parameters, as declared by the input schema
    pub fn required_params(self) -> Vec<&'static str> {
        match self.descriptor().input_schema.get("required") {
            Some(Value::Array(fields)) => fields.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Required parameters that are absent or null in `arguments`
    pub fn missing_params(self, arguments: &JsonObject) -> Vec<&'static str> {
        self.required_params()
            .into_iter()
            .filter(|field| arguments.get(*field).is_none_or(Value::is_null))
            .collect()
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static CATALOG: LazyLock<Vec<Tool>> = LazyLock::new(|| {
    ToolName::ALL
        .into_iter()
        .map(|tool| {
            Tool::new(
                tool.as_str(),
                tool.description(),
                Arc::new(tool.input_schema()),
            )
        })
        .collect()
});

/// All tool descriptors, for `tools/list`
pub fn tools() -> Vec<Tool> {
    CATALOG.clone()
}

fn schema_for<T: JsonSchema>() -> JsonObject {
    let mut schema = match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(object)) => object,
        _ => JsonObject::new(),
    };
    schema.remove("$schema");
    schema.remove("title");
    schema
        .entry("type")
        .or_insert_with(|| Value::String("object".to_string()));
    schema
        .entry("properties")
        .or_insert_with(|| Value::Object(JsonObject::new()));
    schema
}
