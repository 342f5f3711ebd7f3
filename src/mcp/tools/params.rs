//! Tool parameter types.
//!
//! Each struct doubles as the tool's input schema. Path identifiers
//! (`project_id`, `issue_id`) are split off by `into_parts` so they never
//! reach a request body.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::plane::{CreateComment, CreateIssue, IssueFilters, Priority, UpdateIssue};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectParams {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CycleParams {
    #[schemars(description = "ID of the project containing the cycle")]
    pub project_id: String,
    #[schemars(description = "ID of the cycle to retrieve")]
    pub cycle_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ModuleParams {
    #[schemars(description = "ID of the project containing the module")]
    pub project_id: String,
    #[schemars(description = "ID of the module to retrieve")]
    pub module_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueParams {
    #[schemars(description = "ID of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "ID of the issue")]
    pub issue_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
    #[schemars(description = "ID of the project to get issues from")]
    pub project_id: String,
    #[schemars(description = "Filter by state ID (optional)")]
    pub state_id: Option<String>,
    #[schemars(description = "Filter by priority (optional)")]
    pub priority: Option<Priority>,
    #[schemars(description = "Filter by cycle ID (optional)")]
    pub cycle_id: Option<String>,
    #[schemars(description = "Filter by module ID (optional)")]
    pub module_id: Option<String>,
    #[schemars(description = "Filter by assignee ID (optional)")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Filter by creator ID (optional)")]
    pub created_by: Option<String>,
    #[schemars(description = "Search term to filter issues (optional)")]
    pub search: Option<String>,
    #[schemars(description = "Maximum number of issues to return (server default: 50)")]
    pub limit: Option<Number>,
}

impl ListIssuesParams {
    pub fn into_parts(self) -> (String, IssueFilters) {
        let filters = IssueFilters {
            state_id: self.state_id,
            priority: self.priority,
            cycle_id: self.cycle_id,
            module_id: self.module_id,
            assignee_id: self.assignee_id,
            created_by: self.created_by,
            search: self.search,
            limit: self.limit,
        };
        (self.project_id, filters)
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "ID of the project where the issue should be created")]
    pub project_id: String,
    #[schemars(description = "Title of the issue")]
    pub name: String,
    #[schemars(description = "HTML description of the issue")]
    pub description_html: Option<String>,
    #[schemars(description = "Priority of the issue")]
    pub priority: Option<Priority>,
    #[schemars(description = "ID of the state for this issue (optional)")]
    pub state_id: Option<String>,
    #[schemars(description = "Array of user IDs to assign to this issue (optional)")]
    pub assignees: Option<Vec<String>>,
    #[schemars(description = "ID of the cycle to associate with this issue (optional)")]
    pub cycle_id: Option<String>,
    #[schemars(description = "ID of the module to associate with this issue (optional)")]
    pub module_id: Option<String>,
    #[schemars(description = "Array of label IDs to add to this issue (optional)")]
    pub labels: Option<Vec<String>>,
}

impl CreateIssueParams {
    pub fn into_parts(self) -> (String, CreateIssue) {
        let issue = CreateIssue {
            name: self.name,
            description_html: self.description_html,
            priority: self.priority,
            state_id: self.state_id,
            assignees: self.assignees,
            cycle_id: self.cycle_id,
            module_id: self.module_id,
            labels: self.labels,
        };
        (self.project_id, issue)
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIssueParams {
    #[schemars(description = "ID of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "ID of the issue to update")]
    pub issue_id: String,
    #[schemars(description = "Updated title of the issue (optional)")]
    pub name: Option<String>,
    #[schemars(description = "Updated HTML description of the issue (optional)")]
    pub description_html: Option<String>,
    #[schemars(description = "Updated priority of the issue (optional)")]
    pub priority: Option<Priority>,
    #[schemars(description = "Updated state ID of the issue (optional)")]
    pub state_id: Option<String>,
    #[schemars(description = "Updated array of user IDs to assign to this issue (optional)")]
    pub assignees: Option<Vec<String>>,
    #[schemars(description = "Updated cycle ID for this issue (optional)")]
    pub cycle_id: Option<String>,
    #[schemars(description = "Updated module ID for this issue (optional)")]
    pub module_id: Option<String>,
    #[schemars(description = "Updated array of label IDs for this issue (optional)")]
    pub labels: Option<Vec<String>>,
}

impl UpdateIssueParams {
    pub fn into_parts(self) -> (String, String, UpdateIssue) {
        let update = UpdateIssue {
            name: self.name,
            description_html: self.description_html,
            priority: self.priority,
            state_id: self.state_id,
            assignees: self.assignees,
            cycle_id: self.cycle_id,
            module_id: self.module_id,
            labels: self.labels,
        };
        (self.project_id, self.issue_id, update)
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddIssueCommentParams {
    #[schemars(description = "ID of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "ID of the issue to add comment to")]
    pub issue_id: String,
    #[schemars(description = "HTML content of the comment")]
    pub comment_html: String,
}

impl AddIssueCommentParams {
    pub fn into_parts(self) -> (String, String, CreateComment) {
        let comment = CreateComment {
            comment_html: self.comment_html,
        };
        (self.project_id, self.issue_id, comment)
    }
}
