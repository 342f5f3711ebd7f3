//! Plane resource models.
//!
//! Entities are opaque: each wraps the JSON object exactly as the backend
//! sent it, nulls and unknown fields included, and serializes back to the
//! same value. Accessors read the few fields callers look at.

use rmcp::{schemars, schemars::JsonSchema};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

macro_rules! entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            /// Raw field lookup; `None` when absent.
            pub fn field(&self, name: &str) -> Option<&Value> {
                self.0.get(name)
            }

            /// String field, `None` when absent, null or not a string.
            pub fn str_field(&self, name: &str) -> Option<&str> {
                self.field(name).and_then(Value::as_str)
            }

            pub fn id(&self) -> Option<&str> {
                self.str_field("id")
            }

            pub fn name(&self) -> Option<&str> {
                self.str_field("name")
            }

            pub fn as_value(&self) -> &Value {
                &self.0
            }

            pub fn into_value(self) -> Value {
                self.0
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }
    };
}

entity!(Workspace);
entity!(Project);
entity!(
    /// Workflow stage of an issue within a project.
    State
);
entity!(Cycle);
entity!(Module);
entity!(Issue);
entity!(Comment);

/// Paginated list envelope returned by every list endpoint.
///
/// Only `results` is interpreted. Counts and cursors stay in `meta`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub results: Option<Vec<T>>,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl<T> Page<T> {
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.get("next_cursor").and_then(Value::as_str)
    }

    /// First-page results; cursors are dropped.
    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

/// Outcome of a successful call: a parsed body, or 204 No Content.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Body(T),
    NoContent,
}

impl<T> Reply<T> {
    pub fn into_body(self) -> Option<T> {
        match self {
            Reply::Body(body) => Some(body),
            Reply::NoContent => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Body(body) => Reply::Body(f(body)),
            Reply::NoContent => Reply::NoContent,
        }
    }
}

/// No content renders as `{"success": true}`.
impl<T: Serialize> Serialize for Reply<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reply::Body(body) => body.serialize(serializer),
            Reply::NoContent => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("success", &true)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    None,
}

/// Query filters for listing issues.
///
/// Serialized in declaration order; unset filters are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIssue {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// PATCH body; only provided fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateComment {
    pub comment_html: String,
}
