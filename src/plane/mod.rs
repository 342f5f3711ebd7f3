//! Plane REST API client.
//!
//! One method per REST operation. Every request carries the `X-API-Key`
//! header, list endpoints unwrap the paginated envelope, a 204 from any
//! endpoint is [`Reply::NoContent`], and non-2xx responses become
//! [`PlaneError::Api`] with the raw body text.

mod client;
mod error;
pub mod models;


pub use client::PlaneClient;
pub use error::{PlaneError, PlaneResult};
pub use models::{
    Comment, CreateComment, CreateIssue, Cycle, Issue, IssueFilters, Module, Page, Priority,
    Project, Reply, State, UpdateIssue, Workspace,
};
