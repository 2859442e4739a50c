//! Typed request bodies and endpoint helpers for tasks, events, and context.
//!
//! Responses are relayed as raw JSON; scheduling, leasing, and locking are
//! decided by the server.

use super::{ApiClient, with_query};
use anyhow::{Context, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Files a task is expected to touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskScope {
    pub files: Vec<String>,
}

/// Body of `POST /v1/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub goal: String,
    pub description: String,
    pub scope: TaskScope,
    pub priority: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<String>,
}

/// Body of `POST /v1/tasks/{id}/claim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimRequest {
    pub agent_id: String,
    pub resource_key: String,
    /// Lease length in seconds
    pub lease_ttl: u64,
}

/// Body of `PATCH /v1/tasks/{id}`; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Detail level of a context bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContextMode {
    Compact,
    Full,
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Full => write!(f, "full"),
        }
    }
}

fn task_path(task_id: &str) -> String {
    format!("/v1/tasks/{}", urlencoding::encode(task_id))
}

fn to_body<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).context("Failed to serialize request body")
}

impl ApiClient {
    /// `POST /v1/tasks`
    pub async fn create_task(&self, task: &NewTask) -> Result<Value> {
        self.request(Method::POST, "/v1/tasks", Some(&to_body(task)?)).await
    }

    /// `GET /v1/tasks[?status=]`
    pub async fn list_tasks(&self, status: Option<&str>) -> Result<Value> {
        let endpoint = with_query("/v1/tasks", &[("status", status)]);
        self.request(Method::GET, &endpoint, None).await
    }

    /// `POST /v1/tasks/{id}/claim`
    pub async fn claim_task(&self, task_id: &str, claim: &ClaimRequest) -> Result<Value> {
        let endpoint = format!("{}/claim", task_path(task_id));
        self.request(Method::POST, &endpoint, Some(&to_body(claim)?)).await
    }

    /// `PATCH /v1/tasks/{id}`
    pub async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<Value> {
        self.request(Method::PATCH, &task_path(task_id), Some(&to_body(update)?)).await
    }

    /// `GET /v1/events[?task_id=]`
    pub async fn list_events(&self, task_id: Option<&str>) -> Result<Value> {
        let endpoint = with_query("/v1/events", &[("task_id", task_id)]);
        self.request(Method::GET, &endpoint, None).await
    }

    /// `GET /v1/context/bundle/{id}[?mode=]`
    pub async fn context_bundle(&self, task_id: &str, mode: Option<ContextMode>) -> Result<Value> {
        let mode = mode.map(|m| m.to_string());
        let endpoint = with_query(
            &format!("/v1/context/bundle/{}", urlencoding::encode(task_id)),
            &[("mode", mode.as_deref())],
        );
        self.request(Method::GET, &endpoint, None).await
    }
}
