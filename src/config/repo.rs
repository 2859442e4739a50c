//! Persisted per-repository configuration (`.repomesh/config.yml`).

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_MCP_HTTP_URL, DEFAULT_MCP_STDIO_COMMAND, FALLBACK_REPO_ID,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoints and identity of the local RepoMesh service.
///
/// Written once by `init` and stable afterwards; field names are the on-disk
/// YAML keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Base URL every API endpoint path is appended to
    pub api_url: String,
    /// Streamable-HTTP MCP endpoint
    pub mcp_http_url: String,
    /// Command that serves MCP over stdio inside the API app
    pub mcp_stdio_command: String,
    /// Repository identifier sent with created tasks
    pub repo_id: String,
}

impl RepoConfig {
    /// Defaults for a checkout rooted at `repo_root`.
    ///
    /// The identifier is the root directory's base name.
    #[must_use]
    pub fn default_for(repo_root: &Path) -> Self {
        let repo_id = repo_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_REPO_ID.to_string());

        Self {
            api_url: DEFAULT_API_URL.to_string(),
            mcp_http_url: DEFAULT_MCP_HTTP_URL.to_string(),
            mcp_stdio_command: DEFAULT_MCP_STDIO_COMMAND.to_string(),
            repo_id,
        }
    }

    /// `api_url` with `endpoint` appended, tolerating a trailing slash on the base.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), endpoint)
    }
}
