//! MCP connection descriptor (`.repomesh/mcp-servers.json`).
//!
//! The descriptor is the `mcpServers` document that MCP clients (Codex,
//! Gemini, qwen and others) read to reach RepoMesh. It always holds exactly
//! two entries:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "repomesh_http": {
//!       "transport": "http",
//!       "url": "http://127.0.0.1:8787/mcp/http",
//!       "headers": { "x-repomesh-token": "rm_..." }
//!     },
//!     "repomesh_stdio": {
//!       "transport": "stdio",
//!       "command": "python",
//!       "args": ["<repo>/scripts/repomesh_mcp_stdio.py"]
//!     }
//!   }
//! }
//! ```
//!
//! The document is regenerated from configuration, credential, and repository
//! root every time, so overwriting it is always safe. Maps are ordered, so the
//! same inputs serialize to the same bytes.

mod hints;

pub use hints::{ClientHints, client_hints};

use crate::config::{Credential, RepoConfig};
use crate::constants::{AUTH_HEADER, HTTP_SERVER_KEY, STDIO_INTERPRETER, STDIO_SERVER_KEY};
use crate::paths::{RepositoryPaths, launcher_path};
use crate::utils::fs::{ensure_dir, read_json_file, write_json_file};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level descriptor document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServersDocument {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: BTreeMap<String, McpServerEntry>,
}

/// One way to connect, discriminated by its `transport` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "lowercase")]
pub enum McpServerEntry {
    Http {
        url: String,
        #[serde(default)]
        headers: BTreeMap<String, String>,
    },
    Stdio {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl McpServersDocument {
    pub fn get(&self, name: &str) -> Option<&McpServerEntry> {
        self.mcp_servers.get(name)
    }
}

/// Build the descriptor for one checkout. Pure.
pub fn build(config: &RepoConfig, credential: &Credential, repo_root: &Path) -> McpServersDocument {
    let headers = BTreeMap::from([(AUTH_HEADER.to_string(), credential.expose().to_string())]);

    let http = McpServerEntry::Http {
        url: config.mcp_http_url.clone(),
        headers,
    };
    let stdio = McpServerEntry::Stdio {
        command: STDIO_INTERPRETER.to_string(),
        args: vec![launcher_path(repo_root).display().to_string()],
    };

    McpServersDocument {
        mcp_servers: BTreeMap::from([
            (HTTP_SERVER_KEY.to_string(), http),
            (STDIO_SERVER_KEY.to_string(), stdio),
        ]),
    }
}

/// Write the descriptor as pretty JSON, replacing any previous file.
///
/// Returns the path written.
pub fn persist(paths: &RepositoryPaths, document: &McpServersDocument) -> Result<PathBuf> {
    ensure_dir(&paths.state_dir)?;
    let path = paths.mcp_servers_path();
    write_json_file(&path, document, true)?;
    tracing::debug!("Wrote MCP descriptor to {}", path.display());
    Ok(path)
}

/// Read a previously written descriptor.
pub fn load(path: &Path) -> Result<McpServersDocument> {
    read_json_file(path)
}
