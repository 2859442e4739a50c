//! MCP connection details and descriptor generation.
//!
//! ```bash
//! repomesh mcp            # endpoints plus a token preview
//! repomesh mcp --write    # write .repomesh/mcp-servers.json and print client hints
//! ```

use super::CliConfig;
use super::output::print_json;
use crate::config::ConfigStore;
use crate::mcp::{self, ClientHints};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
pub struct McpCommand {
    /// Write .repomesh/mcp-servers.json for MCP clients
    #[arg(long)]
    write: bool,
}

#[derive(Debug, Serialize)]
struct McpDetails {
    mcp_http_url: String,
    mcp_stdio_command: String,
    token_preview: String,
}

#[derive(Debug, Serialize)]
struct McpWriteReport {
    message: String,
    path: String,
    hints: ClientHints,
}

impl McpCommand {
    pub fn execute(self, config: &CliConfig) -> Result<i32> {
        let paths = config.paths();
        let state = ConfigStore::load(&paths)?;

        if self.write {
            let document = mcp::build(&state.config, &state.credential, &paths.repo_root);
            let path = mcp::persist(&paths, &document)?;
            print_json(&McpWriteReport {
                message: "MCP servers config written".to_string(),
                path: path.display().to_string(),
                hints: mcp::client_hints(&paths.repo_root),
            })?;
        } else {
            print_json(&McpDetails {
                mcp_http_url: state.config.mcp_http_url,
                mcp_stdio_command: state.config.mcp_stdio_command,
                token_preview: state.credential.preview(),
            })?;
        }
        Ok(0)
    }
}
