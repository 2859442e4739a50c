//! Bootstrap RepoMesh state in a repository.
//!
//! ```bash
//! repomesh init
//! repomesh --repo ../other-checkout init
//! ```
//!
//! Safe to run repeatedly: an existing configuration and token are reported
//! back unchanged, and `infra/docker/.env` is only seeded when absent.

use super::CliConfig;
use super::output::print_json;
use crate::config::{ConfigStore, LocalState};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
pub struct InitCommand {}

/// Document printed by `init`. Carries only a token preview.
#[derive(Debug, Serialize)]
pub struct InitReport {
    pub message: String,
    pub config_path: String,
    pub token_path: String,
    pub api_url: String,
    pub mcp_http_url: String,
    pub token_preview: String,
}

impl InitReport {
    pub fn from_state(state: &LocalState) -> Self {
        let message = if state.created {
            "RepoMesh initialized"
        } else {
            "RepoMesh already initialized"
        };

        Self {
            message: message.to_string(),
            config_path: state.paths.config_path.display().to_string(),
            token_path: state.paths.token_path.display().to_string(),
            api_url: state.config.api_url.clone(),
            mcp_http_url: state.config.mcp_http_url.clone(),
            token_preview: state.credential.preview(),
        }
    }
}

impl InitCommand {
    pub fn execute(self, config: &CliConfig) -> Result<i32> {
        let paths = config.paths();
        let state = ConfigStore::initialize(&paths)?;
        print_json(&InitReport::from_state(&state))?;
        Ok(0)
    }
}
