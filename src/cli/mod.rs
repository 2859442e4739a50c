//! Command-line interface for RepoMesh.
//!
//! Every command prints a pretty JSON document on stdout; logs and the final
//! one-line error go to stderr. Commands return the process exit code: `0` on
//! success, the compose tool's own code for `up`/`down`, and `1` for reported
//! failures such as an unreachable Docker daemon.
//!
//! # Commands
//!
//! - `init` - create `.repomesh/config.yml` and `.repomesh/token` (idempotent)
//! - `up` / `down` - start or stop the local stack with Docker Compose
//! - `doctor` - local diagnostics
//! - `status` - compose service listing plus API readiness
//! - `mcp` - MCP connection details; `--write` generates `.repomesh/mcp-servers.json`
//! - `task create|list|claim|update` - task operations against the API
//! - `logs` - recent events
//! - `context` - context bundle for a task
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet` - log verbosity (see [`crate::utils::logging`])
//! - `--repo <DIR>` (`REPOMESH_REPO`) - repository root, defaults to the current directory
//! - `--timeout <SECS>` (`REPOMESH_API_TIMEOUT`) - per-request API deadline

mod events;
mod init;
mod mcp;
mod output;
mod services;
mod task;

#[cfg(test)]
mod tests;

use crate::api::ApiClient;
use crate::paths::RepositoryPaths;
use crate::utils::logging::derive_filter;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings derived from the global flags.
///
/// Threaded into every command so none of them reads the working directory
/// or the environment on its own.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Repository root; `None` means the current working directory
    pub repo_root: Option<PathBuf>,
    /// Deadline applied to each API request
    pub api_timeout: Option<Duration>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the repository layout.
    #[must_use]
    pub fn paths(&self) -> RepositoryPaths {
        RepositoryPaths::from_base(self.repo_root.as_deref())
    }

    /// Client for the initialized repository at `paths`.
    pub fn api_client(&self, paths: &RepositoryPaths) -> Result<ApiClient> {
        let client = ApiClient::from_paths(paths)?;
        match self.api_timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => Ok(client),
        }
    }
}

#[derive(Parser)]
#[command(
    name = "repomesh",
    about = "RepoMesh CLI - local control surface for RepoMesh",
    version,
    long_about = "Bootstraps per-repository RepoMesh state, runs the local service stack, \
                  and talks to the RepoMesh API on behalf of agents."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true, env = "REPOMESH_REPO", value_name = "DIR")]
    repo: Option<PathBuf>,

    /// API request timeout in seconds
    #[arg(long, global = true, env = "REPOMESH_API_TIMEOUT", value_name = "SECS")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize RepoMesh config in the repository
    Init(init::InitCommand),

    /// Start RepoMesh core services
    Up(services::UpCommand),

    /// Stop RepoMesh core services
    Down(services::DownCommand),

    /// Run local diagnostics for RepoMesh
    Doctor(services::DoctorCommand),

    /// Show service and API status
    Status(services::StatusCommand),

    /// Show MCP connection details
    Mcp(mcp::McpCommand),

    /// Task operations
    Task(task::TaskCommand),

    /// Fetch recent events
    Logs(events::LogsCommand),

    /// Fetch the context bundle for a task
    Context(events::ContextCommand),
}

impl Cli {
    /// Filter directive selected by `--verbose` / `--quiet`, if any.
    #[must_use]
    pub fn log_filter(&self) -> Option<&'static str> {
        derive_filter(self.verbose, self.quiet)
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        CliConfig {
            repo_root: self.repo.clone(),
            api_timeout: self.timeout.map(Duration::from_secs),
        }
    }

    /// Run the selected command and return the process exit code.
    pub async fn execute(self) -> Result<i32> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    pub async fn execute_with_config(self, config: CliConfig) -> Result<i32> {
        match self.command {
            Commands::Init(cmd) => cmd.execute(&config),
            Commands::Up(cmd) => cmd.execute(&config).await,
            Commands::Down(cmd) => cmd.execute(&config).await,
            Commands::Doctor(cmd) => cmd.execute(&config).await,
            Commands::Status(cmd) => cmd.execute(&config).await,
            Commands::Mcp(cmd) => cmd.execute(&config),
            Commands::Task(cmd) => cmd.execute(&config).await,
            Commands::Logs(cmd) => cmd.execute(&config).await,
            Commands::Context(cmd) => cmd.execute(&config).await,
        }
    }
}
