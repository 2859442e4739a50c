//! RepoMesh CLI - local control surface for the RepoMesh task-coordination service
//!
//! `repomesh` bootstraps per-repository configuration and credentials, starts
//! and stops the service's local containers, relays authenticated JSON
//! requests to the RepoMesh API, and writes MCP connection descriptors that
//! tool-calling clients can consume directly.
//!
//! The CLI never makes scheduling, leasing, or locking decisions itself; it
//! requests them from the API and prints what comes back.
//!
//! # Core Modules
//!
//! - [`paths`] - Canonical on-disk layout, derived purely from the repository root
//! - [`config`] - Idempotent creation and loading of configuration and credential
//! - [`compose`] - Docker Compose invocations and daemon probing behind a process seam
//! - [`api`] - Authenticated HTTP requests with normalized errors
//! - [`mcp`] - The `mcpServers` transport descriptor (HTTP + stdio)
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line surface
//! - [`core`] - Error types and user-facing error rendering
//! - [`constants`] - Fixed names and defaults
//! - [`utils`] - Filesystem helpers and logging setup
//!
//! # On-disk Layout
//!
//! ```text
//! <repo>/.repomesh/config.yml         api_url, mcp_http_url, mcp_stdio_command, repo_id
//! <repo>/.repomesh/token              rm_<32 hex>
//! <repo>/.repomesh/mcp-servers.json   generated by `repomesh mcp --write`
//! <repo>/infra/docker/docker-compose.yml
//! <repo>/infra/docker/.env            seeded from .env.example when absent
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use repomesh_cli::config::ConfigStore;
//! use repomesh_cli::mcp;
//! use repomesh_cli::paths::RepositoryPaths;
//!
//! # fn example() -> anyhow::Result<()> {
//! let paths = RepositoryPaths::resolve("/work/my-repo");
//! let state = ConfigStore::initialize(&paths)?;
//! let descriptor = mcp::build(&state.config, &state.credential, &paths.repo_root);
//! let written = mcp::persist(&paths, &descriptor)?;
//! println!("wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod compose;
pub mod config;
pub mod constants;
pub mod core;
pub mod mcp;
pub mod paths;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
