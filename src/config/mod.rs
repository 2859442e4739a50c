//! Local RepoMesh state: configuration, credential, and compose env seeding.
//!
//! # Files
//!
//! - `.repomesh/config.yml` - [`RepoConfig`] as YAML
//! - `.repomesh/token` - the [`Credential`] as bare text, no trailing newline
//! - `infra/docker/.env` - seeded from `.env.example` by [`seed_env_file`]
//!
//! ```yaml
//! api_url: http://127.0.0.1:8787
//! mcp_http_url: http://127.0.0.1:8787/mcp/http
//! mcp_stdio_command: python -m app.mcp.stdio
//! repo_id: my-repo
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use repomesh_cli::config::ConfigStore;
//! use repomesh_cli::paths::RepositoryPaths;
//!
//! # fn example() -> anyhow::Result<()> {
//! let paths = RepositoryPaths::from_base(None);
//! let state = ConfigStore::initialize(&paths)?;
//! println!("token {}", state.credential.preview());
//! # Ok(())
//! # }
//! ```

mod credential;
mod env_file;
mod repo;
mod store;

pub use credential::Credential;
pub use env_file::seed_env_file;
pub use repo::RepoConfig;
pub use store::{ConfigStore, LocalState};
