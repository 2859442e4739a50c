//! Canonical on-disk locations for a RepoMesh checkout.
//!
//! Every path is a pure function of the repository root: resolving performs no
//! I/O and no existence checks, so it never fails. The only place the root
//! defaults to the current directory is the CLI boundary.
//!
//! # Layout
//!
//! ```text
//! <repo>/
//! ├── .repomesh/
//! │   ├── config.yml
//! │   ├── token
//! │   └── mcp-servers.json
//! ├── infra/docker/
//! │   ├── docker-compose.yml
//! │   ├── .env.example
//! │   └── .env
//! └── scripts/repomesh_mcp_stdio.py
//! ```

use crate::constants::{
    COMPOSE_DIR, COMPOSE_FILE_NAME, CONFIG_FILE_NAME, ENV_EXAMPLE_FILE_NAME, ENV_FILE_NAME,
    MCP_SERVERS_FILE_NAME, STATE_DIR_NAME, STDIO_LAUNCHER, TOKEN_FILE_NAME,
};
use std::path::{Path, PathBuf};

/// Resolved locations for one repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPaths {
    pub repo_root: PathBuf,
    pub state_dir: PathBuf,
    pub config_path: PathBuf,
    pub token_path: PathBuf,
    pub compose_path: PathBuf,
    pub env_example_path: PathBuf,
    pub env_path: PathBuf,
}

impl RepositoryPaths {
    /// Resolve all locations beneath `repo_root`.
    pub fn resolve(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root = repo_root.into();
        let state_dir = repo_root.join(STATE_DIR_NAME);
        let compose_dir = COMPOSE_DIR.iter().fold(repo_root.clone(), |dir, part| dir.join(part));

        Self {
            config_path: state_dir.join(CONFIG_FILE_NAME),
            token_path: state_dir.join(TOKEN_FILE_NAME),
            compose_path: compose_dir.join(COMPOSE_FILE_NAME),
            env_example_path: compose_dir.join(ENV_EXAMPLE_FILE_NAME),
            env_path: compose_dir.join(ENV_FILE_NAME),
            state_dir,
            repo_root,
        }
    }

    /// Resolve against `base`, or the current working directory when `None`.
    ///
    /// A relative `base` is made absolute against the working directory, so the
    /// derived repository id and the launcher path written for MCP clients
    /// never depend on where those clients start. If the working directory
    /// cannot be read, `.` is used so resolution still succeeds.
    pub fn from_base(base: Option<&Path>) -> Self {
        let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let root = match base {
            Some(base) => std::path::absolute(base).unwrap_or_else(|_| cwd().join(base)),
            None => cwd(),
        };
        Self::resolve(root)
    }

    /// Generated transport descriptor.
    #[must_use]
    pub fn mcp_servers_path(&self) -> PathBuf {
        self.state_dir.join(MCP_SERVERS_FILE_NAME)
    }

    /// Whether both the configuration and the credential exist.
    ///
    /// This is the only method here that touches the filesystem.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.config_path.exists() && self.token_path.exists()
    }
}

/// Stdio launcher location for an arbitrary repository root.
pub fn launcher_path(repo_root: &Path) -> PathBuf {
    STDIO_LAUNCHER.iter().fold(repo_root.to_path_buf(), |dir, part| dir.join(part))
}
