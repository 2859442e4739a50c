//! Docker Compose orchestration for the local RepoMesh stack.
//!
//! Every invocation has the shape
//! `docker compose --env-file <repo>/infra/docker/.env -f <repo>/infra/docker/docker-compose.yml <args>`
//! and inherits the caller's terminal. The tool's exit code is returned as data;
//! a non-zero code is not an error here, it becomes the CLI's own exit status.
//!
//! Process execution goes through [`ProcessRunner`] so tests can substitute a
//! recording fake for the real [`SystemRunner`].

mod runner;

pub use runner::{ProcessRunner, StdioMode, SystemRunner};

use crate::config::seed_env_file;
use crate::constants::{DOCKER_COMMAND, MISSING_EXIT_CODE};
use crate::core::RepoMeshError;
use crate::paths::RepositoryPaths;
use anyhow::Result;

/// Arguments for `repomesh up`.
pub const UP_ARGS: &[&str] = &["up", "-d", "--build"];
/// Arguments for `repomesh down`.
pub const DOWN_ARGS: &[&str] = &["down"];
/// Arguments for the service listing shown by `repomesh status`.
pub const PS_ARGS: &[&str] = &["ps"];

/// Runs compose and daemon diagnostics through a [`ProcessRunner`].
#[derive(Debug, Clone, Default)]
pub struct ComposeOrchestrator<R = SystemRunner> {
    runner: R,
}

impl ComposeOrchestrator<SystemRunner> {
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemRunner)
    }
}

impl<R: ProcessRunner> ComposeOrchestrator<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Borrow the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `docker compose` against the repository's compose file.
    ///
    /// Seeds `.env` from `.env.example` first, the same way `init` does.
    /// Returns the tool's exit code, or `1` when it produced none or could not
    /// be started.
    ///
    /// # Errors
    ///
    /// Fails with [`RepoMeshError::ComposeFileMissing`] if the compose file
    /// does not exist, or if seeding the env file fails.
    pub async fn run_compose(&self, paths: &RepositoryPaths, args: &[&str]) -> Result<i32> {
        if !paths.compose_path.exists() {
            return Err(RepoMeshError::ComposeFileMissing {
                path: paths.compose_path.display().to_string(),
            }
            .into());
        }
        seed_env_file(paths)?;

        let argv = compose_args(paths, args);
        let code = match self.runner.run(DOCKER_COMMAND, &argv, StdioMode::Inherit).await {
            Ok(Some(code)) => code,
            Ok(None) => {
                tracing::warn!("docker compose terminated without an exit code");
                MISSING_EXIT_CODE
            }
            Err(e) => {
                tracing::warn!("Failed to start {DOCKER_COMMAND}: {e}");
                MISSING_EXIT_CODE
            }
        };
        Ok(code)
    }

    /// `docker compose up -d --build`
    pub async fn up(&self, paths: &RepositoryPaths) -> Result<i32> {
        self.run_compose(paths, UP_ARGS).await
    }

    /// `docker compose down`
    pub async fn down(&self, paths: &RepositoryPaths) -> Result<i32> {
        self.run_compose(paths, DOWN_ARGS).await
    }

    /// `docker compose ps`
    pub async fn ps(&self, paths: &RepositoryPaths) -> Result<i32> {
        self.run_compose(paths, PS_ARGS).await
    }

    /// Whether the Docker daemon answers `docker info`.
    ///
    /// Output is discarded. A missing binary or unreachable daemon is `false`,
    /// never an error.
    pub async fn daemon_reachable(&self) -> bool {
        let args = vec!["info".to_string()];
        match self.runner.run(DOCKER_COMMAND, &args, StdioMode::Null).await {
            Ok(code) => code == Some(0),
            Err(e) => {
                tracing::debug!("docker info could not be started: {e}");
                false
            }
        }
    }
}

/// Full argument vector passed to `docker` for a compose subcommand.
#[must_use]
pub fn compose_args(paths: &RepositoryPaths, args: &[&str]) -> Vec<String> {
    let mut argv = vec![
        "compose".to_string(),
        "--env-file".to_string(),
        paths.env_path.display().to_string(),
        "-f".to_string(),
        paths.compose_path.display().to_string(),
    ];
    argv.extend(args.iter().map(|arg| (*arg).to_string()));
    argv
}
