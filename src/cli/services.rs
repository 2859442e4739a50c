//! Local service stack: `up`, `down`, `status`, `doctor`.
//!
//! `up` and `down` exit with Docker Compose's own exit code. `doctor` and
//! `status` report missing dependencies as data in their JSON output rather
//! than failing.

use super::CliConfig;
use super::output::print_json;
use crate::api::READYZ_PATH;
use crate::compose::{ComposeOrchestrator, ProcessRunner};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use serde_json::{Value, json};

const DAEMON_HINT: &str = "Docker daemon is not reachable. Start Docker Desktop and retry.";

#[derive(Args)]
pub struct UpCommand {}

impl UpCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        ComposeOrchestrator::system().up(&config.paths()).await
    }
}

#[derive(Args)]
pub struct DownCommand {}

impl DownCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        ComposeOrchestrator::system().down(&config.paths()).await
    }
}

/// Outcome of `repomesh doctor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub docker_daemon: bool,
    pub compose_file: bool,
    pub initialized: bool,
    pub api_health: bool,
}

#[derive(Args)]
pub struct DoctorCommand {}

impl DoctorCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        let report = diagnose(&ComposeOrchestrator::system(), config).await;
        print_json(&report)?;

        if report.docker_daemon {
            Ok(0)
        } else {
            eprintln!("{}", DAEMON_HINT.yellow());
            Ok(1)
        }
    }
}

/// Collect diagnostics. The API is only probed for an initialized repository.
pub async fn diagnose<R: ProcessRunner>(
    orchestrator: &ComposeOrchestrator<R>,
    config: &CliConfig,
) -> DoctorReport {
    let paths = config.paths();
    let initialized = paths.is_initialized();

    let api_health = if initialized {
        match config.api_client(&paths) {
            Ok(client) => client.healthy().await,
            Err(e) => {
                tracing::debug!("Skipping health probe: {e}");
                false
            }
        }
    } else {
        false
    };

    DoctorReport {
        docker_daemon: orchestrator.daemon_reachable().await,
        compose_file: paths.compose_path.exists(),
        initialized,
        api_health,
    }
}

#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<i32> {
        let orchestrator = ComposeOrchestrator::system();
        let paths = config.paths();
        if paths.compose_path.exists() {
            // the listing is informational; its exit code does not decide ours
            let code = orchestrator.ps(&paths).await?;
            tracing::debug!("docker compose ps exited with {code}");
        }

        let (report, code) = readiness(config).await;
        print_json(&report)?;
        Ok(code)
    }
}

/// Probe `/readyz`, returning the JSON report and the exit code.
///
/// Any HTTP response counts as a successful probe; only a failure to get one
/// (including an uninitialized repository) exits non-zero.
pub async fn readiness(config: &CliConfig) -> (Value, i32) {
    let paths = config.paths();
    let probe = match config.api_client(&paths) {
        Ok(client) => client.probe(READYZ_PATH).await,
        Err(e) => Err(e),
    };

    match probe {
        Ok(status) => (json!({ "readyz": status, "ok": (200..300).contains(&status) }), 0),
        Err(e) => (json!({ "readyz": null, "ok": false, "error": e.to_string() }), 1),
    }
}
