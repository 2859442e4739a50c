//! Narrow seam over external process execution.

use std::future::Future;
use std::process::Stdio;
use tokio::process::Command;

/// What happens to a child's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the caller's terminal so output is live
    Inherit,
    /// Discard everything; only the exit status matters
    Null,
}

impl StdioMode {
    fn stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Null => Stdio::null(),
        }
    }
}

/// Runs an external program to completion and reports its exit status.
///
/// `Ok(None)` means the process ended without an exit code (killed by a
/// signal); `Err` means it could not be started at all.
pub trait ProcessRunner: Send + Sync {
    fn run(
        &self,
        program: &str,
        args: &[String],
        stdio: StdioMode,
    ) -> impl Future<Output = std::io::Result<Option<i32>>> + Send;
}

/// Runs real processes with `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdio: StdioMode,
    ) -> std::io::Result<Option<i32>> {
        tracing::debug!("Executing: {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args).stdout(stdio.stdio()).stderr(stdio.stdio());
        if stdio == StdioMode::Null {
            cmd.stdin(Stdio::null());
        }

        let status = cmd.status().await?;
        tracing::debug!("{} exited with {:?}", program, status.code());
        Ok(status.code())
    }
}
