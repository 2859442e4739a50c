//! Recording stand-in for external processes.

use crate::compose::{ProcessRunner, StdioMode};
use std::sync::Mutex;

/// One invocation seen by a [`FakeRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub stdio: StdioMode,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Exit(i32),
    Signalled,
    SpawnFailure,
}

/// A [`ProcessRunner`] that returns a canned outcome and records every call.
#[derive(Debug)]
pub struct FakeRunner {
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeRunner {
    /// Every call exits with `code`.
    pub fn exiting(code: i32) -> Self {
        Self::with_outcome(Outcome::Exit(code))
    }

    /// Every call ends without an exit code.
    pub fn signalled() -> Self {
        Self::with_outcome(Outcome::Signalled)
    }

    /// Every call fails to start, as if the program were not installed.
    pub fn unspawnable() -> Self {
        Self::with_outcome(Outcome::SpawnFailure)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdio: StdioMode,
    ) -> std::io::Result<Option<i32>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                program: program.to_string(),
                args: args.to_vec(),
                stdio,
            });
        }

        match self.outcome {
            Outcome::Exit(code) => Ok(Some(code)),
            Outcome::Signalled => Ok(None),
            Outcome::SpawnFailure => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{program}: not found"),
            )),
        }
    }
}
