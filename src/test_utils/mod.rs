//! Test utilities for RepoMesh
//!
//! Helpers shared by unit tests and the `integration` test target (via the
//! `test-utils` feature):
//! - [`TestRepo`] - a temporary repository root with optional compose layout
//! - [`FakeRunner`] - a [`ProcessRunner`](crate::compose::ProcessRunner) that
//!   records invocations instead of starting processes
//!
//! # Example
//!
//! ```rust,no_run
//! use repomesh_cli::compose::ComposeOrchestrator;
//! use repomesh_cli::test_utils::{FakeRunner, TestRepo};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let repo = TestRepo::with_compose()?;
//! let orchestrator = ComposeOrchestrator::new(FakeRunner::exiting(0));
//! assert_eq!(orchestrator.up(repo.paths()).await?, 0);
//! # Ok(())
//! # }
//! ```

mod repo;
mod runner;

pub use repo::TestRepo;
pub use runner::{FakeRunner, RecordedCall};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
