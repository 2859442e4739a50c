//! Seeding of the compose environment file.
//!
//! Both `init` and every compose invocation call [`seed_env_file`], so the
//! copy-if-absent rule lives in exactly one place.

use crate::paths::RepositoryPaths;
use anyhow::{Context, Result};
use std::fs;

/// Copy `.env.example` to `.env` when the active file is missing.
///
/// Returns `true` if a copy was made. An existing `.env` is never touched, and
/// a missing example is not an error.
pub fn seed_env_file(paths: &RepositoryPaths) -> Result<bool> {
    if paths.env_path.exists() || !paths.env_example_path.exists() {
        return Ok(false);
    }

    fs::copy(&paths.env_example_path, &paths.env_path).with_context(|| {
        format!(
            "Failed to seed {} from {}",
            paths.env_path.display(),
            paths.env_example_path.display()
        )
    })?;
    tracing::debug!("Seeded {} from example", paths.env_path.display());
    Ok(true)
}
