//! Temporary repository roots for tests.

use crate::paths::RepositoryPaths;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal compose file; never handed to a real docker in tests.
const COMPOSE_FIXTURE: &str = "services:\n  api:\n    image: repomesh-api:dev\n";

/// A repository root inside a temp directory that is removed on drop.
///
/// The root is a named subdirectory (`demo-repo`) so the derived repository
/// id is predictable.
pub struct TestRepo {
    _temp_dir: TempDir,
    paths: RepositoryPaths,
}

impl TestRepo {
    /// An empty repository root.
    pub fn bare() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("demo-repo");
        fs::create_dir_all(&root)?;

        Ok(Self {
            _temp_dir: temp_dir,
            paths: RepositoryPaths::resolve(root),
        })
    }

    /// A repository root containing `infra/docker/docker-compose.yml`.
    pub fn with_compose() -> Result<Self> {
        let repo = Self::bare()?;
        repo.create_file("infra/docker/docker-compose.yml", COMPOSE_FIXTURE)?;
        Ok(repo)
    }

    pub fn paths(&self) -> &RepositoryPaths {
        &self.paths
    }

    pub fn root(&self) -> &Path {
        &self.paths.repo_root
    }

    /// Write `content` to `relative` under the root, creating parents.
    pub fn create_file(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.paths.repo_root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_file(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(fs::read_to_string(self.paths.repo_root.join(relative))?)
    }

    pub fn file_exists(&self, relative: impl AsRef<Path>) -> bool {
        self.paths.repo_root.join(relative).exists()
    }
}
