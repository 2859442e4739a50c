//! File system helpers for the RepoMesh state directory.
//!
//! All writes are whole-file replacements: content goes to a temporary file in
//! the destination directory which is then renamed over the target, so readers
//! see either the previous content or the new content.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repomesh_cli::utils::fs::{ensure_dir, read_json_file, write_json_file};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new(".repomesh"))?;
//! write_json_file(Path::new(".repomesh/out.json"), &serde_json::json!({"a": 1}), true)?;
//! let value: serde_json::Value = read_json_file(Path::new(".repomesh/out.json"))?;
//! # Ok(())
//! # }
//! ```

use crate::core::RepoMeshError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the path exists but is not a directory, or if creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(RepoMeshError::FileSystem {
            operation: "create directory (a file is in the way)".to_string(),
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// The parent directory is created if needed. The temporary file lives in the
/// same directory as the target so the final rename never crosses filesystems.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;
    temp.write_all(content)
        .with_context(|| format!("Failed to write temp file for: {}", path.display()))?;
    temp.as_file().sync_all().context("Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;
    Ok(())
}

/// String convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Reads a text file with the path attached to any error.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Reads and parses a JSON file.
pub fn read_json_file<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_text_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from file: {}", path.display()))
}

/// Writes data as JSON to a file atomically.
///
/// `pretty` selects two-space indented output.
pub fn write_json_file<T>(path: &Path, data: &T, pretty: bool) -> Result<()>
where
    T: serde::Serialize,
{
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };

    safe_write(path, &json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}

/// Writes data as YAML to a file atomically.
pub fn write_yaml_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let yaml = serde_yaml::to_string(data)
        .with_context(|| format!("Failed to serialize data to YAML for: {}", path.display()))?;

    safe_write(path, &yaml)
        .with_context(|| format!("Failed to write YAML file: {}", path.display()))
}
