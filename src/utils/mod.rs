//! Shared utilities
//!
//! - [`fs`] - Directory creation, atomic whole-file writes, JSON/YAML file I/O
//! - [`logging`] - Tracing subscriber setup for the binary

pub mod fs;
pub mod logging;

pub use fs::{atomic_write, ensure_dir, read_json_file, read_text_file, safe_write, write_json_file};
