//! Integration test suite for the `repomesh` binary
//!
//! Each test runs the built binary against a temporary repository root.
//! No test needs Docker or a running RepoMesh API: API-backed commands are
//! pointed at a one-shot loopback server instead.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **init**: bootstrap, idempotence, env seeding
//! - **errors**: uninitialized state and missing compose file
//! - **mcp**: connection details and descriptor generation
//! - **api**: task/log/context commands against a loopback server

mod common;

mod api;
mod errors;
mod init;
mod mcp;
