//! Core types for RepoMesh
//!
//! The error taxonomy lives here so every component raises the same shapes:
//! - [`RepoMeshError`] - typed failure cases
//! - [`ErrorContext`] / [`user_friendly_error`] - CLI rendering of any error

pub mod error;

pub use error::{ErrorContext, RepoMeshError, user_friendly_error};
