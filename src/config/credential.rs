//! The bearer token that authenticates outbound API calls.
//!
//! Generated once per checkout as `rm_` followed by a v4 UUID in its simple
//! (32 lowercase hex, no hyphens) form. The full value is never logged; use
//! [`Credential::preview`] whenever a token has to be shown.

use crate::constants::{TOKEN_PREFIX, TOKEN_PREVIEW_LEN};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

static TOKEN_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^rm_[0-9a-f]{32}$").ok());

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Generate a fresh token.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{TOKEN_PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// Wrap stored text, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing but whitespace remains.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The full token, for request headers and the descriptor file only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First few characters followed by `...`.
    #[must_use]
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(TOKEN_PREVIEW_LEN).collect();
        format!("{head}...")
    }

    /// Whether the token has the generated `rm_<32 hex>` shape.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        TOKEN_SHAPE.as_ref().is_some_and(|re| re.is_match(&self.0))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.preview()).finish()
    }
}
