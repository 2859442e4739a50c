//! Authenticated HTTP client for the RepoMesh API.
//!
//! Each call is a single request with no retry and no caching; failures are
//! surfaced immediately as [`RepoMeshError::Api`]. Every request carries the
//! stored token in the `x-repomesh-token` header.
//!
//! Response bodies are parsed as JSON regardless of status. A body that is not
//! JSON becomes `{}`. For non-2xx responses the error message is the body's
//! `error.message` when present, otherwise `API request failed (<status>)`.
//!
//! # Example
//!
//! ```rust,no_run
//! use repomesh_cli::api::ApiClient;
//! use repomesh_cli::paths::RepositoryPaths;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ApiClient::from_paths(&RepositoryPaths::from_base(None))?;
//! let tasks = client.list_tasks(Some("pending")).await?;
//! println!("{tasks}");
//! # Ok(())
//! # }
//! ```

mod tasks;

pub use tasks::{ClaimRequest, ContextMode, NewTask, TaskScope, TaskUpdate};

use crate::config::{ConfigStore, Credential, RepoConfig};
use crate::constants::AUTH_HEADER;
use crate::core::RepoMeshError;
use crate::paths::RepositoryPaths;
use anyhow::{Context, Result};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Readiness probe path.
pub const READYZ_PATH: &str = "/readyz";
/// Liveness probe path.
pub const HEALTHZ_PATH: &str = "/healthz";

/// Client bound to one repository's configuration and credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: RepoConfig,
    credential: Credential,
}

impl ApiClient {
    /// Build a client with no request timeout.
    pub fn new(config: RepoConfig, credential: Credential) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            credential,
        }
    }

    /// Load configuration and credential from `paths`.
    ///
    /// # Errors
    ///
    /// Fails exactly as [`ConfigStore::load`] does when the repository is not
    /// initialized.
    pub fn from_paths(paths: &RepositoryPaths) -> Result<Self> {
        let state = ConfigStore::load(paths)?;
        Ok(Self::new(state.config, state.credential))
    }

    /// Apply a per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(self)
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Send one request to `api_url + endpoint` and decode the JSON reply.
    ///
    /// `endpoint` is a path with an optional query string. A JSON body is sent
    /// only when `body` is `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`RepoMeshError::Api`] for network failures and non-2xx
    /// responses, or a decode error if a successful body does not fit `T`.
    pub async fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);
        tracing::debug!("{method} {url}");

        let mut request = self
            .http
            .request(method, &url)
            .header(AUTH_HEADER, self.credential.expose());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        // an unreadable body is treated like a non-JSON one; the status still decides
        let bytes = response.bytes().await.map(|b| b.to_vec()).unwrap_or_else(|e| {
            tracing::debug!("Failed to read response body from {url}: {e}");
            Vec::new()
        });
        tracing::debug!("{url} -> {status} ({} bytes)", bytes.len());

        let payload = decode_response(status, &bytes)?;
        serde_json::from_value(payload)
            .with_context(|| format!("Unexpected response shape from {endpoint}"))
    }

    /// GET `endpoint` and report only the HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`RepoMeshError::Api`] with no status when no response arrives.
    pub async fn probe(&self, endpoint: &str) -> Result<u16> {
        let url = self.config.endpoint_url(endpoint);
        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, self.credential.expose())
            .send()
            .await
            .map_err(transport_error)?;
        Ok(response.status().as_u16())
    }

    /// Whether `/healthz` answers with a 2xx status. Never fails.
    pub async fn healthy(&self) -> bool {
        match self.probe(HEALTHZ_PATH).await {
            Ok(status) => (200..300).contains(&status),
            Err(e) => {
                tracing::debug!("Health probe failed: {e}");
                false
            }
        }
    }
}

fn transport_error(error: reqwest::Error) -> RepoMeshError {
    RepoMeshError::Api {
        status: error.status().map(|s| s.as_u16()),
        message: error.to_string(),
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turn a raw HTTP response into the parsed payload or a normalized error.
///
/// # Errors
///
/// Any non-2xx `status` yields [`RepoMeshError::Api`].
pub fn decode_response(status: u16, body: &[u8]) -> Result<Value, RepoMeshError> {
    let payload: Value =
        serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

    if (200..300).contains(&status) {
        return Ok(payload);
    }

    let message = ErrorEnvelope::deserialize(&payload)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| format!("API request failed ({status})"));

    Err(RepoMeshError::Api {
        status: Some(status),
        message,
    })
}

/// Append `key=value` pairs for the present values, URL-encoding each value.
#[must_use]
pub fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect::<Vec<_>>();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}
