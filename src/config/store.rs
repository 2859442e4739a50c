//! Creation and retrieval of the persisted configuration and credential.
//!
//! [`ConfigStore::initialize`] is the only writer: it bootstraps missing state
//! and otherwise returns what is already on disk. [`ConfigStore::load`] is
//! read-only and is what every other command goes through.

use super::credential::Credential;
use super::env_file::seed_env_file;
use super::repo::RepoConfig;
use crate::constants::INIT_COMMAND;
use crate::core::RepoMeshError;
use crate::paths::RepositoryPaths;
use crate::utils::fs::{ensure_dir, read_text_file, safe_write, write_yaml_file};
use anyhow::Result;
use std::path::Path;

/// Configuration and credential for one checkout, plus where they live.
#[derive(Debug, Clone)]
pub struct LocalState {
    pub paths: RepositoryPaths,
    pub config: RepoConfig,
    pub credential: Credential,
    /// `true` when this call generated fresh state
    pub created: bool,
}

/// Owner of `.repomesh/config.yml` and `.repomesh/token`.
pub struct ConfigStore;

impl ConfigStore {
    /// Bootstrap local state, or return the existing state unchanged.
    ///
    /// Creates the state directory and seeds the compose `.env` from its
    /// example. If both the configuration and the credential already exist
    /// they are loaded as-is; an existing token is never rotated. Otherwise a
    /// fresh default configuration and token are generated and written.
    ///
    /// A configuration file that exists but cannot be parsed is reported as
    /// [`RepoMeshError::ConfigParse`] rather than overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created, the env file
    /// cannot be seeded, existing state cannot be parsed, or writing fails.
    pub fn initialize(paths: &RepositoryPaths) -> Result<LocalState> {
        ensure_dir(&paths.state_dir)?;
        seed_env_file(paths)?;

        if paths.is_initialized() {
            let (config, credential) = read_state(paths)?;
            tracing::debug!("Reusing existing state in {}", paths.state_dir.display());
            return Ok(LocalState {
                paths: paths.clone(),
                config,
                credential,
                created: false,
            });
        }

        // a lone surviving file is kept; only the missing one is generated
        let config = if paths.config_path.exists() {
            read_config(paths)?
        } else {
            let config = RepoConfig::default_for(&paths.repo_root);
            write_yaml_file(&paths.config_path, &config)?;
            config
        };
        let credential = if paths.token_path.exists() {
            read_credential(paths)?
        } else {
            let credential = Credential::generate();
            write_token(&paths.token_path, &credential)?;
            credential
        };

        tracing::info!(
            "Initialized RepoMesh state for '{}' (token {})",
            config.repo_id,
            credential.preview()
        );

        Ok(LocalState {
            paths: paths.clone(),
            config,
            credential,
            created: true,
        })
    }

    /// Read existing state without creating anything.
    ///
    /// # Errors
    ///
    /// Fails with [`RepoMeshError::NotInitialized`] when either file is
    /// missing, and with [`RepoMeshError::ConfigParse`] when one cannot be
    /// parsed.
    pub fn load(paths: &RepositoryPaths) -> Result<LocalState> {
        if !paths.is_initialized() {
            return Err(RepoMeshError::NotInitialized {
                command: INIT_COMMAND.to_string(),
            }
            .into());
        }

        let (config, credential) = read_state(paths)?;
        if !credential.is_well_formed() {
            tracing::warn!(
                "Token in {} does not look like a generated RepoMesh token",
                paths.token_path.display()
            );
        }

        Ok(LocalState {
            paths: paths.clone(),
            config,
            credential,
            created: false,
        })
    }
}

fn read_state(paths: &RepositoryPaths) -> Result<(RepoConfig, Credential)> {
    Ok((read_config(paths)?, read_credential(paths)?))
}

fn read_config(paths: &RepositoryPaths) -> Result<RepoConfig> {
    let raw = read_text_file(&paths.config_path)?;
    let config = serde_yaml::from_str(&raw).map_err(|e| RepoMeshError::ConfigParse {
        file: paths.config_path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(config)
}

fn read_credential(paths: &RepositoryPaths) -> Result<Credential> {
    let raw = read_text_file(&paths.token_path)?;
    let credential = Credential::from_stored(&raw).ok_or_else(|| RepoMeshError::ConfigParse {
        file: paths.token_path.display().to_string(),
        reason: "token file is empty".to_string(),
    })?;
    Ok(credential)
}

/// Write the token as bare text, readable only by the owner on Unix.
fn write_token(path: &Path, credential: &Credential) -> Result<()> {
    safe_write(path, credential.expose())?;

    #[cfg(unix)]
    {
        use anyhow::Context;
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)
            .with_context(|| format!("Failed to read permissions for {}", path.display()))?
            .permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}
