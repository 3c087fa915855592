//! Token storage

use crate::auth::{AuthSource, AuthState};
use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable consulted before the credentials file
pub const TOKEN_ENV_VAR: &str = "ACMOJ_TOKEN";

/// Resolved authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

#[derive(Serialize, Deserialize)]
struct Credentials {
    token: String,
}

/// Locates and persists the access token
///
/// Priority:
/// 1. `ACMOJ_TOKEN` environment variable
/// 2. `<config_dir>/credentials.json`
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
    env_token: Option<String>,
}

impl TokenStore {
    /// Token store for `config`, reading `ACMOJ_TOKEN` from the environment
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.credentials_path(), std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Token store with an explicit credentials path and environment token
    pub fn new(path: PathBuf, env_token: Option<String>) -> Self {
        Self {
            path,
            env_token: env_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Resolve the current token, if any
    pub fn load(&self) -> Result<Option<AuthConfig>> {
        if let Some(token) = &self.env_token {
            return Ok(Some(AuthConfig {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            }));
        }

        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let creds: Credentials = serde_json::from_str(&raw)?;
        let token = creds.token.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }

        Ok(Some(AuthConfig {
            token,
            source: AuthSource::File,
        }))
    }

    /// Resolve the token or fail with [`Error::NotAuthenticated`]
    pub fn require(&self) -> Result<AuthConfig> {
        self.load()?.ok_or(Error::NotAuthenticated)
    }

    /// Persist `token` to the credentials file
    pub fn save(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Auth("token is empty".to_string()));
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let body = serde_json::to_string_pretty(&Credentials {
            token: token.to_string(),
        })?;
        fs::write(&self.path, body)?;
        restrict_permissions(&self.path)?;

        debug!("Stored credentials at {}", self.path.display());
        Ok(())
    }

    /// Remove the credentials file
    ///
    /// Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }

    /// Whether the environment variable overrides the stored token
    pub const fn has_env_override(&self) -> bool {
        self.env_token.is_some()
    }
}

impl AuthState for TokenStore {
    fn is_logged_in(&self) -> bool {
        match self.load() {
            Ok(auth) => auth.is_some(),
            Err(e) => {
                debug!("Ignoring unreadable credentials: {e}");
                false
            }
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &std::path::Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &std::path::Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_token_takes_priority() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        TokenStore::new(path.clone(), None).save("from-file").unwrap();

        let store = TokenStore::new(path, Some("from-env".to_string()));
        let auth = store.require().unwrap();
        assert_eq!(auth.token, "from-env");
        assert_eq!(auth.source, AuthSource::EnvVar);
    }

    #[test]
    fn test_save_load_clear() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("nested/credentials.json"), None);

        assert!(!store.is_logged_in());
        store.save("  abc  ").unwrap();
        assert!(store.is_logged_in());

        let auth = store.require().unwrap();
        assert_eq!(auth.token, "abc");
        assert_eq!(auth.source, AuthSource::File);

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert!(matches!(store.require(), Err(Error::NotAuthenticated)));
    }

    #[test]
    fn test_blank_env_token_ignored() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"), Some("  ".to_string()));
        assert!(!store.has_env_override());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_empty_token_rejected() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"), None);
        assert!(matches!(store.save(""), Err(Error::Auth(_))));
    }

    #[test]
    fn test_corrupt_file_means_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json").unwrap();
        let store = TokenStore::new(path, None);
        assert!(!store.is_logged_in());
        assert!(matches!(store.load(), Err(Error::Json(_))));
    }
}
