//! Authentication for ACM Online Judge
//!
//! Supports a personal access token from an environment variable or from a
//! credentials file written by `acmoj auth login`.

mod token;

pub use token::{AuthConfig, TOKEN_ENV_VAR, TokenStore};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the `ACMOJ_TOKEN` environment variable
    EnvVar,
    /// Token from the stored credentials file
    File,
}

/// Whether the caller is authenticated
pub trait AuthState: Send + Sync {
    /// True when a token is available for API calls
    fn is_logged_in(&self) -> bool;
}
