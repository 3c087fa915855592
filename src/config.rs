//! Runtime configuration
//!
//! Values come from CLI flags, then `ACMOJ_*` environment variables, then
//! built-in defaults.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Default judge API endpoint
pub const DEFAULT_API_BASE: &str = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1";

/// Default judge web frontend
pub const DEFAULT_WEB_BASE: &str = "https://acm.sjtu.edu.cn/OnlineJudge";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST API (no trailing slash)
    pub api_base: Url,
    /// Base URL of the web frontend (no trailing slash)
    pub web_base: Url,
    /// Directory holding stored credentials
    pub config_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env(api_base_override: Option<&str>) -> Result<Self> {
        Self::from_lookup(api_base_override, |key| env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables
    pub fn from_lookup<F>(api_base_override: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = api_base_override
            .map(String::from)
            .or_else(|| lookup("ACMOJ_API_BASE"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let web_base = lookup("ACMOJ_WEB_BASE").unwrap_or_else(|| DEFAULT_WEB_BASE.to_string());

        let config_dir = match lookup("ACMOJ_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?
                .join("acmoj"),
        };

        Ok(Self {
            api_base: parse_base_url(&api_base)?,
            web_base: parse_base_url(&web_base)?,
            config_dir,
        })
    }

    /// Join `path` onto the API base
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.as_str().trim_end_matches('/'))
    }

    /// Web page for a submission
    pub fn submission_page(&self, submission_id: u64) -> String {
        format!(
            "{}/code/{submission_id}/",
            self.web_base.as_str().trim_end_matches('/')
        )
    }

    /// Path of the stored credentials file
    pub fn credentials_path(&self) -> PathBuf {
        self.config_dir.join("credentials.json")
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid URL {raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!("unsupported URL scheme: {raw}")));
    }
    Ok(url)
}
