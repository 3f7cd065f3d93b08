#[cfg(feature = "cli")]
pub mod cli;

use crate::transport::http::DEFAULT_TOKEN_HEADER;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9090";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_token_header() -> String {
    DEFAULT_TOKEN_HEADER.to_string()
}

/// Where the backend lives and how to authenticate against it.
///
/// ```toml
/// base_url = "http://localhost:9090"
/// timeout_seconds = 10
/// token_header = "X-Token"
/// token = "..."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_token_header")]
    pub token_header: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            token_header: default_token_header(),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Loads a TOML file; missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_non_empty_string("token_header", &self.token_header)?;
        Ok(())
    }
}
