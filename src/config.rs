// Portfolio configuration.
// Loaded from a JSON file and validated before any network activity.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PortfolioError, Result};

fn default_max_repos() -> usize {
    6
}

/// Generator configuration, immutable for the lifetime of a client.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    /// GitHub account whose repositories are rendered.
    pub username: String,
    /// Maximum number of cards per section.
    #[serde(default = "default_max_repos")]
    pub max_repos: usize,
    /// Repositories whose names contain any of these substrings are skipped.
    #[serde(default)]
    pub exclude_repos: Vec<String>,
    /// Keep private repositories in the listing. Anonymous API calls never
    /// return them, but the filter honors the flag.
    #[serde(default)]
    pub include_private: bool,
}

impl PortfolioConfig {
    /// Read and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields, failing fast before the client is built.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(PortfolioError::MissingUsername);
        }
        if self.max_repos == 0 {
            return Err(PortfolioError::InvalidMaxRepos);
        }
        Ok(())
    }
}
