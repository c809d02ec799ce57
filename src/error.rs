// Error types for the gitfolio generator.
// Covers configuration validation, GitHub API failures, and page output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("missing GitHub username in configuration")]
    MissingUsername,

    #[error("max_repos must be greater than zero")]
    InvalidMaxRepos,

    #[error("GitHub API error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("no repositories found after filtering")]
    NoRepositories,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
