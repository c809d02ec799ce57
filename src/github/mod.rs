// GitHub API module.
// Provides the cached client and types for the GitHub REST API.

pub mod cache;
pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
