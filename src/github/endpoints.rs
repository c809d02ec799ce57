// GitHub API endpoint functions.
// Provides typed methods for fetching and filtering portfolio data.

use log::{debug, warn};

use crate::config::PortfolioConfig;
use crate::error::Result;

use super::client::GitHubClient;
use super::types::{LanguageMap, Repository, UserProfile};

/// Page size for the repository listing (most recently updated first).
const REPOS_PER_PAGE: u32 = 50;

impl GitHubClient {
    /// Get the configured user's profile.
    pub async fn get_user_data(&self) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.api_base(), self.config().username);
        let data = self.fetch_with_cache(&url).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Fetch the raw repository listing, sorted by update time.
    async fn fetch_repo_list(&self) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base(),
            self.config().username,
            REPOS_PER_PAGE
        );
        let data = self.fetch_with_cache(&url).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Get the user's own repositories, filtered for display.
    ///
    /// Forks are dropped first; the exclude/private/truncate pipeline then
    /// runs over the remainder, preserving the remote ordering.
    pub async fn get_repositories(&self) -> Result<Vec<Repository>> {
        let repos = self.fetch_repo_list().await?;
        let own = repos.into_iter().filter(|repo| !repo.fork).collect();
        Ok(filter_repositories(own, self.config()))
    }

    /// Get the user's forked repositories, filtered for display.
    pub async fn get_forked_repositories(&self) -> Result<Vec<Repository>> {
        let repos = self.fetch_repo_list().await?;
        let forks: Vec<Repository> = repos.into_iter().filter(|repo| repo.fork).collect();
        debug!("{} forked repositories before filtering", forks.len());

        let filtered = filter_repositories(forks, self.config());
        debug!("{} forked repositories after filtering", filtered.len());
        Ok(filtered)
    }

    /// Get the language byte counts for a repository.
    ///
    /// Degrades to an empty map on any failure; a repository with
    /// inaccessible language data must still render.
    pub async fn get_languages(&self, repo_name: &str) -> LanguageMap {
        let url = format!(
            "{}/repos/{}/{}/languages",
            self.api_base(),
            self.config().username,
            repo_name
        );
        match self.fetch_with_cache(&url).await {
            Ok(data) => serde_json::from_value(data).unwrap_or_else(|err| {
                warn!("undecodable language data for {repo_name}: {err}");
                LanguageMap::default()
            }),
            Err(err) => {
                warn!("failed to fetch languages for {repo_name}: {err}");
                LanguageMap::default()
            }
        }
    }
}

/// Apply the exclude/private/truncate pipeline, preserving input order.
pub fn filter_repositories(repos: Vec<Repository>, config: &PortfolioConfig) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|repo| {
            !config
                .exclude_repos
                .iter()
                .any(|excluded| repo.name.contains(excluded.as_str()))
        })
        .filter(|repo| config.include_private || !repo.private)
        .take(config.max_repos)
        .collect()
}
