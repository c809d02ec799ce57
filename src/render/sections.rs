// Section loading orchestration.
// Fetches repository and language data and produces grid markup per section.

use futures::future::join_all;
use log::{error, info};

use crate::error::{PortfolioError, Result};
use crate::github::GitHubClient;
use crate::github::types::{LanguageMap, Repository};

use super::cards;
use super::state::SectionState;

/// Per-card delay step for the entrance animation.
const CARD_STAGGER_MS: usize = 100;

/// Fetch language maps for all repositories concurrently.
///
/// Individual failures were already degraded to empty maps by
/// `get_languages`, so one slow or broken repository never aborts the batch.
async fn fetch_language_maps(client: &GitHubClient, repos: &[Repository]) -> Vec<LanguageMap> {
    join_all(repos.iter().map(|repo| client.get_languages(&repo.name))).await
}

fn join_cards<F>(repos: &[Repository], languages: &[LanguageMap], build: F) -> String
where
    F: Fn(&Repository, &LanguageMap, usize) -> String,
{
    repos
        .iter()
        .zip(languages)
        .enumerate()
        .map(|(index, (repo, langs))| build(repo, langs, index * CARD_STAGGER_MS))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the own-repositories section.
///
/// Zero repositories after filtering is an error for this section.
pub async fn load_projects_section(client: &GitHubClient) -> SectionState<String> {
    match build_projects_grid(client).await {
        Ok(markup) => SectionState::Loaded(markup),
        Err(err) => {
            error!("failed to load projects: {err}");
            SectionState::Error(err.to_string())
        }
    }
}

async fn build_projects_grid(client: &GitHubClient) -> Result<String> {
    let repos = client.get_repositories().await?;
    info!("{} repositories after filtering", repos.len());
    if repos.is_empty() {
        return Err(PortfolioError::NoRepositories);
    }

    let languages = fetch_language_maps(client, &repos).await;
    Ok(join_cards(&repos, &languages, cards::project_card))
}

/// Load the open-source (forked repositories) section.
///
/// Zero forks is not an error; the section renders an explanatory
/// empty-state block instead.
pub async fn load_open_source_section(client: &GitHubClient) -> SectionState<String> {
    let repos = match client.get_forked_repositories().await {
        Ok(repos) => repos,
        Err(err) => {
            error!("failed to load open source contributions: {err}");
            return SectionState::Error(err.to_string());
        }
    };

    info!("{} forked repositories after filtering", repos.len());
    if repos.is_empty() {
        return SectionState::Loaded(cards::empty_contributions().to_string());
    }

    let languages = fetch_language_maps(client, &repos).await;
    SectionState::Loaded(join_cards(&repos, &languages, cards::open_source_card))
}
