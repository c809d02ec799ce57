// Project card markup builders.
// Produces the HTML fragments injected into the section grids.

use crate::github::types::{LanguageMap, Repository};

use super::format::{display_name, escape_html, format_date};
use super::icons::language_icon;

/// Languages shown as badges per card.
const TOP_LANGUAGES: usize = 3;

/// Primary-language placeholder when no language data is available.
const FALLBACK_LANGUAGE: &str = "Code";

/// Description shown when a repository has none.
const FALLBACK_DESCRIPTION: &str = "No description available.";

fn language_badges(languages: &LanguageMap) -> String {
    languages
        .top_names(TOP_LANGUAGES)
        .iter()
        .map(|lang| format!(r#"<span class="skill-item">{}</span>"#, escape_html(lang)))
        .collect::<Vec<_>>()
        .join("")
}

fn demo_link(repo: &Repository) -> String {
    match repo.homepage_url() {
        Some(url) => format!(
            r#"<a href="{}" class="project-link" target="_blank" rel="noopener"><i class="fas fa-external-link-alt"></i> Live Demo</a>"#,
            escape_html(url)
        ),
        None => String::new(),
    }
}

/// Build the card for one of the user's own repositories.
///
/// `delay_ms` staggers the entrance animation by card position.
pub fn project_card(repo: &Repository, languages: &LanguageMap, delay_ms: usize) -> String {
    let icon = language_icon(languages.primary().unwrap_or(FALLBACK_LANGUAGE));
    let description = escape_html(repo.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION));
    let last_updated = format_date(&repo.updated_at);

    format!(
        r#"<div class="project-card" style="animation-delay: {delay_ms}ms">
    <div class="project-image">
        <i class="{icon}"></i>
    </div>
    <div class="project-content">
        <h3>{name}</h3>
        <p>{description}</p>
        <div class="project-meta">
            <span class="project-stars"><i class="fas fa-star"></i> {stars}</span>
            <span class="project-forks"><i class="fas fa-code-branch"></i> {forks}</span>
            <span class="project-updated"><i class="fas fa-clock"></i> {last_updated}</span>
        </div>
        <div class="project-tech">{badges}</div>
        <div class="project-links">
            <a href="{code_url}" class="project-link" target="_blank" rel="noopener"><i class="fab fa-github"></i> Code</a>
            {demo}
        </div>
    </div>
</div>"#,
        name = escape_html(&display_name(&repo.name)),
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        badges = language_badges(languages),
        code_url = escape_html(&repo.html_url),
        demo = demo_link(repo),
    )
}

/// Build the card for a forked (open source contribution) repository.
///
/// Attribution and counts come from the upstream repository when the API
/// includes a `parent` record.
pub fn open_source_card(repo: &Repository, languages: &LanguageMap, delay_ms: usize) -> String {
    let icon = language_icon(languages.primary().unwrap_or(FALLBACK_LANGUAGE));
    let description = escape_html(repo.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION));
    let last_updated = format_date(&repo.updated_at);
    let upstream = repo.upstream();

    format!(
        r#"<div class="project-card opensource-card" style="animation-delay: {delay_ms}ms">
    <div class="project-image">
        <i class="{icon}"></i>
        <div class="fork-badge"><i class="fas fa-code-branch"></i> Fork</div>
    </div>
    <div class="project-content">
        <h3>{name}</h3>
        <p>{description}</p>
        <div class="original-repo">
            <i class="fas fa-arrow-up"></i>
            <span>Forked from <a href="{upstream_url}" target="_blank" rel="noopener">{upstream_name}</a></span>
        </div>
        <div class="project-meta">
            <span class="project-stars"><i class="fas fa-star"></i> {stars}</span>
            <span class="project-forks"><i class="fas fa-code-branch"></i> {forks}</span>
            <span class="project-updated"><i class="fas fa-clock"></i> {last_updated}</span>
        </div>
        <div class="project-tech">{badges}</div>
        <div class="project-links">
            <a href="{fork_url}" class="project-link" target="_blank" rel="noopener"><i class="fab fa-github"></i> My Fork</a>
            <a href="{upstream_url}" class="project-link" target="_blank" rel="noopener"><i class="fas fa-external-link-alt"></i> Original</a>
            {demo}
        </div>
    </div>
</div>"#,
        name = escape_html(&display_name(&repo.name)),
        upstream_url = escape_html(&upstream.html_url),
        upstream_name = escape_html(&upstream.full_name),
        stars = upstream.stargazers_count,
        forks = upstream.forks_count,
        badges = language_badges(languages),
        fork_url = escape_html(&repo.html_url),
        demo = demo_link(repo),
    )
}

/// Empty-state block for the open source section.
pub fn empty_contributions() -> &'static str {
    r#"<div class="no-contributions"><i class="fas fa-code-branch"></i><p>No open source contributions found yet. This could be because:</p><ul><li>No forked repositories in your GitHub account</li><li>All forked repositories are private</li><li>Repositories are filtered out by configuration</li></ul><p>Check back later!</p></div>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repo() -> Repository {
        Repository {
            name: "test-repo".to_string(),
            full_name: "testuser/test-repo".to_string(),
            description: Some("A test repository".to_string()),
            homepage: Some("https://testuser.github.io/test-repo".to_string()),
            html_url: "https://github.com/testuser/test-repo".to_string(),
            stargazers_count: 5,
            forks_count: 2,
            updated_at: "2024-01-15T10:30:00Z".to_string(),
            ..Repository::default()
        }
    }

    fn sample_languages() -> LanguageMap {
        [("JavaScript", 5000u64), ("CSS", 1200), ("HTML", 400)]
            .into_iter()
            .map(|(name, bytes)| (name.to_string(), bytes))
            .collect()
    }

    #[test]
    fn test_project_card_contents() {
        let card = project_card(&sample_repo(), &sample_languages(), 200);

        assert!(card.contains("Test Repo"));
        assert!(card.contains("A test repository"));
        assert!(card.contains("fab fa-js-square"));
        assert!(card.contains("fas fa-star"));
        assert!(card.contains("Jan 2024"));
        assert!(card.contains("JavaScript"));
        assert!(card.contains("CSS"));
        assert!(card.contains("HTML"));
        assert!(card.contains("https://github.com/testuser/test-repo"));
        assert!(card.contains("animation-delay: 200ms"));
    }

    #[test]
    fn test_project_card_with_homepage_links_demo() {
        let card = project_card(&sample_repo(), &sample_languages(), 0);
        assert!(card.contains("Live Demo"));
        assert!(card.contains("https://testuser.github.io/test-repo"));
    }

    #[test]
    fn test_project_card_without_homepage_omits_demo() {
        let mut repo = sample_repo();
        repo.homepage = None;
        assert!(!project_card(&repo, &sample_languages(), 0).contains("Live Demo"));

        repo.homepage = Some(String::new());
        assert!(!project_card(&repo, &sample_languages(), 0).contains("Live Demo"));
    }

    #[test]
    fn test_project_card_description_fallback() {
        let mut repo = sample_repo();
        repo.description = None;
        let card = project_card(&repo, &sample_languages(), 0);
        assert!(card.contains("No description available."));
    }

    #[test]
    fn test_project_card_without_languages_uses_default_icon() {
        let card = project_card(&sample_repo(), &LanguageMap::default(), 0);
        assert!(card.contains("fas fa-code"));
        assert!(card.contains(r#"<div class="project-tech"></div>"#));
    }

    #[test]
    fn test_project_card_escapes_remote_text() {
        let mut repo = sample_repo();
        repo.description = Some("<script>alert('x')</script>".to_string());
        let card = project_card(&repo, &sample_languages(), 0);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_badges_limited_to_three_languages() {
        let languages: LanguageMap = [("A", 4u64), ("B", 3), ("C", 2), ("D", 1)]
            .into_iter()
            .map(|(name, bytes)| (name.to_string(), bytes))
            .collect();
        let card = project_card(&sample_repo(), &languages, 0);
        assert!(card.contains(r#"<span class="skill-item">C</span>"#));
        assert!(!card.contains(r#"<span class="skill-item">D</span>"#));
    }

    #[test]
    fn test_open_source_card_uses_upstream_attribution() {
        let mut repo = sample_repo();
        repo.fork = true;
        repo.parent = Some(Box::new(Repository {
            name: "test-repo".to_string(),
            full_name: "original/test-repo".to_string(),
            html_url: "https://github.com/original/test-repo".to_string(),
            stargazers_count: 1500,
            forks_count: 321,
            ..Repository::default()
        }));

        let card = open_source_card(&repo, &sample_languages(), 0);
        assert!(card.contains("Forked from"));
        assert!(card.contains("original/test-repo"));
        assert!(card.contains("1500"));
        assert!(card.contains("321"));
        assert!(card.contains("Fork"));
        assert!(card.contains("My Fork"));
        assert!(card.contains("Original"));
    }

    #[test]
    fn test_open_source_card_without_parent_uses_own_counts() {
        let mut repo = sample_repo();
        repo.fork = true;

        let card = open_source_card(&repo, &sample_languages(), 0);
        assert!(card.contains("testuser/test-repo"));
        assert!(card.contains(r#"<i class="fas fa-star"></i> 5"#));
        assert!(card.contains(r#"<i class="fas fa-code-branch"></i> 2"#));
    }

    #[test]
    fn test_empty_contributions_block() {
        let block = empty_contributions();
        assert!(block.contains("no-contributions"));
        assert!(block.contains("No open source contributions found yet."));
        assert!(block.contains("Check back later!"));
    }
}
