// Page assembly.
// Builds the final HTML document around the rendered section states.

use crate::config::PortfolioConfig;
use crate::github::types::UserProfile;

use super::format::escape_html;
use super::state::SectionState;

const STYLESHEET: &str = include_str!("../../assets/style.css");
const PAGE_SCRIPT: &str = include_str!("../../assets/site.js");
const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Render one grid section with its loading/error/grid elements.
///
/// The page is static, so element visibility mirrors the state the section
/// ended up in.
fn render_section(prefix: &str, state: &SectionState<String>) -> String {
    let (loading_display, error_display) = match state {
        SectionState::Idle => ("none", "none"),
        SectionState::Loading => ("block", "none"),
        SectionState::Loaded(_) => ("none", "none"),
        SectionState::Error(_) => ("none", "block"),
    };
    let grid = match state {
        SectionState::Loaded(markup) => markup.as_str(),
        _ => "",
    };
    let error_detail = match state {
        SectionState::Error(message) => escape_html(message),
        _ => String::new(),
    };

    format!(
        r#"<div id="{prefix}-loading" class="section-status loading-indicator" style="display: {loading_display}">
    <i class="fas fa-spinner fa-spin"></i> Loading repositories...
</div>
<div id="{prefix}-error" class="section-status error-message" style="display: {error_display}">
    <i class="fas fa-exclamation-triangle"></i> Unable to load repositories from GitHub.
    <span class="error-detail">{error_detail}</span>
</div>
<div id="{prefix}-grid" class="projects-grid">
{grid}
</div>"#
    )
}

/// Assemble the complete portfolio page.
///
/// The profile is optional: when the user fetch failed, the hero falls back
/// to the configured username.
pub fn render_page(
    user: Option<&UserProfile>,
    projects: &SectionState<String>,
    open_source: &SectionState<String>,
    config: &PortfolioConfig,
) -> String {
    let display_name = user
        .and_then(|u| u.name.as_deref())
        .unwrap_or(&config.username);
    let bio = user.and_then(|u| u.bio.as_deref()).unwrap_or_default();
    let profile_url = user
        .map(|u| u.html_url.clone())
        .unwrap_or_else(|| format!("https://github.com/{}", config.username));
    let avatar = user
        .and_then(|u| u.avatar_url.as_deref())
        .map(|url| {
            format!(
                r#"<img class="hero-avatar" src="{}" alt="Avatar of {}">"#,
                escape_html(url),
                escape_html(display_name)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Portfolio</title>
<link rel="stylesheet" href="{font_awesome}">
<style>
{stylesheet}
</style>
</head>
<body data-theme="light">
<header class="header">
    <nav class="nav container">
        <a href="#home" class="nav-logo">{title}</a>
        <ul class="nav-menu">
            <li><a href="#home" class="nav-link">Home</a></li>
            <li><a href="#projects" class="nav-link">Projects</a></li>
            <li><a href="#opensource" class="nav-link">Open Source</a></li>
        </ul>
        <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme"><i class="fas fa-moon"></i></button>
        <button class="hamburger" aria-label="Menu"><span></span><span></span><span></span></button>
    </nav>
</header>
<main>
    <section id="home" class="hero">
        {avatar}
        <h1 class="hero-title">{title}</h1>
        <p class="hero-bio">{bio}</p>
        <a href="{profile_url}" class="btn" target="_blank" rel="noopener"><i class="fab fa-github"></i> GitHub Profile</a>
    </section>
    <section id="projects" class="section">
        <h2 class="section-title">Projects</h2>
        {projects_section}
        <div class="projects-footer">
            <a href="{profile_url}" class="btn" target="_blank" rel="noopener">View All Projects</a>
        </div>
    </section>
    <section id="opensource" class="section">
        <h2 class="section-title">Open Source</h2>
        {open_source_section}
    </section>
</main>
<footer class="footer">
    <p>Generated from <a href="{profile_url}" target="_blank" rel="noopener">github.com/{username}</a></p>
</footer>
<button id="scroll-to-top" class="scroll-to-top" aria-label="Scroll to top"><i class="fas fa-arrow-up"></i></button>
<script>
{script}
</script>
</body>
</html>
"##,
        title = escape_html(display_name),
        font_awesome = FONT_AWESOME_URL,
        stylesheet = STYLESHEET,
        bio = escape_html(bio),
        profile_url = escape_html(&profile_url),
        username = escape_html(&config.username),
        projects_section = render_section("projects", projects),
        open_source_section = render_section("opensource", open_source),
        script = PAGE_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PortfolioConfig {
        PortfolioConfig {
            username: "testuser".to_string(),
            max_repos: 6,
            exclude_repos: Vec::new(),
            include_private: false,
        }
    }

    fn test_user() -> UserProfile {
        UserProfile {
            login: "testuser".to_string(),
            name: Some("Test User".to_string()),
            bio: Some("Builds things".to_string()),
            avatar_url: Some("https://example.com/a.png".to_string()),
            html_url: "https://github.com/testuser".to_string(),
            public_repos: 10,
            followers: 2,
        }
    }

    #[test]
    fn test_page_wires_loaded_sections_into_grids() {
        let projects = SectionState::Loaded("<div class=\"project-card\">one</div>".to_string());
        let open_source = SectionState::Loaded("<div class=\"no-contributions\"></div>".to_string());

        let page = render_page(Some(&test_user()), &projects, &open_source, &test_config());

        assert!(page.contains(r#"id="projects-grid""#));
        assert!(page.contains(r#"id="opensource-grid""#));
        assert!(page.contains("project-card"));
        assert!(page.contains("no-contributions"));
        assert!(page.contains(r#"id="projects-loading" class="section-status loading-indicator" style="display: none""#));
        assert!(page.contains(r#"id="projects-error" class="section-status error-message" style="display: none""#));
    }

    #[test]
    fn test_page_shows_error_block_for_failed_section() {
        let projects: SectionState<String> = SectionState::Error("HTTP 500: boom".to_string());
        let open_source = SectionState::Loaded(String::new());

        let page = render_page(Some(&test_user()), &projects, &open_source, &test_config());

        assert!(page.contains(r#"id="projects-error" class="section-status error-message" style="display: block""#));
        assert!(page.contains("HTTP 500: boom"));
    }

    #[test]
    fn test_view_all_link_points_at_profile() {
        let page = render_page(
            Some(&test_user()),
            &SectionState::Loaded(String::new()),
            &SectionState::Loaded(String::new()),
            &test_config(),
        );
        assert!(page.contains(r#"<a href="https://github.com/testuser" class="btn" target="_blank" rel="noopener">View All Projects</a>"#));
    }

    #[test]
    fn test_page_without_profile_falls_back_to_username() {
        let page = render_page(
            None,
            &SectionState::Loaded(String::new()),
            &SectionState::Loaded(String::new()),
            &test_config(),
        );
        assert!(page.contains("<title>testuser | Portfolio</title>"));
        assert!(page.contains(r#"href="https://github.com/testuser""#));
        assert!(!page.contains("hero-avatar"));
    }

    #[test]
    fn test_page_carries_theme_and_interaction_hooks() {
        let page = render_page(
            Some(&test_user()),
            &SectionState::Loaded(String::new()),
            &SectionState::Loaded(String::new()),
            &test_config(),
        );
        assert!(page.contains(r#"data-theme="light""#));
        assert!(page.contains(r#"id="theme-toggle""#));
        assert!(page.contains(r#"id="scroll-to-top""#));
        assert!(page.contains("hamburger"));
    }
}
