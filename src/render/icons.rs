// Language icon lookup.
// Maps GitHub language names to Font Awesome icon classes.

/// Icon class used when a language has no dedicated mapping.
pub const DEFAULT_ICON: &str = "fas fa-code";

/// Get the icon class for a language.
///
/// Unknown or empty input falls back to [`DEFAULT_ICON`].
pub fn language_icon(language: &str) -> &'static str {
    match language {
        "JavaScript" | "TypeScript" => "fab fa-js-square",
        "Python" => "fab fa-python",
        "Java" => "fab fa-java",
        "HTML" => "fab fa-html5",
        "CSS" => "fab fa-css3-alt",
        "React" => "fab fa-react",
        "Vue" => "fab fa-vuejs",
        "Angular" => "fab fa-angular",
        "Node.js" => "fab fa-node-js",
        "PHP" => "fab fa-php",
        "Ruby" => "fas fa-gem",
        "Swift" => "fab fa-swift",
        "Kotlin" => "fas fa-mobile-alt",
        "Shell" => "fas fa-terminal",
        "Rust" => "fas fa-cog",
        "Go" | "C++" | "C#" | "Dart" => "fas fa-code",
        _ => DEFAULT_ICON,
    }
}
