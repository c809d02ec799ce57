// Text formatting helpers for card markup.
// Date labels, repository display names, and HTML escaping.

use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 timestamp as short month plus year ("Jan 2024").
///
/// Accepts full timestamps and bare dates; unparseable input is returned
/// unchanged. Month names are English regardless of locale.
pub fn format_date(raw: &str) -> String {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return date_time.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    raw.to_string()
}

/// Turn a repository slug into a display name ("my-repo" -> "My Repo").
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Escape text for interpolation into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
