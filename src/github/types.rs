// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// GitHub user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
}

/// GitHub repository as returned by the repos list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub updated_at: String,
    /// Upstream repository when this entry is a fork.
    #[serde(default)]
    pub parent: Option<Box<Repository>>,
}

impl Repository {
    /// Homepage URL, treating the API's empty string as absent.
    pub fn homepage_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|url| !url.is_empty())
    }

    /// The upstream repository for a fork, or the repository itself.
    pub fn upstream(&self) -> &Repository {
        self.parent.as_deref().unwrap_or(self)
    }
}

/// Language byte counts in the order returned by the API (largest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, u64)>,
}

impl LanguageMap {
    /// Language names in listed order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The first-listed (dominant) language.
    pub fn primary(&self) -> Option<&str> {
        self.names().next()
    }

    /// The first `n` language names, for badge display.
    pub fn top_names(&self, n: usize) -> Vec<&str> {
        self.names().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, u64)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// Deserialized through a map visitor so entry order survives; `serde_json`
// must keep document order (the `preserve_order` feature) for values that
// round-trip through the cache.
impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LanguageMapVisitor;

        impl<'de> Visitor<'de> for LanguageMapVisitor {
            type Value = LanguageMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of language names to byte counts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<LanguageMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, bytes)) = access.next_entry::<String, u64>()? {
                    entries.push((name, bytes));
                }
                Ok(LanguageMap { entries })
            }
        }

        deserializer.deserialize_map(LanguageMapVisitor)
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_map_keeps_document_order() {
        let languages: LanguageMap =
            serde_json::from_str(r#"{"TypeScript": 52141, "CSS": 4822, "HTML": 921, "Shell": 12}"#)
                .unwrap();

        let names: Vec<&str> = languages.names().collect();
        assert_eq!(names, ["TypeScript", "CSS", "HTML", "Shell"]);
        assert_eq!(languages.primary(), Some("TypeScript"));
        assert_eq!(languages.top_names(3), ["TypeScript", "CSS", "HTML"]);
    }

    #[test]
    fn test_language_map_order_survives_value_roundtrip() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"Zig": 100, "Ada": 50, "C": 25}"#).unwrap();
        let languages: LanguageMap = serde_json::from_value(value).unwrap();

        let names: Vec<&str> = languages.names().collect();
        assert_eq!(names, ["Zig", "Ada", "C"]);
    }

    #[test]
    fn test_empty_language_map() {
        let languages = LanguageMap::default();
        assert!(languages.is_empty());
        assert_eq!(languages.primary(), None);
        assert!(languages.top_names(3).is_empty());
    }

    #[test]
    fn test_homepage_empty_string_is_absent() {
        let mut repo = Repository {
            name: "demo".to_string(),
            homepage: Some(String::new()),
            ..Repository::default()
        };
        assert_eq!(repo.homepage_url(), None);

        repo.homepage = Some("https://example.com".to_string());
        assert_eq!(repo.homepage_url(), Some("https://example.com"));

        repo.homepage = None;
        assert_eq!(repo.homepage_url(), None);
    }

    #[test]
    fn test_upstream_falls_back_to_self() {
        let parent = Repository {
            name: "upstream".to_string(),
            full_name: "original/upstream".to_string(),
            stargazers_count: 420,
            ..Repository::default()
        };
        let fork = Repository {
            name: "upstream".to_string(),
            full_name: "me/upstream".to_string(),
            fork: true,
            stargazers_count: 1,
            parent: Some(Box::new(parent)),
            ..Repository::default()
        };

        assert_eq!(fork.upstream().full_name, "original/upstream");
        assert_eq!(fork.upstream().stargazers_count, 420);

        let standalone = Repository {
            full_name: "me/solo".to_string(),
            ..Repository::default()
        };
        assert_eq!(standalone.upstream().full_name, "me/solo");
    }

    #[test]
    fn test_repository_deserializes_from_api_shape() {
        let repo: Repository = serde_json::from_value(json!({
            "name": "test-repo",
            "full_name": "octocat/test-repo",
            "fork": false,
            "private": false,
            "description": null,
            "homepage": "",
            "html_url": "https://github.com/octocat/test-repo",
            "stargazers_count": 5,
            "forks_count": 2,
            "updated_at": "2024-01-15T10:30:00Z",
            "language": "Rust",
            "default_branch": "main"
        }))
        .unwrap();

        assert_eq!(repo.name, "test-repo");
        assert!(repo.description.is_none());
        assert!(repo.homepage_url().is_none());
        assert!(repo.parent.is_none());
    }
}
