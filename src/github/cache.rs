// In-memory response cache for GitHub API calls.
// Entries are keyed by request URL and expire after a fixed TTL.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Default TTL for cached responses: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached response body with its fetch timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The parsed response body.
    pub data: Value,
    /// When the response was fetched.
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this entry has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);
        elapsed >= ttl
    }

    /// Check if this entry is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// URL-keyed response cache shared by all requests of one client.
///
/// Expired entries are superseded by the next fresh fetch of the same URL;
/// there is no background eviction. The mutex satisfies `&self` access from
/// concurrently polled futures.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Cache with the default 5-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Cache with a custom TTL. A zero TTL disables caching entirely.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Return the cached body for `url` if present and unexpired.
    pub fn get(&self, url: &str) -> Option<Value> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(url) {
            Some(entry) if entry.is_valid(self.ttl) => Some(entry.data.clone()),
            _ => None,
        }
    }

    /// Store a response body for `url`, replacing any previous entry.
    pub fn insert(&self, url: &str, data: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(url.to_string(), CacheEntry::new(data));
    }

    /// Number of entries, expired ones included.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
