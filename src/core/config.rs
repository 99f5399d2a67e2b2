use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_FEED_URL: &str = "https://fetchrss.com/feed/aM7HmlnzFMJyaM7GowXkU0ai.rss";
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/get";
pub const DEFAULT_CONTAINER_ID: &str = "news-grid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub feed_url: String,
    /// CORS relay endpoint; the feed URL is passed in its `url` parameter.
    pub relay_url: String,
    pub container_id: String,
    /// Unset means the transport's own limits apply.
    pub request_timeout_secs: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl PipelineConfig {
    /// Reads `NEWS_*` variables, after loading `.env.local` when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let request_timeout_secs = non_empty("NEWS_TIMEOUT_SECS").and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(error) => {
                    warn!(value = %raw, %error, "ignoring invalid NEWS_TIMEOUT_SECS");
                    None
                }
            }
        });

        Self {
            feed_url: non_empty("NEWS_FEED_URL").unwrap_or(defaults.feed_url),
            relay_url: non_empty("NEWS_RELAY_URL").unwrap_or(defaults.relay_url),
            container_id: non_empty("NEWS_CONTAINER_ID").unwrap_or(defaults.container_id),
            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = PipelineConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            ("NEWS_FEED_URL", "https://example.com/feed.xml"),
            ("NEWS_RELAY_URL", "http://127.0.0.1:9000/get"),
            ("NEWS_CONTAINER_ID", "latest-news"),
            ("NEWS_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(config.feed_url, "https://example.com/feed.xml");
        assert_eq!(config.relay_url, "http://127.0.0.1:9000/get");
        assert_eq!(config.container_id, "latest-news");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn blank_and_invalid_values_are_ignored() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            ("NEWS_FEED_URL", "  "),
            ("NEWS_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.request_timeout_secs, None);
    }
}
