use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://gd.mlb.com/components/game/mlb";

/// Where the daily scoreboard feed lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// Everything before `/year_YYYY/...` in the feed URL.
    pub base_url: String,

    /// Request timeout; `None` keeps reqwest's default.
    pub timeout: Option<Duration>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl FeedConfig {
    /// Defaults overridden by `MLB_FEED_BASE_URL` and `MLB_FEED_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("MLB_FEED_BASE_URL") {
            config = config.with_base_url(&base_url);
        }

        if let Some(secs) = lookup("MLB_FEED_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("MLB_FEED_TIMEOUT_SECS must be a whole number of seconds, got {:?}", secs))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}
