use crate::config::FeedConfig;
use crate::error::{Error, FetchError, Result};
use crate::model::{FeedDocument, RawGame};
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use tracing::{debug, info};

pub struct DataClient {
    client: Client,
    base_url: String,
}

impl DataClient {
    pub fn new(config: &FeedConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn feed_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/year_{:04}/month_{:02}/day_{:02}/master_scoreboard.json",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }

    /// One GET for the given date; no retries.
    pub async fn fetch(&self, date: NaiveDate) -> Result<Vec<RawGame>> {
        let url = self.feed_url(date);
        info!("Fetching scoreboard from {}", url);

        let fetch_err = |source: FetchError| Error::Fetch {
            url: url.clone(),
            source,
        };

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_err(e.into()))?;

        if !resp.status().is_success() {
            return Err(fetch_err(FetchError::Status(resp.status())));
        }

        let body = resp.text().await.map_err(|e| fetch_err(e.into()))?;
        debug!("Received {} bytes", body.len());

        parse_feed(&url, &body)
    }
}

/// Parses a feed body into its list of game records.
///
/// `data.games` without a `game` entry is a day with nothing scheduled and
/// yields an empty list. Missing `data` or `data.games` is malformed.
pub fn parse_feed(url: &str, body: &str) -> Result<Vec<RawGame>> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| Error::Fetch {
        url: url.to_string(),
        source: FetchError::InvalidJson(e),
    })?;

    let doc: FeedDocument =
        serde_json::from_value(value).map_err(|e| Error::MalformedFeed(e.to_string()))?;

    let games = doc
        .data
        .ok_or_else(|| Error::MalformedFeed("missing `data`".to_string()))?
        .games
        .ok_or_else(|| Error::MalformedFeed("missing `data.games`".to_string()))?;

    let games = games.game.map(|g| g.into_vec()).unwrap_or_default();
    debug!("Feed lists {} games", games.len());
    Ok(games)
}
