use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("malformed feed: {0}")]
    MalformedFeed(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("response body is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_field(field: &str) -> Self {
        Error::MalformedFeed(format!("game record is missing `{}`", field))
    }
}
