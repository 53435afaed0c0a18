use thiserror::Error;

/// Custom error type for fetching, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL template {0}, no {{hour}} placeholder")]
    BadTemplate(String),
    #[error("Can not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Transport error on {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP status {status} on {url}")]
    Status { url: String, status: u16 },
    #[error("Can not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Can not decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
