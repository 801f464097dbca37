use thiserror::Error;

/// Errors returned by the Google Trends client.
#[derive(Debug, Error)]
pub enum TrendsError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with HTTP 429.
    #[error("The request failed: Google returned a response with code 429")]
    RateLimited { url: String },

    /// Any other non-2xx status.
    #[error("The request failed: Google returned a response with code {status}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The explore response did not carry a `TIMESERIES` widget.
    #[error("explore response has no {0} widget")]
    MissingWidget(&'static str),

    /// Timeline rows did not line up with the requested keywords.
    #[error("malformed timeline data: {0}")]
    MalformedTimeline(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
