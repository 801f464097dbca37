//! Single-shot fetch + shape, with errors collapsed to what the user sees.

use thiserror::Error;
use ytrends_core::KeywordSet;

use crate::client::TrendsClient;
use crate::error::TrendsError;
use crate::shape::{display_offset, shape, ShapedTrends};

/// User-facing fetch failure.
///
/// Neither kind is retried; the caller reports it and waits for the next
/// trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider is throttling this client.
    #[error("too many requests: the provider is temporarily blocking queries; wait 5-10 minutes before trying again")]
    RateLimited,

    /// Any other provider or network failure, with its diagnostic text.
    #[error("{0}")]
    ProviderError(String),
}

impl FetchError {
    /// Classifies a raw provider diagnostic. Any text mentioning `429` is
    /// treated as a rate limit.
    #[must_use]
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("429") {
            Self::RateLimited
        } else {
            Self::ProviderError(message)
        }
    }
}

impl From<TrendsError> for FetchError {
    fn from(err: TrendsError) -> Self {
        match err {
            TrendsError::RateLimited { .. } => Self::RateLimited,
            // Drop the URL: it carries the whole encoded query string.
            TrendsError::Http(e) => {
                let timed_out = e.is_timeout();
                let message = error_chain(&TrendsError::Http(e.without_url()));
                if timed_out {
                    Self::classify(format!("request timed out: {message}"))
                } else {
                    Self::classify(message)
                }
            }
            other => Self::classify(error_chain(&other)),
        }
    }
}

/// Joins an error with every distinct message in its `source()` chain.
///
/// `reqwest::Error` does not repeat its causes in `Display`, so without this
/// a timeout reads as a bare "error sending request".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Issues one interest-over-time query for `keywords` and shapes the result
/// for display in UTC+7.
///
/// # Errors
///
/// - [`FetchError::RateLimited`] if the provider answered 429.
/// - [`FetchError::ProviderError`] for every other failure, timeouts
///   included.
pub async fn fetch_and_shape(
    client: &TrendsClient,
    keywords: &KeywordSet,
) -> Result<ShapedTrends, FetchError> {
    let query = client.query_for(keywords.clone());
    let series = client.interest_over_time(&query).await.map_err(|e| {
        tracing::warn!(error = %e, keywords = %keywords, "trends query failed");
        FetchError::from(e)
    })?;
    Ok(shape(series, display_offset()))
}
