//! HTTP client for the Google Trends interest-over-time API.
//!
//! One query takes three requests: a landing-page hit that seeds the session
//! cookie, the `explore` call that hands out a widget token, and the
//! `widgetdata/multiline` call that returns the timeline. HTTP 429 on any of
//! them surfaces as [`TrendsError::RateLimited`]; nothing is retried.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use ytrends_core::{AppConfig, KeywordSet};

use crate::error::TrendsError;
use crate::query::TrendQuery;
use crate::series::TrendSeries;
use crate::types::{
    strip_guard_prefix, ExploreResponse, MultilineResponse, Widget, TIMESERIES_WIDGET,
};

/// Client for the Google Trends web API.
///
/// Each instance owns its own cookie store, so building a new client starts
/// a new provider session.
pub struct TrendsClient {
    client: Client,
    base_url: Url,
    geo: String,
    host_language: String,
    tz_offset_minutes: i32,
}

impl TrendsClient {
    /// Creates a client from the application config.
    ///
    /// The connect and read timeouts bound how long a query can block; there
    /// is no overall request deadline on top of them.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TrendsError::InvalidBaseUrl`] if
    /// `config.base_url` does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, TrendsError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // `Url::join` appends API paths instead of replacing the last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TrendsError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            geo: config.geo.clone(),
            host_language: config.host_language.clone(),
            tz_offset_minutes: config.tz_offset_minutes,
        })
    }

    /// The query this client issues for `keywords`.
    #[must_use]
    pub fn query_for(&self, keywords: KeywordSet) -> TrendQuery {
        TrendQuery::last_day_youtube(keywords, &self.geo)
    }

    /// Fetches interest over time for `query`.
    ///
    /// # Errors
    ///
    /// - [`TrendsError::RateLimited`] on HTTP 429 from any step.
    /// - [`TrendsError::UnexpectedStatus`] on other non-2xx statuses.
    /// - [`TrendsError::Http`] on network failure or timeout.
    /// - [`TrendsError::Deserialize`], [`TrendsError::MissingWidget`], or
    ///   [`TrendsError::MalformedTimeline`] when the response has an
    ///   unexpected shape.
    pub async fn interest_over_time(&self, query: &TrendQuery) -> Result<TrendSeries, TrendsError> {
        self.prime_session(&query.geo).await?;
        let widget = self.timeseries_widget(query).await?;
        let response = self.multiline(&widget).await?;
        tracing::debug!(
            buckets = response.default.timeline_data.len(),
            keywords = query.keywords.len(),
            "received interest-over-time data"
        );
        TrendSeries::from_timeline(query.keywords.as_slice(), response.default.timeline_data)
    }

    /// Loads the landing page once so the cookie store picks up the session
    /// cookie the API expects.
    ///
    /// Only a 429 is fatal here; any other failure is logged and the query
    /// proceeds without the cookie.
    async fn prime_session(&self, geo: &str) -> Result<(), TrendsError> {
        let url = self.build_url("trends/explore", &[("geo", geo)])?;
        match self.client.get(url.clone()).send().await {
            Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                Err(TrendsError::RateLimited {
                    url: url.to_string(),
                })
            }
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "session cookie request failed; continuing without it"
                );
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "session cookie request failed; continuing without it");
                Ok(())
            }
        }
    }

    /// Calls `explore` and returns the `TIMESERIES` widget.
    async fn timeseries_widget(&self, query: &TrendQuery) -> Result<Widget, TrendsError> {
        let req = serde_json::to_string(&query.explore_request()).map_err(|e| {
            TrendsError::Deserialize {
                context: "explore request payload".to_owned(),
                source: e,
            }
        })?;
        let url = self.build_url("trends/api/explore", &[("req", &req)])?;
        let body = self.request_text(&url).await?;

        let explore: ExploreResponse =
            serde_json::from_str(strip_guard_prefix(&body)).map_err(|e| {
                TrendsError::Deserialize {
                    context: format!("explore(keywords={})", query.keywords),
                    source: e,
                }
            })?;

        explore
            .widgets
            .into_iter()
            .find(|w| w.id == TIMESERIES_WIDGET)
            .ok_or(TrendsError::MissingWidget(TIMESERIES_WIDGET))
    }

    /// Calls `widgetdata/multiline` with the widget's echoed request.
    async fn multiline(&self, widget: &Widget) -> Result<MultilineResponse, TrendsError> {
        let req = widget.request.to_string();
        let url = self.build_url(
            "trends/api/widgetdata/multiline",
            &[("req", &req), ("token", &widget.token)],
        )?;
        let body = self.request_text(&url).await?;

        serde_json::from_str(strip_guard_prefix(&body)).map_err(|e| TrendsError::Deserialize {
            context: "widgetdata/multiline".to_owned(),
            source: e,
        })
    }

    /// Builds an API URL with `hl` and `tz` followed by `extra`, all
    /// percent-encoded.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, TrendsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| TrendsError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("hl", &self.host_language);
            pairs.append_pair("tz", &self.tz_offset_minutes.to_string());
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and returns the body of a 2xx response.
    async fn request_text(&self, url: &Url) -> Result<String, TrendsError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TrendsError::RateLimited {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(TrendsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
