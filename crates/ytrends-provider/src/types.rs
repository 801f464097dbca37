//! Google Trends wire types.
//!
//! The `explore` and `widgetdata/multiline` endpoints both prefix their JSON
//! with an anti-hijacking guard (`)]}'` or `)]}',`); [`strip_guard_prefix`]
//! removes it before deserialization.

use serde::{Deserialize, Serialize};

/// Widget id carrying the interest-over-time token.
pub const TIMESERIES_WIDGET: &str = "TIMESERIES";

/// Removes the `)]}'` guard and an optional trailing comma from a body.
#[must_use]
pub fn strip_guard_prefix(body: &str) -> &str {
    let trimmed = body.trim_start();
    match trimmed.strip_prefix(")]}'") {
        Some(rest) => rest.strip_prefix(',').unwrap_or(rest),
        None => trimmed,
    }
}

// ---------------------------------------------------------------------------
// explore request
// ---------------------------------------------------------------------------

/// The `req` query parameter of the `explore` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreRequest<'a> {
    pub comparison_item: Vec<ComparisonItem<'a>>,
    pub category: u32,
    pub property: &'a str,
}

/// One keyword entry inside [`ExploreRequest`].
#[derive(Debug, Serialize)]
pub struct ComparisonItem<'a> {
    pub keyword: &'a str,
    pub time: &'a str,
    pub geo: &'a str,
}

// ---------------------------------------------------------------------------
// explore response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ExploreResponse {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

/// A widget descriptor. Only `TIMESERIES` is used; its `request` object is
/// echoed back verbatim to the multiline endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
    pub id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub request: serde_json::Value,
}

// ---------------------------------------------------------------------------
// widgetdata/multiline
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MultilineResponse {
    pub default: MultilineData,
}

#[derive(Debug, Deserialize)]
pub struct MultilineData {
    #[serde(rename = "timelineData", default)]
    pub timeline_data: Vec<TimelinePoint>,
}

/// One time bucket of interest-over-time data.
#[derive(Debug, Deserialize)]
pub struct TimelinePoint {
    /// Bucket start as Unix epoch seconds, encoded as a string.
    pub time: String,
    /// One score per requested keyword, in request order.
    #[serde(default)]
    pub value: Vec<f64>,
    /// Present (and `true`) on buckets whose data may still change.
    #[serde(rename = "isPartial", default)]
    pub is_partial: Option<bool>,
}
