//! Provider query parameters.

use ytrends_core::KeywordSet;

use crate::types::{ComparisonItem, ExploreRequest};

/// Category `0` means "all categories".
pub const CATEGORY_ALL: u32 = 0;
/// Trailing 24-hour window.
pub const TIMEFRAME_LAST_DAY: &str = "now 1-d";
/// YouTube search vertical.
pub const PROPERTY_YOUTUBE: &str = "youtube";

/// A single interest-over-time query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    pub keywords: KeywordSet,
    pub category: u32,
    pub timeframe: String,
    pub geo: String,
    pub property: String,
}

impl TrendQuery {
    /// The only query shape the dashboard issues: unfiltered category,
    /// last 24 hours, YouTube search, in `geo`.
    #[must_use]
    pub fn last_day_youtube(keywords: KeywordSet, geo: &str) -> Self {
        Self {
            keywords,
            category: CATEGORY_ALL,
            timeframe: TIMEFRAME_LAST_DAY.to_owned(),
            geo: geo.to_uppercase(),
            property: PROPERTY_YOUTUBE.to_owned(),
        }
    }

    /// Builds the `req` payload for the `explore` endpoint.
    #[must_use]
    pub fn explore_request(&self) -> ExploreRequest<'_> {
        ExploreRequest {
            comparison_item: self
                .keywords
                .iter()
                .map(|keyword| ComparisonItem {
                    keyword: keyword.as_str(),
                    time: self.timeframe.as_str(),
                    geo: self.geo.as_str(),
                })
                .collect(),
            category: self.category,
            property: self.property.as_str(),
        }
    }
}
