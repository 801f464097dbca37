//! Turns a raw [`TrendSeries`] into display-ready structures.
//!
//! Shaping drops the partial-data flag, moves timestamps into the display
//! zone, ranks keywords by mean score, and renders a string-indexed copy of
//! the table. Scores are never altered.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::series::{ScoreColumn, TrendSeries};

/// Asia/Jakarta is UTC+7 year-round (no DST), so a fixed offset is exact.
pub const DISPLAY_OFFSET_SECS: i32 = 7 * 3600;

/// Index format of the raw data table: `day-month hour:minute`.
pub const TABLE_TIME_FORMAT: &str = "%d-%m %H:%M";

/// The display timezone (UTC+7).
#[must_use]
pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "report", rename_all = "snake_case")]
pub enum ShapedTrends {
    /// The provider returned no rows for these keywords in this window.
    Empty,
    Data(TrendReport),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub chart: ChartSeries,
    pub summary: ScoreSummary,
    pub table: DisplayTable,
}

/// Timezone-converted series for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub keywords: Vec<String>,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<FixedOffset>,
    /// One score per keyword, aligned with [`ChartSeries::keywords`].
    pub scores: Vec<f64>,
}

impl ChartSeries {
    /// Scores of the `i`-th keyword across all points.
    pub fn column(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        self.points
            .iter()
            .filter_map(move |point| point.scores.get(i).copied())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScore {
    pub keyword: String,
    pub mean: f64,
}

/// Per-keyword mean scores, highest first.
///
/// Keywords with equal means keep their request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreSummary(Vec<KeywordScore>);

impl ScoreSummary {
    /// Computes and ranks the mean of every column.
    ///
    /// An empty column has a mean of `0.0`.
    #[must_use]
    pub fn from_columns(columns: &[ScoreColumn]) -> Self {
        let mut entries: Vec<KeywordScore> = columns
            .iter()
            .map(|column| KeywordScore {
                keyword: column.keyword.clone(),
                mean: mean(&column.values),
            })
            .collect();
        // `sort_by` is stable, which keeps ties in column order.
        entries.sort_by(|a, b| b.mean.total_cmp(&a.mean));
        Self(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[KeywordScore] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordScore> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mean score of `keyword`, if present.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| entry.mean)
    }
}

impl<'a> IntoIterator for &'a ScoreSummary {
    type Item = &'a KeywordScore;
    type IntoIter = std::slice::Iter<'a, KeywordScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The raw table with its index pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTable {
    pub columns: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub label: String,
    pub scores: Vec<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Shapes `series` for display in the `target` timezone.
///
/// Returns [`ShapedTrends::Empty`] when the series has no rows.
#[must_use]
pub fn shape(series: TrendSeries, target: FixedOffset) -> ShapedTrends {
    if series.is_empty() {
        return ShapedTrends::Empty;
    }

    let series = series.drop_partial_flag();
    let timestamps = series.converted_index(target);
    let columns = series.columns();
    let keywords: Vec<String> = columns.iter().map(|c| c.keyword.clone()).collect();

    let row_scores: Vec<Vec<f64>> = (0..series.len())
        .map(|row| columns.iter().map(|c| c.values[row]).collect())
        .collect();

    let chart = ChartSeries {
        keywords: keywords.clone(),
        points: timestamps
            .iter()
            .zip(&row_scores)
            .map(|(timestamp, scores)| ChartPoint {
                timestamp: *timestamp,
                scores: scores.clone(),
            })
            .collect(),
    };

    let table = DisplayTable {
        columns: keywords,
        rows: timestamps
            .iter()
            .zip(row_scores)
            .map(|(timestamp, scores)| DisplayRow {
                label: timestamp.format(TABLE_TIME_FORMAT).to_string(),
                scores,
            })
            .collect(),
    };

    let summary = ScoreSummary::from_columns(columns);
    tracing::debug!(
        rows = series.len(),
        keywords = summary.len(),
        "shaped interest-over-time table"
    );

    ShapedTrends::Data(TrendReport {
        chart,
        summary,
        table,
    })
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
