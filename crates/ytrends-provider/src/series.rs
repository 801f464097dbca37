//! Raw interest-over-time table as returned by the provider.
//!
//! A [`TrendSeries`] is column-oriented: one timestamp index, one score
//! column per keyword (request order), and an optional partial-data flag
//! column. Timestamps are stored as wall-clock values in `source_offset`;
//! when that is `None` they carry no timezone at all.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::TrendsError;
use crate::types::TimelinePoint;

/// One keyword's scores, aligned with [`TrendSeries::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreColumn {
    pub keyword: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    index: Vec<NaiveDateTime>,
    source_offset: Option<FixedOffset>,
    columns: Vec<ScoreColumn>,
    partial: Option<Vec<bool>>,
}

impl TrendSeries {
    /// Builds a naive (timezone-less) series from index and columns.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::MalformedTimeline`] if any column or the
    /// partial flag does not have exactly one value per index entry.
    pub fn new(
        index: Vec<NaiveDateTime>,
        columns: Vec<ScoreColumn>,
        partial: Option<Vec<bool>>,
    ) -> Result<Self, TrendsError> {
        let rows = index.len();
        if let Some(column) = columns.iter().find(|c| c.values.len() != rows) {
            return Err(TrendsError::MalformedTimeline(format!(
                "column '{}' has {} values for {rows} timestamps",
                column.keyword,
                column.values.len()
            )));
        }
        if let Some(flags) = partial.as_ref().filter(|f| f.len() != rows) {
            return Err(TrendsError::MalformedTimeline(format!(
                "partial flag has {} values for {rows} timestamps",
                flags.len()
            )));
        }
        Ok(Self {
            index,
            source_offset: None,
            columns,
            partial,
        })
    }

    /// Builds a series from provider timeline buckets.
    ///
    /// Epoch seconds become naive UTC wall-clock timestamps, matching what
    /// the provider hands back: no timezone attached. The partial flag
    /// column exists when any bucket reports `isPartial`; buckets without
    /// it count as complete.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::MalformedTimeline`] if a bucket's `time` is
    /// not an epoch-seconds integer or its `value` length differs from the
    /// keyword count.
    pub fn from_timeline(
        keywords: &[String],
        points: Vec<TimelinePoint>,
    ) -> Result<Self, TrendsError> {
        let has_partial = points.iter().any(|p| p.is_partial.is_some());
        let mut index = Vec::with_capacity(points.len());
        let mut columns: Vec<ScoreColumn> = keywords
            .iter()
            .map(|keyword| ScoreColumn {
                keyword: keyword.clone(),
                values: Vec::with_capacity(points.len()),
            })
            .collect();
        let mut partial = Vec::with_capacity(points.len());

        for point in points {
            let secs = point.time.parse::<i64>().map_err(|e| {
                TrendsError::MalformedTimeline(format!("bad bucket time '{}': {e}", point.time))
            })?;
            let instant = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                TrendsError::MalformedTimeline(format!("bucket time {secs} out of range"))
            })?;
            if point.value.len() != keywords.len() {
                return Err(TrendsError::MalformedTimeline(format!(
                    "bucket {secs} has {} values for {} keywords",
                    point.value.len(),
                    keywords.len()
                )));
            }

            index.push(instant.naive_utc());
            for (column, value) in columns.iter_mut().zip(point.value) {
                column.values.push(value);
            }
            partial.push(point.is_partial.unwrap_or(false));
        }

        Self::new(index, columns, has_partial.then_some(partial))
    }

    /// Marks the index as wall-clock time in `offset`.
    #[must_use]
    pub fn with_source_offset(mut self, offset: FixedOffset) -> Self {
        self.source_offset = Some(offset);
        self
    }

    #[must_use]
    pub fn index(&self) -> &[NaiveDateTime] {
        &self.index
    }

    #[must_use]
    pub fn source_offset(&self) -> Option<FixedOffset> {
        self.source_offset
    }

    #[must_use]
    pub fn columns(&self) -> &[ScoreColumn] {
        &self.columns
    }

    #[must_use]
    pub fn partial(&self) -> Option<&[bool]> {
        self.partial.as_deref()
    }

    #[must_use]
    pub fn has_partial_flag(&self) -> bool {
        self.partial.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes the partial-data flag column. A no-op when it is absent.
    #[must_use]
    pub fn drop_partial_flag(mut self) -> Self {
        self.partial = None;
        self
    }

    /// Resolves every index entry to an absolute instant.
    ///
    /// Timezone-less timestamps are taken as UTC.
    #[must_use]
    pub fn localized_index(&self) -> Vec<DateTime<Utc>> {
        let offset = self.source_offset.unwrap_or_else(|| Utc.fix());
        self.index
            .iter()
            .map(|naive| match offset.from_local_datetime(naive).single() {
                Some(local) => local.with_timezone(&Utc),
                None => Utc.from_utc_datetime(naive),
            })
            .collect()
    }

    /// Converts the index to `target` for display. Scores are untouched.
    #[must_use]
    pub fn converted_index(&self, target: FixedOffset) -> Vec<DateTime<FixedOffset>> {
        self.localized_index()
            .into_iter()
            .map(|instant| instant.with_timezone(&target))
            .collect()
    }
}

#[cfg(test)]
#[path = "series_test.rs"]
mod tests;
