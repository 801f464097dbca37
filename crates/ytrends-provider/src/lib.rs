pub mod client;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod query;
pub mod series;
pub mod shape;
pub mod types;

pub use client::TrendsClient;
pub use error::TrendsError;
pub use fetch::{fetch_and_shape, FetchError};
pub use pipeline::{run_query, QueryOutcome, QueryState};
pub use query::TrendQuery;
pub use series::{ScoreColumn, TrendSeries};
pub use shape::{
    display_offset, shape, ChartPoint, ChartSeries, DisplayRow, DisplayTable, KeywordScore,
    ScoreSummary, ShapedTrends, TrendReport,
};
