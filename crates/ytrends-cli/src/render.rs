//! Terminal rendering for query outcomes.
//!
//! Everything writes to a caller-supplied `Write` so output can be captured
//! in tests.

use std::io::{self, Write};

use serde_json::json;
use ytrends_provider::{
    ChartSeries, DisplayTable, FetchError, QueryOutcome, ScoreSummary, TrendReport,
};

const SPARK_LEVELS: [char; 8] = [
    '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}',
];

/// Widest sparkline drawn; longer series are averaged down to this.
const CHART_WIDTH: usize = 60;

/// Chart and table time label format, matching the data table index.
const TIME_LABEL_FORMAT: &str = "%d-%m %H:%M";

/// Printed before a query is sent.
pub(crate) fn usage_notice(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "note: the provider limits request volume. Wait about 1 minute between queries, \
         or it will block this address for a while."
    )
}

/// Renders any terminal query outcome as text.
pub(crate) fn outcome(out: &mut impl Write, outcome: &QueryOutcome) -> io::Result<()> {
    match outcome {
        QueryOutcome::Succeeded(report) => {
            self::report(out, report)?;
            writeln!(out)?;
            writeln!(out, "ok: data retrieved.")?;
            writeln!(
                out,
                "note: wait at least 1 minute before the next query so the address is not blocked."
            )
        }
        QueryOutcome::Empty => writeln!(
            out,
            "no data: the keywords may be too specific or rarely searched in this window."
        ),
        QueryOutcome::Rejected(err) => writeln!(out, "error: {err}"),
        QueryOutcome::RateLimited => {
            writeln!(out, "error: TOO MANY REQUESTS")?;
            writeln!(out, "{}", FetchError::RateLimited)
        }
        QueryOutcome::ProviderError(message) => writeln!(out, "error: {message}"),
    }
}

fn report(out: &mut impl Write, report: &TrendReport) -> io::Result<()> {
    writeln!(out, "== Interest over the last 24 hours ==")?;
    chart(out, &report.chart)?;
    writeln!(out)?;
    writeln!(out, "== Popularity score (0-100) ==")?;
    summary(out, &report.summary)?;
    writeln!(out)?;
    writeln!(out, "== Data table ==")?;
    table(out, &report.table)
}

fn chart(out: &mut impl Write, chart: &ChartSeries) -> io::Result<()> {
    let width = label_width(&chart.keywords);
    for (i, keyword) in chart.keywords.iter().enumerate() {
        let values: Vec<f64> = chart.column(i).collect();
        writeln!(
            out,
            "{:<width$}  {}",
            display_keyword(keyword),
            sparkline(&downsample(&values, CHART_WIDTH))
        )?;
    }
    if let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) {
        writeln!(
            out,
            "{:<width$}  {} .. {}",
            "",
            first.timestamp.format(TIME_LABEL_FORMAT),
            last.timestamp.format(TIME_LABEL_FORMAT)
        )?;
    }
    Ok(())
}

fn summary(out: &mut impl Write, summary: &ScoreSummary) -> io::Result<()> {
    let keywords: Vec<String> = summary.iter().map(|s| s.keyword.clone()).collect();
    let width = label_width(&keywords).max("KEYWORD".len());
    writeln!(out, "{:<4}{:<width$}  SCORE", "#", "KEYWORD")?;
    for (rank, entry) in summary.iter().enumerate() {
        writeln!(
            out,
            "{:<4}{:<width$}  {:.1}",
            rank + 1,
            display_keyword(&entry.keyword),
            entry.mean
        )?;
    }
    Ok(())
}

fn table(out: &mut impl Write, table: &DisplayTable) -> io::Result<()> {
    let widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| display_keyword(c).chars().count().max(5))
        .collect();

    write!(out, "{:<13}", "TIME")?;
    for (column, width) in table.columns.iter().zip(&widths) {
        write!(out, "{:>width$} ", display_keyword(column))?;
    }
    writeln!(out)?;

    for row in &table.rows {
        write!(out, "{:<13}", row.label)?;
        for (score, width) in row.scores.iter().zip(&widths) {
            write!(out, "{score:>width$} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// JSON form of an outcome for `--json`.
pub(crate) fn outcome_json(outcome: &QueryOutcome) -> serde_json::Value {
    match outcome {
        QueryOutcome::Rejected(err) => json!({ "outcome": "rejected", "message": err.to_string() }),
        QueryOutcome::Succeeded(report) => json!({ "outcome": "succeeded", "report": report }),
        QueryOutcome::Empty => json!({ "outcome": "empty" }),
        QueryOutcome::RateLimited => json!({
            "outcome": "rate_limited",
            "message": FetchError::RateLimited.to_string(),
        }),
        QueryOutcome::ProviderError(message) => {
            json!({ "outcome": "provider_error", "message": message })
        }
    }
}

/// Maps 0-100 scores onto eight block heights.
pub(crate) fn sparkline(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            let level = ((v.clamp(0.0, 100.0) / 100.0) * 7.0).round() as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// Averages `values` into at most `width` evenly sized buckets.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    let chunk = values.len().div_ceil(width);
    values
        .chunks(chunk)
        .map(|c| c.iter().sum::<f64>() / c.len() as f64)
        .collect()
}

fn display_keyword(keyword: &str) -> &str {
    if keyword.is_empty() {
        "(blank)"
    } else {
        keyword
    }
}

fn label_width(keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|k| display_keyword(k).chars().count())
        .max()
        .unwrap_or(0)
}
