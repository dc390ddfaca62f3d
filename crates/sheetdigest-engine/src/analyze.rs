//! Per-column statistics and trend detection.
//!
//! Only cells whose decoded type is a number take part. A column without any
//! numeric cell is left out of both the statistics and the trends.

use crate::format::round_half_up;
use crate::model::SheetModel;

/// Minimum number of numeric cells a column needs before a trend is reported.
pub const MIN_TREND_POINTS: usize = 3;

/// Descriptive statistics for one column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    pub max: f64,
    pub min: f64,
    /// Arithmetic mean rounded half away from zero to 2 decimals.
    pub avg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
        }
    }
}

/// Coarse direction of a column, from its first and last numeric value.
#[derive(Clone, Debug, PartialEq)]
pub struct Trend {
    pub column: String,
    pub direction: TrendDirection,
}

/// Analyzer output for one sheet, both lists in sheet-column order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analysis {
    pub stats: Vec<ColumnStats>,
    pub trends: Vec<Trend>,
}

/// Analyze every column of a sheet in declared column order.
pub fn analyze(sheet: &SheetModel) -> Analysis {
    let mut analysis = Analysis::default();

    for (col, name) in sheet.columns().iter().enumerate() {
        let values: Vec<f64> = sheet
            .column_values(col)
            .filter_map(|cell| cell.as_number())
            .collect();

        if let Some(stats) = column_stats(name, &values) {
            analysis.stats.push(stats);
        }
        if let Some(trend) = detect_trend(name, &values) {
            analysis.trends.push(trend);
        }
    }

    log::debug!(
        "sheet '{}': {} numeric column(s), {} trend(s)",
        sheet.name(),
        analysis.stats.len(),
        analysis.trends.len()
    );

    analysis
}

/// Compute max/min/avg over a column's numeric values.
///
/// Returns `None` for an empty slice.
pub fn column_stats(column: &str, values: &[f64]) -> Option<ColumnStats> {
    let (&first, rest) = values.split_first()?;

    let (min, max, sum) = rest
        .iter()
        .fold((first, first, first), |(min, max, sum), &v| {
            (min.min(v), max.max(v), sum + v)
        });

    let mut mean = sum / values.len() as f64;
    if !mean.is_finite() {
        mean = running_mean(values);
    }

    Some(ColumnStats {
        column: column.to_string(),
        max,
        min,
        avg: round_half_up(mean, 2),
    })
}

/// Incremental mean that stays within `[min, max]` when the plain sum would
/// overflow.
fn running_mean(values: &[f64]) -> f64 {
    let mut mean = 0.0;
    for (idx, &v) in values.iter().enumerate() {
        let k = (idx + 1) as f64;
        mean += v / k - mean / k;
    }
    mean
}

/// Classify a column by comparing its first and last numeric value.
///
/// Needs at least [`MIN_TREND_POINTS`] values. Ties count as decreasing.
pub fn detect_trend(column: &str, values: &[f64]) -> Option<Trend> {
    if values.len() < MIN_TREND_POINTS {
        return None;
    }
    let first = values.first()?;
    let last = values.last()?;

    let direction = if first < last {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };

    Some(Trend {
        column: column.to_string(),
        direction,
    })
}
