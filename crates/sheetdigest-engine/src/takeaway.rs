//! Templated highlight sentences derived from column statistics.

use crate::analyze::ColumnStats;
use crate::format::format_avg;

/// Upper bound on takeaways per sheet.
pub const MAX_TAKEAWAYS: usize = 3;

/// One takeaway per statistics entry, for the first [`MAX_TAKEAWAYS`] entries.
///
/// Entries are taken in the order the analyzer emitted them (sheet-column
/// order); no ranking is applied.
pub fn generate(stats: &[ColumnStats]) -> Vec<String> {
    stats.iter().take(MAX_TAKEAWAYS).map(takeaway_for).collect()
}

/// The takeaway sentence for a single column.
pub fn takeaway_for(stats: &ColumnStats) -> String {
    format!("The average {} is {}.", stats.column, format_avg(stats.avg))
}
