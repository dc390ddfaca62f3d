//! sheetdigest_engine - Sheet analysis and report pagination.
//!
//! Data flows one way through the modules:
//!
//! - [`model`]: decoded rows → [`SheetModel`]
//! - [`analyze`]: [`SheetModel`] → column statistics and trends
//! - [`takeaway`]: statistics → short highlight sentences
//! - [`assemble`]: all of the above → one [`ReportSection`] per sheet
//! - [`layout`]: sections → fixed-height [`Page`]s
//!
//! Every stage is a pure function of its input; nothing is shared between sheets
//! or between calls.

pub mod analyze;
pub mod assemble;
pub mod format;
pub mod layout;
pub mod model;
pub mod summary;
pub mod takeaway;
pub mod wrap;

pub use analyze::{Analysis, ColumnStats, Trend, TrendDirection, analyze};
pub use assemble::{Overview, ReportSection, assemble, assemble_all, build_section};
pub use layout::{FontRole, FontSpec, LayoutPolicy, LayoutState, Page, PageLayoutEngine, TextLine};
pub use model::{CellValue, RawRow, SheetModel};
pub use summary::{DEFAULT_SUMMARY_SENTENCES, summarize_text};

/// Run the whole pipeline: sheets in, pages out.
pub fn report_pages(sheets: Vec<SheetModel>, policy: &LayoutPolicy) -> Vec<Page> {
    let sections = assemble_all(sheets);
    PageLayoutEngine::new(policy.clone()).layout(&sections)
}
