//! Per-sheet report sections, independent of any output format.

use crate::analyze::{Analysis, ColumnStats, Trend, analyze};
use crate::model::SheetModel;
use crate::takeaway;

/// Row and column counts of a sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub row_count: usize,
    pub col_count: usize,
}

/// Everything the report says about one sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportSection {
    pub sheet_name: String,
    pub overview: Overview,
    pub stats: Vec<ColumnStats>,
    pub trends: Vec<Trend>,
    pub takeaways: Vec<String>,
}

/// Combine a sheet and its analysis into a section. No computation happens here.
pub fn assemble(sheet: SheetModel, analysis: Analysis, takeaways: Vec<String>) -> ReportSection {
    let overview = Overview {
        row_count: sheet.row_count(),
        col_count: sheet.col_count(),
    };
    let Analysis { stats, trends } = analysis;

    ReportSection {
        sheet_name: sheet.name().to_string(),
        overview,
        stats,
        trends,
        takeaways,
    }
}

/// Run analysis, takeaway generation and assembly for a single sheet.
pub fn build_section(sheet: SheetModel) -> ReportSection {
    let analysis = analyze(&sheet);
    let takeaways = takeaway::generate(&analysis.stats);
    assemble(sheet, analysis, takeaways)
}

/// One section per sheet, in input order. Sheets are processed independently.
pub fn assemble_all(sheets: Vec<SheetModel>) -> Vec<ReportSection> {
    sheets.into_iter().map(build_section).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, RawRow};

    fn numeric_sheet(name: &str, columns: &[&str], rows: &[&[f64]]) -> SheetModel {
        let raw: Vec<RawRow> = rows
            .iter()
            .map(|values| {
                columns
                    .iter()
                    .zip(values.iter())
                    .map(|(c, v)| (c.to_string(), CellValue::Number(*v)))
                    .collect()
            })
            .collect();
        SheetModel::from_raw_rows(name, raw)
    }

    #[test]
    fn test_empty_sheet_section() {
        let section = build_section(SheetModel::from_raw_rows("Blank", Vec::new()));
        assert_eq!(section.sheet_name, "Blank");
        assert_eq!(
            section.overview,
            Overview {
                row_count: 0,
                col_count: 0
            }
        );
        assert!(section.stats.is_empty());
        assert!(section.trends.is_empty());
        assert!(section.takeaways.is_empty());
    }

    #[test]
    fn test_text_only_sheet_keeps_overview() {
        let raw: Vec<RawRow> = vec![
            vec![("Name".to_string(), CellValue::new_text("x"))],
            vec![("Name".to_string(), CellValue::new_text("y"))],
        ];
        let section = build_section(SheetModel::from_raw_rows("Names", raw));
        assert_eq!(section.overview.row_count, 2);
        assert_eq!(section.overview.col_count, 1);
        assert!(section.stats.is_empty());
        assert!(section.takeaways.is_empty());
    }

    #[test]
    fn test_section_contents() {
        let sheet = numeric_sheet("Q1", &["Units", "Price"], &[&[1.0, 9.0], &[2.0, 8.0], &[3.0, 7.0]]);
        let section = build_section(sheet);
        assert_eq!(section.overview.row_count, 3);
        assert_eq!(section.overview.col_count, 2);
        assert_eq!(section.stats.len(), 2);
        assert_eq!(section.trends.len(), 2);
        assert_eq!(section.takeaways.len(), 2);
        assert_eq!(section.takeaways[0], "The average Units is 2.00.");
    }

    #[test]
    fn test_assemble_all_preserves_order() {
        let sheets = vec![
            numeric_sheet("First", &["A"], &[&[1.0]]),
            SheetModel::from_raw_rows("Second", Vec::new()),
            numeric_sheet("Third", &["B"], &[&[2.0]]),
        ];
        let names: Vec<_> = assemble_all(sheets)
            .into_iter()
            .map(|s| s.sheet_name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_assemble_all_empty_input() {
        assert!(assemble_all(Vec::new()).is_empty());
    }
}
