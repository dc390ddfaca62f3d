//! CSV import: one file becomes one sheet.

use crate::error::{DigestError, Result};
use sheetdigest_engine::model::{CellValue, RawRow, SheetModel};
use std::path::Path;

/// Parse a CSV file into a sheet named after the file stem.
pub fn parse_csv(path: &Path) -> Result<SheetModel> {
    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());
    parse_csv_str(&name, &content)
}

/// Parse CSV content. The first line holds the column names.
///
/// Every later line is a row, blank lines included. Fields past the header
/// width are dropped.
pub fn parse_csv_str(name: &str, content: &str) -> Result<SheetModel> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().enumerate();

    let headers = match lines.next() {
        Some((line_idx, line)) => parse_csv_line(line)
            .ok_or_else(|| unterminated_quote(line_idx))?,
        None => return Ok(SheetModel::from_raw_rows(name, Vec::new())),
    };

    let mut rows: Vec<RawRow> = Vec::new();
    let mut overflow = 0usize;
    for (line_idx, line) in lines {
        let fields = parse_csv_line(line).ok_or_else(|| unterminated_quote(line_idx))?;
        if fields.len() > headers.len() && !(fields.len() == 1 && fields[0].is_empty()) {
            overflow += fields.len() - headers.len();
        }

        let mut fields = fields.into_iter();
        let row: RawRow = headers
            .iter()
            .map(|header| {
                let cell = fields
                    .next()
                    .map(|f| parse_csv_field(&f))
                    .unwrap_or(CellValue::Empty);
                (header.clone(), cell)
            })
            .collect();
        rows.push(row);
    }

    if overflow > 0 {
        log::warn!(
            "{}: dropped {} field(s) beyond the {} header column(s)",
            name,
            overflow,
            headers.len()
        );
    }
    log::debug!("{}: parsed {} row(s) from CSV", name, rows.len());

    Ok(SheetModel::from_raw_rows(name, rows))
}

fn unterminated_quote(line_idx: usize) -> DigestError {
    DigestError::Parse {
        line: line_idx + 1,
        message: "unterminated quoted field".to_string(),
    }
}

/// Parse a single CSV line, handling quoted fields.
///
/// Returns `None` if a quoted field is not closed on the same line.
pub(crate) fn parse_csv_line(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => {
                    fields.push(finish_field(std::mem::take(&mut current), field_was_quoted));
                    field_was_quoted = false;
                }
                _ => current.push(c),
            }
        }
    }
    if in_quotes {
        return None;
    }
    fields.push(finish_field(current, field_was_quoted));
    Some(fields)
}

fn finish_field(field: String, quoted: bool) -> String {
    if quoted {
        field
    } else {
        field.trim().to_string()
    }
}

/// Decode a CSV field into a typed cell
/// - Empty string -> Empty
/// - Valid number -> Number (unless it has leading zeros like "007")
/// - TRUE / FALSE (any case) -> Bool
/// - Otherwise -> Text
pub(crate) fn parse_csv_field(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }

    // Keep explicit surrounding whitespace (typically from quoted CSV fields).
    let trimmed = field.trim();
    if field != trimmed {
        return CellValue::new_text(field);
    }

    // Preserve strings that look like numbers but have leading zeros (e.g., "007", "00123")
    // unless they're just "0" or start with "0."
    if trimmed.starts_with('0')
        && trimmed.len() > 1
        && !trimmed.starts_with("0.")
        && trimmed.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
    {
        return CellValue::new_text(trimmed);
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return CellValue::Number(n);
        }
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    CellValue::new_text(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("a,b,c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        assert_eq!(
            parse_csv_line("\"hello, world\",b").unwrap(),
            vec!["hello, world", "b"]
        );
    }

    #[test]
    fn test_parse_csv_line_escaped_quote() {
        assert_eq!(
            parse_csv_line("\"say \"\"hi\"\"\",b").unwrap(),
            vec!["say \"hi\"", "b"]
        );
    }

    #[test]
    fn test_parse_csv_line_unterminated() {
        assert!(parse_csv_line("\"open,b").is_none());
    }

    #[test]
    fn test_parse_csv_field_types() {
        assert_eq!(parse_csv_field(""), CellValue::Empty);
        assert_eq!(parse_csv_field("42"), CellValue::Number(42.0));
        assert_eq!(parse_csv_field("-1.5"), CellValue::Number(-1.5));
        assert_eq!(parse_csv_field("007"), CellValue::new_text("007"));
        assert_eq!(parse_csv_field("0.5"), CellValue::Number(0.5));
        assert_eq!(parse_csv_field("TRUE"), CellValue::Bool(true));
        assert_eq!(parse_csv_field("false"), CellValue::Bool(false));
        assert_eq!(parse_csv_field("NaN"), CellValue::new_text("NaN"));
        assert_eq!(parse_csv_field("  padded  "), CellValue::new_text("  padded  "));
        assert_eq!(parse_csv_field("hello"), CellValue::new_text("hello"));
    }

    #[test]
    fn test_parse_csv_str_header_and_rows() {
        let sheet = parse_csv_str("sales", "Month,Units\nJan,10\nFeb,7\n").unwrap();
        assert_eq!(sheet.name(), "sales");
        assert_eq!(sheet.columns(), &["Month".to_string(), "Units".to_string()]);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.get(1, "Units"), Some(&CellValue::Number(7.0)));
    }

    #[test]
    fn test_blank_lines_become_empty_rows() {
        let sheet = parse_csv_str("s", "A,B\n1,2\n\n3,4").unwrap();
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.get(1, "A"), Some(&CellValue::Empty));
        assert_eq!(sheet.get(1, "B"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let sheet = parse_csv_str("s", "A,B,C\n1").unwrap();
        assert_eq!(sheet.get(0, "C"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let sheet = parse_csv_str("s", "A\n1,2,3").unwrap();
        assert_eq!(sheet.col_count(), 1);
        assert_eq!(sheet.get(0, "A"), Some(&CellValue::Number(1.0)));
    }

    #[test]
    fn test_header_only_has_no_rows() {
        let sheet = parse_csv_str("s", "A,B\n").unwrap();
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.col_count(), 0);
    }

    #[test]
    fn test_empty_file() {
        let sheet = parse_csv_str("s", "").unwrap();
        assert_eq!(sheet.row_count(), 0);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let sheet = parse_csv_str("s", "\u{feff}A\n1").unwrap();
        assert_eq!(sheet.columns(), &["A".to_string()]);
    }

    #[test]
    fn test_unterminated_quote_reports_line() {
        match parse_csv_str("s", "A\n1\n\"oops") {
            Err(DigestError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
