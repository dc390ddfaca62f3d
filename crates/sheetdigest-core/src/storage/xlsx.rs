//! Workbook import (xlsx, xlsm, xls, ods) through calamine.

use crate::error::{DigestError, Result};
use calamine::{Data, Reader, open_workbook_auto};
use sheetdigest_engine::model::{CellValue, RawRow, SheetModel};
use std::path::Path;

/// Parse every worksheet of a workbook, in workbook order.
pub fn parse_workbook(path: &Path) -> Result<Vec<SheetModel>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| DigestError::Workbook(e.to_string()))?;

    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());

    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| DigestError::Workbook(format!("{}: {}", name, e)))?;
        let rows: Vec<&[Data]> = range.rows().collect();
        sheets.push(sheet_from_rows(&name, &rows));
    }

    log::debug!("{}: read {} worksheet(s)", path.display(), sheets.len());
    Ok(sheets)
}

/// Build a sheet from grid rows; the first row holds the column names.
pub(crate) fn sheet_from_rows(name: &str, rows: &[&[Data]]) -> SheetModel {
    let Some((header, body)) = rows.split_first() else {
        return SheetModel::from_raw_rows(name, Vec::new());
    };

    let headers: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect();

    let overflow: usize = body
        .iter()
        .map(|row| {
            row.iter()
                .skip(headers.len())
                .filter(|cell| !matches!(cell, Data::Empty))
                .count()
        })
        .sum();
    if overflow > 0 {
        log::warn!(
            "{}: dropped {} cell(s) beyond the {} header column(s)",
            name,
            overflow,
            headers.len()
        );
    }

    let raw: Vec<RawRow> = body
        .iter()
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(idx, h)| {
                    let value = row.get(idx).map(data_to_value).unwrap_or(CellValue::Empty);
                    (h.clone(), value)
                })
                .collect()
        })
        .collect();

    SheetModel::from_raw_rows(name, raw)
}

fn header_name(idx: usize, cell: &Data) -> String {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    };
    if text.is_empty() {
        format!("Column {}", idx + 1)
    } else {
        text
    }
}

/// Map a calamine cell onto the engine's cell types.
pub(crate) fn data_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::new_text(s),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Serial date number, like the spreadsheet stores it.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::new_text(s),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}
