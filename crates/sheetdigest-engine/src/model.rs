//! Sheet data structures.
//!
//! This module provides the normalized representation of one decoded sheet:
//! - [`CellValue`] - The decoded type of a single cell (empty, text, number, or boolean)
//! - [`RawRow`] - One row as handed over by a decoder (column name, value) pairs
//! - [`SheetModel`] - Rows aligned to an explicit, ordered list of column names

use std::collections::{HashMap, HashSet};

/// The decoded value stored in a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn new_text(text: &str) -> CellValue {
        CellValue::Text(text.to_string())
    }

    /// The numeric value of the cell, if its decoded type is a number.
    ///
    /// Numeric-looking text is not a number. Non-finite floats are treated as
    /// non-numeric so they can never leak into statistics.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

/// One decoded row: (column name, value) pairs in the order the decoder wrote them.
pub type RawRow = Vec<(String, CellValue)>;

/// A single sheet: rows of named columns.
///
/// The column list is captured once, from the first row, and every row holds
/// exactly one value per column (missing cells are [`CellValue::Empty`]).
#[derive(Clone, Debug, PartialEq)]
pub struct SheetModel {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetModel {
    /// Build a sheet from decoded rows.
    ///
    /// The keys of the first row become the canonical columns. Keys that only
    /// appear in later rows are ignored. A repeated name in the first row is
    /// disambiguated by position: the second `Total` becomes `Total (2)`, and in
    /// every row the k-th `Total` key fills the k-th `Total` column.
    pub fn from_raw_rows(name: &str, raw_rows: Vec<RawRow>) -> SheetModel {
        let (columns, slots) = match raw_rows.first() {
            Some(first) => resolve_columns(first),
            None => (Vec::new(), HashMap::new()),
        };

        let mut dropped_keys = 0usize;
        let rows: Vec<Vec<CellValue>> = raw_rows
            .into_iter()
            .map(|raw| {
                let mut row = vec![CellValue::Empty; columns.len()];
                let mut seen: HashMap<String, usize> = HashMap::new();
                for (key, value) in raw {
                    let occurrence = seen.entry(key.clone()).or_insert(0);
                    *occurrence += 1;
                    match slots.get(&(key, *occurrence)) {
                        Some(&idx) => row[idx] = value,
                        None => dropped_keys += 1,
                    }
                }
                row
            })
            .collect();

        if dropped_keys > 0 {
            log::warn!(
                "sheet '{}': ignored {} cell(s) whose column is not in the first row",
                name,
                dropped_keys
            );
        }

        SheetModel {
            name: name.to_string(),
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Values of one column, in row order.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(col))
    }

    /// Look up a cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Resolve the first row's keys into unique column names plus a lookup from
/// (key, occurrence) to column index.
fn resolve_columns(first: &RawRow) -> (Vec<String>, HashMap<(String, usize), usize>) {
    let mut columns = Vec::with_capacity(first.len());
    let mut used: HashSet<String> = HashSet::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut slots = HashMap::new();

    for (idx, (key, _)) in first.iter().enumerate() {
        let occurrence = seen.entry(key.as_str()).or_insert(0);
        *occurrence += 1;

        let mut name = key.clone();
        let mut suffix = *occurrence;
        while suffix > 1 || used.contains(&name) {
            if suffix < 2 {
                suffix = 2;
            }
            name = format!("{} ({})", key, suffix);
            if !used.contains(&name) {
                break;
            }
            suffix += 1;
        }

        used.insert(name.clone());
        columns.push(name);
        slots.insert((key.clone(), *occurrence), idx);
    }

    (columns, slots)
}
