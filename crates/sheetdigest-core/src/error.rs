//! Error types for Sheetdigest core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding input or writing a report
#[derive(Error, Debug)]
pub enum DigestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, DigestError>;
