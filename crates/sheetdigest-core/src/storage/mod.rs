//! Storage module: decoders that produce sheets, renderers that consume pages

mod csv;
#[cfg(any(feature = "pdf", feature = "docx"))]
mod extract;
mod md;
mod text;
#[cfg(feature = "xlsx")]
mod xlsx;

pub use csv::{parse_csv, parse_csv_str};
#[cfg(feature = "docx")]
pub use extract::extract_docx_text;
#[cfg(feature = "pdf")]
pub use extract::extract_pdf_text;
pub use md::{render_markdown, write_markdown};
pub use text::{PAGE_BREAK, render_text, write_text};
#[cfg(feature = "xlsx")]
pub use xlsx::parse_workbook;
