//! Text extraction from PDF and Word documents.
//!
//! Both decoders return plain text with whitespace collapsed to single
//! spaces between lines, ready for the sentence summarizer.

use crate::error::{DigestError, Result};
use std::path::Path;

/// Extract the text of every page of a PDF file.
#[cfg(feature = "pdf")]
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = extract_pdf_bytes(&bytes)
        .map_err(|message| DigestError::Document(format!("{}: {}", path.display(), message)))?;
    log::debug!("{}: extracted {} char(s) from PDF", path.display(), text.len());
    Ok(text)
}

#[cfg(feature = "pdf")]
pub(crate) fn extract_pdf_bytes(bytes: &[u8]) -> std::result::Result<String, String> {
    // pdf-extract can panic on malformed fonts; report that as a failed extraction.
    let extracted = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));
    match extracted {
        Ok(Ok(text)) => Ok(clean_text(&text)),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("PDF extraction panicked on malformed content".to_string()),
    }
}

/// Extract the body text of a Word (.docx) document.
#[cfg(feature = "docx")]
pub fn extract_docx_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = extract_docx_bytes(&bytes)
        .map_err(|message| DigestError::Document(format!("{}: {}", path.display(), message)))?;
    log::debug!("{}: extracted {} char(s) from DOCX", path.display(), text.len());
    Ok(text)
}

#[cfg(feature = "docx")]
pub(crate) fn extract_docx_bytes(bytes: &[u8]) -> std::result::Result<String, String> {
    let doc = docx_rs::read_docx(bytes).map_err(|e| e.to_string())?;

    let mut raw = String::new();
    for child in &doc.document.children {
        push_docx_child(child, &mut raw);
    }
    Ok(clean_text(&raw))
}

/// Append the text of a paragraph or table, one line per paragraph or row.
#[cfg(feature = "docx")]
fn push_docx_child(element: &docx_rs::DocumentChild, out: &mut String) {
    match element {
        docx_rs::DocumentChild::Paragraph(para) => {
            push_paragraph(&para.children, out);
            out.push('\n');
        }
        docx_rs::DocumentChild::Table(table) => {
            for row in &table.rows {
                let docx_rs::TableChild::TableRow(tr) = row;
                for cell in &tr.cells {
                    let docx_rs::TableRowChild::TableCell(tc) = cell;
                    for content in &tc.children {
                        if let docx_rs::TableCellContent::Paragraph(para) = content {
                            push_paragraph(&para.children, out);
                            out.push(' ');
                        }
                    }
                }
                out.push('\n');
            }
        }
        _ => {}
    }
}

#[cfg(feature = "docx")]
fn push_paragraph(children: &[docx_rs::ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run(run, out),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = inner {
                        push_run(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(feature = "docx")]
fn push_run(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        if let docx_rs::RunChild::Text(text) = child {
            out.push_str(&text.text);
        }
    }
}

/// Trim every line, drop blank ones and join the rest with single spaces.
fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
