//! Plain-text page renderer.

use crate::error::Result;
use sheetdigest_engine::layout::Page;
use std::fs;
use std::path::Path;

/// Separator written between pages (form feed).
pub const PAGE_BREAK: char = '\u{000C}';

/// Write pages to a text file
pub fn write_text(path: &Path, pages: &[Page]) -> Result<()> {
    fs::write(path, render_text(pages))?;
    Ok(())
}

/// Render pages as text: one row per line, a form feed between pages.
pub fn render_text(pages: &[Page]) -> String {
    let mut out = String::new();
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            out.push(PAGE_BREAK);
            out.push('\n');
        }
        for line in &page.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetdigest_engine::layout::{FontRole, TextLine};

    fn page(texts: &[&str]) -> Page {
        Page {
            lines: texts
                .iter()
                .enumerate()
                .map(|(i, t)| TextLine {
                    text: t.to_string(),
                    x: 10.0,
                    y: 10.0 + i as f32 * 7.0,
                    font_size: 12.0,
                    role: FontRole::Body,
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_page() {
        assert_eq!(render_text(&[page(&["a", "b"])]), "a\nb\n");
    }

    #[test]
    fn test_pages_are_separated_by_form_feed() {
        let out = render_text(&[page(&["a"]), page(&["b"])]);
        assert_eq!(out, "a\n\u{000C}\nb\n");
        assert_eq!(out.matches(PAGE_BREAK).count(), 1);
    }

    #[test]
    fn test_no_pages() {
        assert_eq!(render_text(&[]), "");
    }
}
