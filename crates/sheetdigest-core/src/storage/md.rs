//! Markdown export of laid-out pages

use crate::error::Result;
use sheetdigest_engine::layout::{FontRole, Page, TextLine};
use std::io::Write;
use std::path::Path;

/// Write pages to a markdown file
pub fn write_markdown(path: &Path, pages: &[Page]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(render_markdown(pages).as_bytes())?;
    Ok(())
}

/// Render pages as markdown, one `## Page N` block per page.
///
/// Line roles map to structure: title `#`, heading `###`, subheading `####`,
/// body lines are plain text.
pub fn render_markdown(pages: &[Page]) -> String {
    let mut out = String::new();
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("## Page {}\n\n", idx + 1));
        for line in &page.lines {
            out.push_str(&markdown_line(line));
            out.push('\n');
        }
    }
    out
}

fn markdown_line(line: &TextLine) -> String {
    let text = escape_markdown(&line.text);
    match line.role {
        FontRole::Title => format!("# {}", text),
        FontRole::Heading => format!("### {}", text),
        FontRole::Subheading => format!("#### {}", text),
        // Trailing double space forces a line break inside a paragraph.
        FontRole::Body => format!("{}  ", text),
    }
}

/// Escape special markdown characters in line content
fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (idx, ch) in s.chars().enumerate() {
        match ch {
            '\\' | '`' | '*' | '_' | '|' | '#' | '[' | ']' | '<' | '>' => {
                out.push('\\');
                out.push(ch);
            }
            // Leading "- " is our bullet marker; keep it as a list item.
            '-' if idx == 0 && !s.starts_with("- ") => out.push_str("\\-"),
            _ => out.push(ch),
        }
    }
    out
}
