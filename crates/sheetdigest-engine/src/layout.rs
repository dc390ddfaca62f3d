//! Page layout for report sections.
//!
//! This module provides:
//! - [`LayoutPolicy`]: page geometry and font metrics (deserializable from config)
//! - [`PageLayoutEngine`]: walks [`ReportSection`]s and emits fixed-height [`Page`]s
//! - [`Page`] / [`TextLine`]: positioned text, ready for a renderer
//!
//! Pagination is "soft": no text is measured. Every line has a fixed height per
//! font role, and a new page starts whenever the next line would cross the
//! policy's bottom threshold.

use serde::Deserialize;

use crate::assemble::ReportSection;
use crate::format::{format_avg, format_number};
use crate::wrap::wrap_text;

/// Title written at the top of every tabular report.
pub const REPORT_TITLE: &str = "Data Report";

/// Size and advance of one font role.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    pub size: f32,
    pub line_height: f32,
}

impl FontSpec {
    pub const fn new(size: f32, line_height: f32) -> Self {
        FontSpec { size, line_height }
    }
}

/// Font roles used by the layout engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Heading,
    Subheading,
    Body,
}

/// Page geometry and font metrics. All lengths share one unit (e.g. mm).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutPolicy {
    pub page_height: f32,
    /// A line whose bottom would pass this offset goes to the next page.
    pub bottom_threshold: f32,
    pub top_margin: f32,
    pub left_margin: f32,
    pub content_width: f32,
    /// Average character advance as a fraction of the font size.
    pub glyph_width: f32,
    /// Extra left offset for body lines under a heading.
    pub indent: f32,
    /// Vertical gap between consecutive sheets.
    pub section_gap: f32,
    pub title: FontSpec,
    pub heading: FontSpec,
    pub subheading: FontSpec,
    pub body: FontSpec,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        LayoutPolicy {
            page_height: 280.0,
            bottom_threshold: 260.0,
            top_margin: 10.0,
            left_margin: 10.0,
            content_width: 180.0,
            glyph_width: 0.18,
            indent: 5.0,
            section_gap: 10.0,
            title: FontSpec::new(18.0, 12.0),
            heading: FontSpec::new(16.0, 10.0),
            subheading: FontSpec::new(14.0, 8.0),
            body: FontSpec::new(12.0, 7.0),
        }
    }
}

impl LayoutPolicy {
    pub fn font(&self, role: FontRole) -> FontSpec {
        match role {
            FontRole::Title => self.title,
            FontRole::Heading => self.heading,
            FontRole::Subheading => self.subheading,
            FontRole::Body => self.body,
        }
    }

    /// Number of characters that fit in `width` units at the given font.
    pub fn wrap_columns(&self, role: FontRole, width: f32) -> usize {
        let advance = self.glyph_width * self.font(role).size;
        if advance <= 0.0 {
            return 1;
        }
        ((width / advance).floor() as usize).max(1)
    }

    /// Validate that the policy describes a usable page.
    ///
    /// Returns `Ok(())` if valid, or an error message describing the problem.
    pub fn validate(&self) -> Result<(), String> {
        let lengths = [
            ("page_height", self.page_height),
            ("bottom_threshold", self.bottom_threshold),
            ("content_width", self.content_width),
            ("glyph_width", self.glyph_width),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }

        let offsets = [
            ("top_margin", self.top_margin),
            ("left_margin", self.left_margin),
            ("indent", self.indent),
            ("section_gap", self.section_gap),
        ];
        for (name, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must not be negative, got {}", name, value));
            }
        }

        let fonts = [
            ("title", self.title),
            ("heading", self.heading),
            ("subheading", self.subheading),
            ("body", self.body),
        ];
        for (name, font) in fonts {
            if !(font.size.is_finite() && font.size > 0.0) {
                return Err(format!("{}.size must be positive, got {}", name, font.size));
            }
            if !(font.line_height.is_finite() && font.line_height > 0.0) {
                return Err(format!(
                    "{}.line_height must be positive, got {}",
                    name, font.line_height
                ));
            }
        }

        if self.bottom_threshold > self.page_height {
            return Err(format!(
                "bottom_threshold ({}) exceeds page_height ({})",
                self.bottom_threshold, self.page_height
            ));
        }
        if self.top_margin >= self.bottom_threshold {
            return Err(format!(
                "top_margin ({}) leaves no room above bottom_threshold ({})",
                self.top_margin, self.bottom_threshold
            ));
        }
        if self.content_width < self.glyph_width * self.body.size {
            return Err(format!(
                "content_width ({}) is narrower than one body character",
                self.content_width
            ));
        }
        Ok(())
    }
}

/// A positioned line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    /// Structural role the line was written with.
    pub role: FontRole,
}

/// One physical output page, lines in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Per-section writing states, always traversed in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutState {
    Idle,
    WritingOverview,
    WritingStats,
    WritingTrends,
    WritingTakeaways,
    Done,
}

impl LayoutState {
    pub fn next(self) -> LayoutState {
        match self {
            LayoutState::Idle => LayoutState::WritingOverview,
            LayoutState::WritingOverview => LayoutState::WritingStats,
            LayoutState::WritingStats => LayoutState::WritingTrends,
            LayoutState::WritingTrends => LayoutState::WritingTakeaways,
            LayoutState::WritingTakeaways | LayoutState::Done => LayoutState::Done,
        }
    }
}

/// Lays out report content on pages according to a [`LayoutPolicy`].
///
/// The engine keeps no state between calls.
#[derive(Clone, Debug, Default)]
pub struct PageLayoutEngine {
    policy: LayoutPolicy,
}

impl PageLayoutEngine {
    pub fn new(policy: LayoutPolicy) -> Self {
        PageLayoutEngine { policy }
    }

    /// Lay out a tabular report: the report title, then each section in order.
    ///
    /// Sections share pages; consecutive sheets are only separated by the
    /// policy's section gap. Always returns at least one page.
    pub fn layout(&self, sections: &[ReportSection]) -> Vec<Page> {
        let mut cursor = Cursor::new(&self.policy);
        cursor.write(REPORT_TITLE, FontRole::Title, 0.0);

        for section in sections {
            cursor.gap(self.policy.section_gap);
            let mut state = LayoutState::Idle;
            while state != LayoutState::Done {
                self.write_state(&mut cursor, state, section);
                state = state.next();
            }
        }

        let pages = cursor.finish();
        log::debug!(
            "laid out {} section(s) on {} page(s)",
            sections.len(),
            pages.len()
        );
        pages
    }

    /// Lay out a plain-text summary under a title.
    pub fn layout_summary(&self, title: &str, body: &str) -> Vec<Page> {
        let mut cursor = Cursor::new(&self.policy);
        cursor.write(title, FontRole::Title, 0.0);
        cursor.write(body, FontRole::Body, 0.0);
        cursor.finish()
    }

    fn write_state(&self, cursor: &mut Cursor<'_>, state: LayoutState, section: &ReportSection) {
        let indent = self.policy.indent;
        match state {
            LayoutState::Idle | LayoutState::Done => {}
            LayoutState::WritingOverview => {
                cursor.write(&format!("Sheet: {}", section.sheet_name), FontRole::Heading, 0.0);
                cursor.write(
                    &format!("Rows: {}", section.overview.row_count),
                    FontRole::Body,
                    indent,
                );
                cursor.write(
                    &format!("Columns: {}", section.overview.col_count),
                    FontRole::Body,
                    indent,
                );
            }
            LayoutState::WritingStats => {
                cursor.write("Statistics", FontRole::Subheading, 0.0);
                if section.stats.is_empty() {
                    cursor.write("No numeric columns.", FontRole::Body, indent);
                }
                for stats in &section.stats {
                    let line = format!(
                        "{}: max {}, min {}, avg {}",
                        stats.column,
                        format_number(stats.max),
                        format_number(stats.min),
                        format_avg(stats.avg)
                    );
                    cursor.write(&line, FontRole::Body, indent);
                }
            }
            LayoutState::WritingTrends => {
                if section.trends.is_empty() {
                    return;
                }
                cursor.write("Trends", FontRole::Subheading, 0.0);
                for trend in &section.trends {
                    let line = format!("{}: {}", trend.column, trend.direction.as_str());
                    cursor.write(&line, FontRole::Body, indent);
                }
            }
            LayoutState::WritingTakeaways => {
                if section.takeaways.is_empty() {
                    return;
                }
                cursor.write("Key Takeaways", FontRole::Subheading, 0.0);
                for takeaway in &section.takeaways {
                    cursor.write_bullet(takeaway, FontRole::Body, indent);
                }
            }
        }
    }
}

/// Write position within the page being filled.
struct Cursor<'a> {
    policy: &'a LayoutPolicy,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(policy: &'a LayoutPolicy) -> Self {
        Cursor {
            policy,
            pages: Vec::new(),
            current: Page::default(),
            y: policy.top_margin,
        }
    }

    /// Wrap `text` to the content width and emit each line.
    fn write(&mut self, text: &str, role: FontRole, indent: f32) {
        let columns = self.columns(role, indent);
        for line in wrap_text(text, columns) {
            self.emit(line, role, indent);
        }
    }

    /// Like [`Cursor::write`], with a `- ` marker and hanging indent.
    fn write_bullet(&mut self, text: &str, role: FontRole, indent: f32) {
        let columns = self.columns(role, indent).saturating_sub(2).max(1);
        for (idx, line) in wrap_text(text, columns).into_iter().enumerate() {
            let marker = if idx == 0 { "- " } else { "  " };
            self.emit(format!("{}{}", marker, line), role, indent);
        }
    }

    fn columns(&self, role: FontRole, indent: f32) -> usize {
        let width = (self.policy.content_width - indent).max(0.0);
        self.policy.wrap_columns(role, width)
    }

    /// Place one line, starting a new page first if it would cross the threshold.
    ///
    /// A line always lands on a page that already has content or is fresh, so
    /// an oversized line still makes progress.
    fn emit(&mut self, text: String, role: FontRole, indent: f32) {
        let font = self.policy.font(role);
        if !self.current.is_empty() && self.y + font.line_height > self.policy.bottom_threshold {
            self.break_page();
        }
        self.current.lines.push(TextLine {
            text,
            x: self.policy.left_margin + indent,
            y: self.y,
            font_size: font.size,
            role,
        });
        self.y += font.line_height;
    }

    /// Vertical space between blocks; skipped at the top of a page.
    fn gap(&mut self, amount: f32) {
        if !self.current.is_empty() {
            self.y += amount;
        }
    }

    fn break_page(&mut self) {
        log::debug!(
            "page {} full at y={}, starting a new page",
            self.pages.len() + 1,
            self.y
        );
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.policy.top_margin;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}
