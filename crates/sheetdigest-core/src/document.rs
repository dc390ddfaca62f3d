//! Input documents and the report pipeline (UI-agnostic).

use crate::error::{DigestError, Result};
use crate::storage;
use sheetdigest_engine::layout::{LayoutPolicy, Page, PageLayoutEngine};
use sheetdigest_engine::model::SheetModel;
use sheetdigest_engine::summary::{DEFAULT_SUMMARY_SENTENCES, summarize_text};
use sheetdigest_engine::report_pages;
use std::path::{Path, PathBuf};

/// Title of a text summary document.
pub const SUMMARY_TITLE: &str = "Summary";

/// Decoded content of one or more input files.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Tabular data, one entry per sheet in input order.
    Sheets(Vec<SheetModel>),
    /// Free text to be summarized.
    Text(String),
}

/// A loaded input ready to be turned into pages.
#[derive(Clone, Debug)]
pub struct Digest {
    /// Files the content was read from
    pub sources: Vec<PathBuf>,
    pub content: Content,
    /// Sentences kept when summarizing text
    pub summary_sentences: usize,
}

/// Input kinds recognised by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Csv,
    Workbook,
    Text,
    Pdf,
    Docx,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Result<InputKind> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(InputKind::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(InputKind::Workbook),
            "txt" | "md" => Ok(InputKind::Text),
            "pdf" => Ok(InputKind::Pdf),
            "docx" => Ok(InputKind::Docx),
            "" => Err(DigestError::UnsupportedFormat(path.display().to_string())),
            other => Err(DigestError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

impl Digest {
    pub fn new(content: Content) -> Self {
        Digest {
            sources: Vec::new(),
            content,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }

    /// Load a single input file, choosing the decoder by extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_paths(&[path.to_path_buf()])
    }

    /// Load several inputs into one digest.
    ///
    /// Tabular inputs are combined into one multi-sheet report, in argument
    /// order. A text input (plain text, PDF or Word) must be the only input.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut sheets = Vec::new();
        let mut text: Option<String> = None;

        for path in paths {
            let kind = InputKind::from_path(path)?;
            match kind {
                InputKind::Csv => sheets.push(storage::parse_csv(path)?),
                InputKind::Workbook => sheets.extend(read_workbook(path)?),
                InputKind::Text | InputKind::Pdf | InputKind::Docx => {
                    if paths.len() > 1 {
                        return Err(DigestError::UnsupportedFormat(format!(
                            "{} cannot be combined with other inputs",
                            path.display()
                        )));
                    }
                    text = Some(read_text(kind, path)?);
                }
            }
            log::info!("loaded {}", path.display());
        }

        let content = match text {
            Some(text) => Content::Text(text),
            None => Content::Sheets(sheets),
        };
        Ok(Digest {
            sources: paths.to_vec(),
            ..Digest::new(content)
        })
    }

    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences;
        self
    }

    /// Run the pipeline and lay the result out on pages.
    pub fn pages(&self, policy: &LayoutPolicy) -> Vec<Page> {
        match &self.content {
            Content::Sheets(sheets) => {
                log::debug!("building report for {} sheet(s)", sheets.len());
                report_pages(sheets.clone(), policy)
            }
            Content::Text(text) => {
                let summary = summarize_text(text, self.summary_sentences);
                PageLayoutEngine::new(policy.clone()).layout_summary(SUMMARY_TITLE, &summary)
            }
        }
    }

    /// Number of sheets in the digest (zero for text input).
    pub fn sheet_count(&self) -> usize {
        match &self.content {
            Content::Sheets(sheets) => sheets.len(),
            Content::Text(_) => 0,
        }
    }
}

#[cfg(feature = "xlsx")]
fn read_workbook(path: &Path) -> Result<Vec<SheetModel>> {
    storage::parse_workbook(path)
}

#[cfg(not(feature = "xlsx"))]
fn read_workbook(path: &Path) -> Result<Vec<SheetModel>> {
    Err(DigestError::UnsupportedFormat(format!(
        "{} (built without workbook support)",
        path.display()
    )))
}

fn read_text(kind: InputKind, path: &Path) -> Result<String> {
    match kind {
        InputKind::Pdf => read_pdf(path),
        InputKind::Docx => read_docx(path),
        _ => Ok(std::fs::read_to_string(path)?),
    }
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> Result<String> {
    storage::extract_pdf_text(path)
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> Result<String> {
    Err(DigestError::UnsupportedFormat(format!(
        "{} (built without PDF support)",
        path.display()
    )))
}

#[cfg(feature = "docx")]
fn read_docx(path: &Path) -> Result<String> {
    storage::extract_docx_text(path)
}

#[cfg(not(feature = "docx"))]
fn read_docx(path: &Path) -> Result<String> {
    Err(DigestError::UnsupportedFormat(format!(
        "{} (built without Word document support)",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_by_extension() {
        assert_eq!(InputKind::from_path(Path::new("a.csv")).unwrap(), InputKind::Csv);
        assert_eq!(InputKind::from_path(Path::new("a.CSV")).unwrap(), InputKind::Csv);
        assert_eq!(
            InputKind::from_path(Path::new("book.xlsx")).unwrap(),
            InputKind::Workbook
        );
        assert_eq!(InputKind::from_path(Path::new("notes.txt")).unwrap(), InputKind::Text);
        assert_eq!(InputKind::from_path(Path::new("report.PDF")).unwrap(), InputKind::Pdf);
        assert_eq!(InputKind::from_path(Path::new("letter.docx")).unwrap(), InputKind::Docx);
    }

    #[test]
    fn test_unknown_extensions_are_unsupported() {
        assert!(matches!(
            InputKind::from_path(Path::new("slides.pptx")),
            Err(DigestError::UnsupportedFormat(ext)) if ext == ".pptx"
        ));
        assert!(matches!(
            InputKind::from_path(Path::new("letter.doc")),
            Err(DigestError::UnsupportedFormat(_))
        ));
        assert!(InputKind::from_path(Path::new("noext")).is_err());
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_input_is_summarized() {
        use docx_rs::{Docx, Paragraph, Run};

        let path = std::env::temp_dir().join(format!("sheetdigest_doc_{}.docx", std::process::id()));
        let mut buf = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Orders doubled.")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Returns fell. Staff grew.")))
            .build()
            .pack(&mut buf)
            .unwrap();
        std::fs::write(&path, buf.into_inner()).unwrap();

        let digest = Digest::from_path(&path).unwrap().with_summary_sentences(2);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(digest.sheet_count(), 0);
        let pages = digest.pages(&LayoutPolicy::default());
        let text: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(text, vec![SUMMARY_TITLE, "Orders doubled. Returns fell."]);
    }

    #[test]
    fn test_pdf_cannot_be_combined() {
        let paths = vec![PathBuf::from("b.pdf"), PathBuf::from("a.csv")];
        assert!(matches!(
            Digest::from_paths(&paths),
            Err(DigestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_sheet_pages() {
        let sheet = storage::parse_csv_str("data", "A,B\n1,x\n2,y\n3,z").unwrap();
        let digest = Digest::new(Content::Sheets(vec![sheet]));
        assert_eq!(digest.sheet_count(), 1);

        let pages = digest.pages(&LayoutPolicy::default());
        let text: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert!(text.contains(&"Sheet: data"));
        assert!(text.contains(&"A: increasing"));
        assert!(text.contains(&"- The average A is 2.00."));
    }

    #[test]
    fn test_text_pages() {
        let digest = Digest::new(Content::Text("One. Two. Three. Four.".to_string()))
            .with_summary_sentences(2);
        let pages = digest.pages(&LayoutPolicy::default());
        let text: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(text, vec![SUMMARY_TITLE, "One. Two."]);
    }

    #[test]
    fn test_from_path_reads_csv() {
        let path = std::env::temp_dir().join(format!("sheetdigest_doc_{}.csv", std::process::id()));
        std::fs::write(&path, "Score\n3\n2\n1\n").unwrap();

        let digest = Digest::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(digest.sources, vec![path]);
        match &digest.content {
            Content::Sheets(sheets) => assert_eq!(sheets[0].row_count(), 3),
            other => panic!("expected sheets, got {:?}", other),
        }
    }

    #[test]
    fn test_text_cannot_be_combined() {
        let paths = vec![PathBuf::from("a.txt"), PathBuf::from("b.csv")];
        assert!(matches!(
            Digest::from_paths(&paths),
            Err(DigestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_empty_text_still_has_title() {
        let digest = Digest::new(Content::Text(String::new()));
        let pages = digest.pages(&LayoutPolicy::default());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 1);
    }
}
