//! Extractive summary of free text: the leading sentences.

use regex::Regex;
use std::sync::OnceLock;

/// Number of sentences kept by default.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]").expect("valid sentence regex"))
}

/// Split text into trimmed, non-blank sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_end_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Keep the first `max_sentences` sentences, joined with `". "` and closed with `.`.
///
/// Blank input (or `max_sentences == 0`) yields an empty string.
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = split_sentences(text)
        .into_iter()
        .take(max_sentences)
        .collect();
    if sentences.is_empty() {
        return String::new();
    }
    format!("{}.", sentences.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_three_sentences() {
        let text = "One. Two! Three? Four. Five.";
        assert_eq!(summarize_text(text, 3), "One. Two. Three.");
    }

    #[test]
    fn test_fewer_sentences_than_limit() {
        assert_eq!(summarize_text("Only one", 3), "Only one.");
    }

    #[test]
    fn test_blank_pieces_are_skipped() {
        assert_eq!(summarize_text("Wait... what?!  Yes.", 3), "Wait. what. Yes.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize_text("", 3), "");
        assert_eq!(summarize_text(" . ! ", 3), "");
        assert_eq!(summarize_text("Text.", 0), "");
    }

    #[test]
    fn test_newlines_inside_sentences_are_preserved() {
        let sentences = split_sentences("line one\ncontinues. next");
        assert_eq!(sentences, vec!["line one\ncontinues", "next"]);
    }
}
