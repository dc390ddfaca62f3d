//! Greedy fixed-width text wrapping.
//!
//! Width is measured in characters. Explicit newlines start a new line, words
//! longer than the width are split, and runs of whitespace collapse to a single
//! space.

/// Wrap `text` into lines of at most `width` characters.
///
/// Blank input produces no lines. A width of zero is treated as one.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    if text.trim().is_empty() {
        return lines;
    }

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Hard-split words that can never fit on a line of their own.
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };

            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        lines.push(current);
    }

    // Drop trailing blank lines left by trailing newlines in the input.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_on_word_boundary() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_exact_width_fits() {
        assert_eq!(wrap_text("abcde fghij", 5), vec!["abcde", "fghij"]);
        assert_eq!(wrap_text("ab cd", 5), vec!["ab cd"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("x abcdefgh y", 4), vec!["x", "abcd", "efgh", "y"]);
    }

    #[test]
    fn test_newlines_are_kept() {
        assert_eq!(wrap_text("one\ntwo", 80), vec!["one", "two"]);
        assert_eq!(wrap_text("one\n\ntwo\n", 80), vec!["one", "", "two"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   \n ", 10).is_empty());
    }

    #[test]
    fn test_zero_width_does_not_loop() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua.";
        for width in 1..40 {
            for line in wrap_text(text, width) {
                assert!(line.chars().count() <= width, "{:?} > {}", line, width);
            }
        }
    }
}
