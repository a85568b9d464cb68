//! Post-processing: deterministic cleanup of raw page text.
//!
//! Both extraction paths leave artefacts in their output. Tesseract ends
//! each page with a form feed and peppers low-contrast scans with stray
//! trailing spaces; PDF text layers come with producer-dependent line
//! endings and the occasional zero-width character. These rules fix the
//! artefacts without touching content. Each rule is a pure function
//! (`&str → String`) with no shared state, applied in a defined order, and
//! independently testable.
//!
//! ## Rule Order
//!
//! Line endings are normalised first so later line-based rules see `\n`
//! only; the final trim runs last so no rule can reintroduce edge
//! whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all post-processing rules to one page's raw text.
///
/// Rules (applied in order):
/// 1. Normalise line endings (CRLF / CR → LF)
/// 2. Remove form feeds (Tesseract's page terminator)
/// 3. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens, etc.)
/// 4. Trim trailing whitespace per line
/// 5. Collapse 3+ consecutive blank lines down to 2
/// 6. Trim leading/trailing whitespace from the page as a whole
pub fn clean_page_text(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = remove_form_feeds(&s);
    let s = remove_invisible_chars(&s);
    let s = trim_trailing_whitespace(&s);
    let s = collapse_blank_lines(&s);
    s.trim().to_string()
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Remove form feeds ────────────────────────────────────────────────

fn remove_form_feeds(input: &str) -> String {
    input.replace('\u{000C}', "")
}

// ── Rule 3: Remove invisible Unicode characters ──────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
        ],
        "",
    )
}

// ── Rule 4: Trim trailing whitespace per line ────────────────────────────────

fn trim_trailing_whitespace(input: &str) -> String {
    input
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Rule 5: Collapse excessive blank lines ───────────────────────────────────

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").unwrap());

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n\n\n").to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_remove_form_feeds() {
        assert_eq!(remove_form_feeds("page text\u{000C}"), "page text");
    }

    #[test]
    fn test_remove_invisible() {
        let input = "hello\u{200B}world\u{FEFF}foo\u{00AD}bar";
        assert_eq!(remove_invisible_chars(input), "helloworldfoobar");
    }

    #[test]
    fn test_trim_trailing_whitespace() {
        assert_eq!(
            trim_trailing_whitespace("  hello   \nworld  "),
            "  hello\nworld"
        );
    }

    #[test]
    fn test_collapse_blank_lines() {
        let input = "a\n\n\n\n\n\nb";
        assert_eq!(collapse_blank_lines(input), "a\n\n\nb");
    }

    #[test]
    fn test_clean_page_text_full_pipeline() {
        let input = "First line   \r\n\r\nSecond line\u{200B}\n\n\n\n\nThird line\u{000C}\n";
        let result = clean_page_text(input);
        assert!(result.starts_with("First line"));
        assert!(result.ends_with("Third line"));
        assert!(!result.contains('\u{000C}'));
        assert!(!result.contains("\n\n\n\n"));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let input = "Some  text \r\nwith\u{FEFF} noise\u{000C}\n\n\n\n\nend ";
        let once = clean_page_text(input);
        let twice = clean_page_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_only_page_cleans_to_empty() {
        assert_eq!(clean_page_text(" \n\u{000C}\t \r\n "), "");
    }
}
