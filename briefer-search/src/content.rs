//! HTML content extraction: paragraph text plus a quality floor.
//!
//! Only `<p>` elements are considered readable content. Their text is
//! joined line by line and trimmed; pages that yield nothing, or less than
//! the configured floor, are rejected as boilerplate.

use crate::error::{Result, SearchError};
use scraper::{Html, Selector};

/// Default minimum number of characters a page must yield.
pub const DEFAULT_MIN_CHARS: usize = 100;

/// Extract the text of every paragraph element, one per line, trimmed.
///
/// Nested inline markup (`<a>`, `<em>`, ...) contributes its text. Returns
/// an empty string when the document has no paragraphs.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

/// Apply the content quality checks to already-extracted text.
///
/// Length is measured in characters, not bytes.
///
/// # Errors
///
/// Returns [`SearchError::EmptyContent`] for empty text and
/// [`SearchError::TooShort`] for text below `min_chars`.
pub fn check_quality(url: &str, text: String, min_chars: usize) -> Result<String> {
    let chars = text.chars().count();
    if chars == 0 {
        return Err(SearchError::EmptyContent(url.to_owned()));
    }
    if chars < min_chars {
        return Err(SearchError::TooShort {
            url: url.to_owned(),
            chars,
            min: min_chars,
        });
    }
    Ok(text)
}

/// Extract paragraph text from `html` and apply the quality floor.
///
/// # Errors
///
/// Same as [`check_quality`].
pub fn extract_content(html: &str, url: &str, min_chars: usize) -> Result<String> {
    check_quality(url, extract_paragraph_text(html), min_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_paragraph() -> String {
        "Rust guarantees memory safety without a garbage collector. ".repeat(3)
    }

    #[test]
    fn paragraphs_joined_with_newlines() {
        let html = "<html><body><p>First</p><div>skip</div><p>Second</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "First\nSecond");
    }

    #[test]
    fn nested_inline_text_is_kept() {
        let html = r#"<p>Read <a href="/x">the <em>book</em></a> today.</p>"#;
        assert_eq!(extract_paragraph_text(html), "Read the book today.");
    }

    #[test]
    fn non_paragraph_text_ignored() {
        let html = "<html><body><h1>Title</h1><div>Body text</div></body></html>";
        assert_eq!(extract_paragraph_text(html), "");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let html = "<p>\n   padded   \n</p>";
        assert_eq!(extract_paragraph_text(html), "padded");
    }

    #[test]
    fn inner_whitespace_preserved_verbatim() {
        let html = "<p>a  b</p><p>c</p>";
        assert_eq!(extract_paragraph_text(html), "a  b\nc");
    }

    #[test]
    fn empty_paragraphs_rejected_as_empty_content() {
        let html = "<html><body><p>   </p></body></html>";
        let err = extract_content(html, "https://example.com", DEFAULT_MIN_CHARS).unwrap_err();
        assert!(matches!(err, SearchError::EmptyContent(ref u) if u == "https://example.com"));
    }

    #[test]
    fn short_content_rejected_even_if_non_empty() {
        let html = "<p>Too short to matter.</p>";
        let err = extract_content(html, "https://example.com", DEFAULT_MIN_CHARS).unwrap_err();
        match err {
            SearchError::TooShort { chars, min, .. } => {
                assert_eq!(chars, "Too short to matter.".len());
                assert_eq!(min, 100);
            }
            other => panic!("expected TooShort, got {other:?}"),
        }
    }

    #[test]
    fn content_at_floor_is_accepted() {
        let text = "x".repeat(100);
        let result = check_quality("u", text.clone(), 100).expect("exactly at floor");
        assert_eq!(result, text);
    }

    #[test]
    fn content_one_below_floor_is_rejected() {
        let err = check_quality("u", "x".repeat(99), 100).unwrap_err();
        assert!(matches!(err, SearchError::TooShort { chars: 99, .. }));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 60 two-byte characters: 120 bytes but only 60 chars.
        let err = check_quality("u", "é".repeat(60), 100).unwrap_err();
        assert!(matches!(err, SearchError::TooShort { chars: 60, .. }));
    }

    #[test]
    fn long_content_returned_verbatim() {
        let para = long_paragraph();
        let html = format!("<html><body><p>{para}</p><p>{para}</p></body></html>");
        let text = extract_content(&html, "https://example.com", DEFAULT_MIN_CHARS).expect("ok");
        assert_eq!(text, format!("{para}\n{para}").trim());
    }

    #[test]
    fn malformed_html_still_extracts() {
        let para = long_paragraph();
        let html = format!("<p>{para}<p>unclosed <b>bold");
        let text = extract_content(&html, "https://example.com", DEFAULT_MIN_CHARS).expect("ok");
        assert!(text.contains("memory safety"));
        assert!(text.ends_with("unclosed bold"));
    }

    #[test]
    fn zero_floor_only_rejects_empty() {
        assert!(extract_content("<p>hi</p>", "u", 0).is_ok());
        assert!(extract_content("", "u", 0).is_err());
    }
}
