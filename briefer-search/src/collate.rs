//! Collation of snippets or page contents into one text block.

use crate::types::SearchResult;

/// Join the non-empty snippets of `results` with newlines, in input order.
///
/// Empty input yields an empty string.
pub fn collate(results: &[SearchResult]) -> String {
    collate_texts(results.iter().map(|r| r.snippet.as_str()))
}

/// Join the non-empty entries of `texts` with newlines, preserving order.
pub fn collate_texts<I, S>(texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for text in texts {
        let text = text.as_ref();
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(text);
    }
    out
}
