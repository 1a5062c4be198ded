//! Structured-value extraction.
//!
//! Emails, URLs, filesystem paths, and bare numbers must survive tokenization
//! intact, so they are located first and reserved before any lexicon matching.
//! Spans are returned leftmost-first; overlapping candidates resolve to the
//! longest match, with ties going to the earlier pattern in [`PATTERNS`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::OnceLock;

/// Kind of structured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `local@domain.tld`
    Email,
    /// `scheme://...`
    Url,
    /// `/abs/path`, `./rel`, `~/home`
    Path,
    /// Integer, decimal, or dotted numeric literal (`10.0.0.1`).
    Number,
}

impl ValueKind {
    /// Attribute value recorded on the resulting token.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Email => "email",
            ValueKind::Url => "url",
            ValueKind::Path => "path",
            ValueKind::Number => "number",
        }
    }
}

/// A reserved span of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredSpan {
    /// What the span holds.
    pub kind: ValueKind,
    /// Byte range into the text that was scanned.
    pub range: Range<usize>,
    /// The matched text.
    pub text: String,
}

const PATTERNS: &[(ValueKind, &str)] = &[
    (
        ValueKind::Email,
        r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}",
    ),
    (ValueKind::Url, r"[A-Za-z][A-Za-z0-9+.-]*://[^\s\x{3000}-\x{303F}\x{FF00}-\x{FFEF}]+"),
    (ValueKind::Path, r"(?:~|\.{1,2})?/[A-Za-z0-9._~-]+(?:/[A-Za-z0-9._~-]+)*/?"),
    (ValueKind::Number, r"[0-9]+(?:\.[0-9]+)*"),
];

fn compiled() -> &'static [(ValueKind, Regex)] {
    static COMPILED: OnceLock<Vec<(ValueKind, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|(kind, pattern)| (*kind, Regex::new(pattern).expect("invalid regex")))
            .collect()
    })
}

/// Finds non-overlapping structured spans in `text`, in left-to-right order.
pub fn extract(text: &str) -> Vec<StructuredSpan> {
    let mut candidates: Vec<(usize, StructuredSpan)> = Vec::new();
    for (priority, (kind, regex)) in compiled().iter().enumerate() {
        for m in regex.find_iter(text) {
            let range = trim_trailing_punctuation(text, m.range());
            if range.is_empty() || !is_standalone(text, *kind, &range) {
                continue;
            }
            candidates.push((
                priority,
                StructuredSpan {
                    kind: *kind,
                    text: text[range.clone()].to_string(),
                    range,
                },
            ));
        }
    }

    candidates.sort_by(|(pa, a), (pb, b)| {
        a.range
            .start
            .cmp(&b.range.start)
            .then(b.range.len().cmp(&a.range.len()))
            .then(pa.cmp(pb))
    });

    let mut spans: Vec<StructuredSpan> = Vec::new();
    for (_, span) in candidates {
        let overlaps = spans
            .last()
            .is_some_and(|prev| span.range.start < prev.range.end);
        if !overlaps {
            spans.push(span);
        }
    }
    spans
}

/// Sentence punctuation directly after a URL or path belongs to the sentence.
fn trim_trailing_punctuation(text: &str, mut range: Range<usize>) -> Range<usize> {
    while let Some(last) = text[range.clone()].chars().last() {
        if matches!(last, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '\'' | '"') {
            range.end -= last.len_utf8();
        } else {
            break;
        }
    }
    range
}

/// Numbers and paths only count when they are not glued to a word: `web01`
/// is not the number `01`, and `a/b` is not a path.
fn is_standalone(text: &str, kind: ValueKind, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    let glued = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    match kind {
        ValueKind::Number => !glued(before) && !glued(after) && before != Some('.'),
        ValueKind::Path => !glued(before),
        ValueKind::Email | ValueKind::Url => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(ValueKind, String)> {
        extract(text).into_iter().map(|s| (s.kind, s.text)).collect()
    }

    #[test]
    fn email_wins_over_embedded_parts() {
        assert_eq!(
            kinds("create user alice@example.com now"),
            vec![(ValueKind::Email, "alice@example.com".to_string())]
        );
    }

    #[test]
    fn url_is_kept_whole_and_trailing_period_dropped() {
        assert_eq!(
            kinds("deploy https://example.com/app/v2.1."),
            vec![(ValueKind::Url, "https://example.com/app/v2.1".to_string())]
        );
    }

    #[test]
    fn numbers_must_stand_alone() {
        assert_eq!(
            kinds("restart 3 servers web01"),
            vec![(ValueKind::Number, "3".to_string())]
        );
        assert_eq!(kinds("scale to 2.5"), vec![(ValueKind::Number, "2.5".to_string())]);
    }

    #[test]
    fn numbers_next_to_cjk_are_extracted() {
        assert_eq!(kinds("重啟3台伺服器"), vec![(ValueKind::Number, "3".to_string())]);
    }

    #[test]
    fn paths_are_reserved() {
        assert_eq!(
            kinds("delete file /var/log/app.log"),
            vec![(ValueKind::Path, "/var/log/app.log".to_string())]
        );
    }

    #[test]
    fn spans_are_ordered_with_byte_ranges() {
        let text = "add 2 users bob@x.io";
        let spans = extract(text);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].range.end <= spans[1].range.start);
        for span in spans {
            assert_eq!(&text[span.range.clone()], span.text);
        }
    }
}
