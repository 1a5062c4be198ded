//! Tokenization of operational statements into typed semantic units.
//!
//! Input is NFKC-normalized first, so full-width Latin letters and digits fold
//! to ASCII and every byte range reported refers to the normalized text.
//! Structured values are reserved before lexicon matching; the remaining gaps
//! are segmented per [`Segmentation`] and classified through the lexicon.

use crate::coverage::{CoverageReport, UnclassifiedSpan};
use crate::extractor::{extract, StructuredSpan, ValueKind};
use crate::language::{Language, Segmentation};
use crate::lexicon::{normalize_key, LanguageTable, Lexicon};
use crate::token::{Token, TokenSequence, TokenType};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_normalization::UnicodeNormalization;

/// Result of tokenizing one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokenization {
    /// Language the statement was tokenized as.
    pub language: Language,
    /// Tokens in input order.
    pub tokens: TokenSequence,
    /// What was dropped along the way.
    pub report: CoverageReport,
}

/// Tokenizer bound to a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    lexicon: &'static Lexicon,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

#[derive(Default)]
struct Collector {
    tokens: Vec<Token>,
    unclassified: Vec<UnclassifiedSpan>,
}

impl Collector {
    fn classify(&mut self, text: &str, range: Range<usize>, token_type: TokenType, lemma: &str) {
        self.tokens.push(Token::new(token_type, &text[range], lemma));
    }

    fn drop_span(&mut self, text: &str, range: Range<usize>) {
        self.unclassified.push(UnclassifiedSpan {
            text: text[range.clone()].to_string(),
            range,
        });
    }
}

impl Tokenizer {
    /// Creates a tokenizer over the given lexicon.
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Lexicon in use.
    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    /// Tokenizes `text` as `language`.
    ///
    /// Segments without a lexicon entry are dropped from the sequence and
    /// listed in the coverage report. Never fails: unrecognized input yields
    /// an empty sequence with [`CoverageStatus::Unrecognized`](crate::CoverageStatus).
    pub fn tokenize(&self, text: &str, language: Language) -> Tokenization {
        let normalized: String = text.nfkc().collect();
        let table = self.lexicon.table(language);
        let mut out = Collector::default();

        let mut cursor = 0;
        for span in extract(&normalized) {
            self.segment(&normalized, cursor..span.range.start, table, &mut out);
            out.tokens.push(reserved_token(&span));
            cursor = span.range.end;
        }
        self.segment(&normalized, cursor..normalized.len(), table, &mut out);

        let report = CoverageReport::new(out.tokens.len(), out.unclassified);
        tracing::debug!(
            language = %language,
            tokens = out.tokens.len(),
            unclassified = report.unclassified.len(),
            status = ?report.status,
            "tokenized"
        );
        Tokenization {
            language,
            tokens: TokenSequence::new(out.tokens),
            report,
        }
    }

    /// Renders tokens as surface text in `target`.
    ///
    /// Lexical tokens become the target language's first alias for their
    /// lemma (falling back to the base language); identifiers and values pass
    /// through verbatim. The output tokenizes back to the same canonical
    /// sequence; it is not meant to reproduce the original wording.
    pub fn detokenize(&self, tokens: &TokenSequence, target: Language) -> String {
        let mut out = String::new();
        let mut prev_spaced = false;
        for (i, token) in tokens.iter().enumerate() {
            let lexical = token.token_type().is_lexical();
            let piece = if lexical {
                self.lexicon.render(token.canonical(), target)
            } else {
                token.surface().to_string()
            };
            let spaced = target.joins_with_spaces() || !lexical || piece.is_ascii();
            if i > 0 && (spaced || prev_spaced) {
                out.push(' ');
            }
            out.push_str(&piece);
            prev_spaced = spaced;
        }
        out
    }

    fn segment(&self, text: &str, gap: Range<usize>, table: &LanguageTable, out: &mut Collector) {
        if gap.is_empty() {
            return;
        }
        let words = split_words(text, gap);
        match table.language().segmentation() {
            Segmentation::Words => self.match_phrases(text, &words, table, out),
            Segmentation::LongestMatch => {
                for word in words {
                    self.match_longest(text, word, table, out);
                }
            }
        }
    }

    fn match_phrases(
        &self,
        text: &str,
        words: &[Range<usize>],
        table: &LanguageTable,
        out: &mut Collector,
    ) {
        let words: Vec<Range<usize>> = words
            .iter()
            .filter_map(|w| trim_punctuation(text, w.clone()))
            .collect();
        let keys: Vec<String> = words.iter().map(|w| normalize_key(&text[w.clone()])).collect();

        let mut i = 0;
        while i < words.len() {
            let longest = table.max_phrase_words().min(words.len() - i);
            let hit = (1..=longest)
                .rev()
                .find_map(|n| table.lookup(&keys[i..i + n].join(" ")).map(|entry| (n, entry)));
            match hit {
                Some((n, entry)) => {
                    let range = words[i].start..words[i + n - 1].end;
                    out.classify(text, range, entry.token_type, entry.lemma);
                    i += n;
                }
                None => {
                    out.drop_span(text, words[i].clone());
                    i += 1;
                }
            }
        }
    }

    fn match_longest(
        &self,
        text: &str,
        word: Range<usize>,
        table: &LanguageTable,
        out: &mut Collector,
    ) {
        let chars: Vec<(usize, char)> = text[word.clone()]
            .char_indices()
            .map(|(i, c)| (word.start + i, c))
            .collect();
        let end_of = |k: usize| chars.get(k).map_or(word.end, |(i, _)| *i);
        let mut pending: Option<usize> = None;
        let flush = |pending: &mut Option<usize>, end: usize, out: &mut Collector| {
            if let Some(start) = pending.take() {
                out.drop_span(text, start..end);
            }
        };

        let mut k = 0;
        while k < chars.len() {
            let (start, c) = chars[k];

            // Latin words inside CJK text are looked up in the base language too.
            if c.is_ascii_alphanumeric() {
                let mut j = k;
                while j < chars.len() && is_ascii_word_char(chars[j].1) {
                    j += 1;
                }
                flush(&mut pending, start, out);
                let range = start..end_of(j);
                let key = normalize_key(&text[range.clone()]);
                match table.lookup(&key).or_else(|| self.lexicon.base().lookup(&key)) {
                    Some(entry) => out.classify(text, range, entry.token_type, entry.lemma),
                    None => out.drop_span(text, range),
                }
                k = j;
                continue;
            }

            let longest = table.max_key_chars().min(chars.len() - k);
            let hit = (1..=longest).rev().find_map(|n| {
                let range = start..end_of(k + n);
                table.lookup(&text[range.clone()]).map(|entry| (n, range, entry))
            });
            if let Some((n, range, entry)) = hit {
                flush(&mut pending, start, out);
                out.classify(text, range, entry.token_type, entry.lemma);
                k += n;
            } else if !c.is_alphanumeric() {
                flush(&mut pending, start, out);
                k += 1;
            } else {
                pending.get_or_insert(start);
                k += 1;
            }
        }
        flush(&mut pending, word.end, out);
    }
}

fn reserved_token(span: &StructuredSpan) -> Token {
    let token_type = match span.kind {
        ValueKind::Number => TokenType::Value,
        ValueKind::Email | ValueKind::Url | ValueKind::Path => TokenType::Identifier,
    };
    Token::new(token_type, span.text.as_str(), span.text.as_str())
        .with_attribute("kind", span.kind.as_str())
}

fn is_ascii_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Splits `range` of `text` on whitespace, returning word ranges.
fn split_words(text: &str, range: Range<usize>) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in text[range.clone()].char_indices() {
        let at = range.start + i;
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(s..at);
            }
        } else if start.is_none() {
            start = Some(at);
        }
    }
    if let Some(s) = start {
        words.push(s..range.end);
    }
    words
}

/// Strips leading and trailing punctuation; `None` if nothing is left.
fn trim_punctuation(text: &str, range: Range<usize>) -> Option<Range<usize>> {
    let word = &text[range.clone()];
    let trimmed_start = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let start = range.start + (word.len() - trimmed_start.len());
    let trimmed = trimmed_start.trim_end_matches(|c: char| !c.is_alphanumeric());
    let end = start + trimmed.len();
    (start < end).then_some(start..end)
}

/// Tokenizes with the built-in lexicon.
pub fn tokenize(text: &str, language: Language) -> Tokenization {
    Tokenizer::default().tokenize(text, language)
}

/// Detokenizes with the built-in lexicon.
pub fn detokenize(tokens: &TokenSequence, target: Language) -> String {
    Tokenizer::default().detokenize(tokens, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageStatus;

    fn forms(text: &str, language: Language) -> Vec<(TokenType, String)> {
        tokenize(text, language)
            .tokens
            .iter()
            .map(|t| (t.token_type(), t.canonical().to_string()))
            .collect()
    }

    #[test]
    fn english_statement_is_typed_in_order() {
        assert_eq!(
            forms("Create user alice@example.com", Language::En),
            vec![
                (TokenType::Action, "create".into()),
                (TokenType::Entity, "user".into()),
                (TokenType::Identifier, "alice@example.com".into()),
            ]
        );
    }

    #[test]
    fn chinese_is_segmented_by_longest_match() {
        assert_eq!(
            forms("創建用戶 alice@example.com", Language::Zh),
            forms("create user alice@example.com", Language::En)
        );
        // 文件夹 must not split into 文件 + 夹.
        assert_eq!(
            forms("刪除文件夹", Language::Zh),
            vec![
                (TokenType::Action, "delete".into()),
                (TokenType::Entity, "folder".into()),
            ]
        );
    }

    #[test]
    fn condition_characters_inside_compounds_are_not_conditions() {
        let expected = vec![
            (TokenType::Action, "restart".into()),
            (TokenType::Entity, "service".into()),
        ];
        assert_eq!(forms("重启当前服务", Language::Zh), expected);
        assert_eq!(forms("restart the current service", Language::En), expected);
        assert_eq!(
            forms("若干服务器重启", Language::Zh),
            vec![
                (TokenType::Entity, "server".into()),
                (TokenType::Action, "restart".into()),
            ]
        );
        assert_eq!(
            forms("备份失败的时候重启", Language::Zh),
            vec![
                (TokenType::Action, "backup".into()),
                (TokenType::Condition, "when".into()),
                (TokenType::Action, "restart".into()),
            ]
        );
    }

    #[test]
    fn japanese_and_korean_particles_are_unclassified() {
        let ja = tokenize("ユーザーを作成する", Language::Ja);
        assert_eq!(
            ja.tokens.canonical_forms(),
            vec![(TokenType::Entity, "user"), (TokenType::Action, "create")]
        );
        assert_eq!(ja.report.status, CoverageStatus::Partial);

        let ko = tokenize("사용자를 생성했습니다", Language::Ko);
        assert_eq!(
            ko.tokens.canonical_forms(),
            vec![(TokenType::Entity, "user"), (TokenType::Action, "create")]
        );
        let dropped: Vec<_> = ko.report.unclassified.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(dropped, vec!["를", "했습니다"]);
    }

    #[test]
    fn pronouns_are_dropped_but_reported() {
        let t = tokenize("We restarted nginx.", Language::En);
        assert_eq!(t.tokens.canonical_forms(), vec![(TokenType::Action, "restart")]);
        let dropped: Vec<_> = t.report.unclassified.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(dropped, vec!["We", "nginx"]);
    }

    #[test]
    fn phrases_match_before_single_words() {
        assert_eq!(
            forms("shut down the server", Language::En),
            vec![
                (TokenType::Action, "stop".into()),
                (TokenType::Entity, "server".into()),
            ]
        );
    }

    #[test]
    fn unrecognized_input_is_empty_not_an_error() {
        let t = tokenize("hello there", Language::En);
        assert!(t.tokens.is_empty());
        assert!(t.report.is_unrecognized());
    }

    #[test]
    fn full_width_and_line_endings_normalize() {
        assert_eq!(
            forms("ＣＲＥＡＴＥ\r\nuser\t３", Language::En),
            vec![
                (TokenType::Action, "create".into()),
                (TokenType::Entity, "user".into()),
                (TokenType::Value, "3".into()),
            ]
        );
    }

    #[test]
    fn ascii_words_in_cjk_use_the_base_lexicon() {
        assert_eq!(
            forms("重啟 service", Language::Zh),
            vec![
                (TokenType::Action, "restart".into()),
                (TokenType::Entity, "service".into()),
            ]
        );
    }

    #[test]
    fn reserved_tokens_carry_their_kind() {
        let t = tokenize("delete /tmp/cache", Language::En);
        let path = &t.tokens.as_slice()[1];
        assert_eq!(path.token_type(), TokenType::Identifier);
        assert_eq!(path.surface(), path.canonical());
        assert_eq!(path.attributes().get("kind").map(String::as_str), Some("path"));
    }

    #[test]
    fn detokenize_renders_target_language() {
        let tokens = tokenize("create user alice@example.com", Language::En).tokens;
        assert_eq!(detokenize(&tokens, Language::Zh), "創建用戶 alice@example.com");
        assert_eq!(detokenize(&tokens, Language::Ko), "생성 사용자 alice@example.com");
        assert_eq!(detokenize(&tokens, Language::En), "create user alice@example.com");
    }

    #[test]
    fn detokenized_text_round_trips_semantically() {
        let samples = [
            ("新增用戶 bob@example.com", Language::Zh),
            ("重新啟動服務 3", Language::Zh),
            ("サーバーを再起動", Language::Ja),
            ("데이터베이스 백업", Language::Ko),
            ("If the backup failed, restore the database", Language::En),
        ];
        for (text, language) in samples {
            let first = tokenize(text, language).tokens;
            let rendered = detokenize(&first, language);
            let second = tokenize(&rendered, language).tokens;
            assert_eq!(first.canonical_forms(), second.canonical_forms(), "{text}");
        }
    }
}
