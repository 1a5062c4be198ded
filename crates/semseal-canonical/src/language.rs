//! Supported languages and script-based language detection.
//!
//! Detection scans code points for membership in language-distinguishing
//! Unicode blocks, checked in a fixed priority order. The first block with any
//! matching code point wins; mixed-script input therefore resolves to the
//! highest-priority script present, never to the majority script.

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of an operational statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English; also the base language for canonical output.
    En,
    /// Chinese (traditional and simplified share one table).
    Zh,
    /// Japanese.
    Ja,
    /// Korean.
    Ko,
}

/// How a language's text is split into candidate lexicon keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmentation {
    /// Whitespace-delimited words, matched as phrases of up to N words.
    Words,
    /// Longest match against the lexicon, character by character.
    LongestMatch,
}

impl Language {
    /// Fallback language and the target of canonical output.
    pub const BASE: Language = Language::En;

    /// Every supported language, in tag order.
    pub const ALL: [Language; 4] = [Language::En, Language::Zh, Language::Ja, Language::Ko];

    /// Returns the short language tag (`en`, `zh`, `ja`, `ko`).
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }

    /// Segmentation strategy for this language.
    ///
    /// Korean separates words with spaces but attaches particles to nouns, so
    /// it is matched like the unsegmented scripts.
    pub fn segmentation(self) -> Segmentation {
        match self {
            Language::En => Segmentation::Words,
            Language::Zh | Language::Ja | Language::Ko => Segmentation::LongestMatch,
        }
    }

    /// Whether surface words are joined with spaces when rendering text.
    pub fn joins_with_spaces(self) -> bool {
        matches!(self, Language::En | Language::Ko)
    }

    /// Parses a language tag, accepting region variants such as `zh-TW`.
    pub fn parse(tag: &str) -> Result<Self, ValidationError> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            "ja" => Ok(Language::Ja),
            "ko" => Ok(Language::Ko),
            _ => Err(ValidationError::UnsupportedLanguage(tag.to_string())),
        }
    }

    /// Parses a language hint where `auto` (or an empty string) requests detection.
    pub fn parse_hint(hint: &str) -> Result<Option<Self>, ValidationError> {
        let trimmed = hint.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(None);
        }
        Self::parse(trimmed).map(Some)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Script blocks in detection priority order.
const PRIORITY: &[(Language, fn(char) -> bool)] = &[
    (Language::Ko, is_hangul),
    (Language::Ja, is_kana),
    (Language::Zh, is_han),
];

/// Classifies raw text into a supported language. Never fails.
pub fn detect(text: &str) -> Language {
    for (language, in_block) in PRIORITY {
        if text.chars().any(in_block) {
            return *language;
        }
    }
    Language::BASE
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}'
        | '\u{3130}'..='\u{318F}'
        | '\u{A960}'..='\u{A97F}'
        | '\u{AC00}'..='\u{D7AF}'
        | '\u{D7B0}'..='\u{D7FF}')
}

fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}')
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}')
}
