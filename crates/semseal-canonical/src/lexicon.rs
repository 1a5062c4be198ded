//! Per-language lexicon: surface word → (token type, canonical lemma).
//!
//! The built-in lexicon is loaded once into a read-only structure and shared
//! by reference; nothing mutates it after construction, so concurrent readers
//! need no synchronization.

use crate::language::Language;
use crate::tables::{self, Row};
use crate::token::TokenType;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Version of the built-in tables. Fingerprints are stable only within one version.
pub const LEXICON_VERSION: &str = "lexicon-v1";

/// Classification of one surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Semantic class of the surface form.
    pub token_type: TokenType,
    /// Canonical lemma the surface form maps to.
    pub lemma: &'static str,
}

/// Lookup table for one language.
#[derive(Debug)]
pub struct LanguageTable {
    language: Language,
    by_surface: HashMap<String, LexiconEntry>,
    aliases: HashMap<&'static str, &'static str>,
    max_key_chars: usize,
    max_phrase_words: usize,
}

impl LanguageTable {
    fn from_rows(language: Language, rows: &'static [Row]) -> Self {
        let mut by_surface = HashMap::new();
        let mut aliases = HashMap::new();
        let mut max_key_chars = 1;
        let mut max_phrase_words = 1;

        for &(token_type, lemma, surfaces) in rows {
            for &surface in surfaces {
                let key = normalize_key(surface);
                max_key_chars = max_key_chars.max(key.chars().count());
                max_phrase_words = max_phrase_words.max(key.split(' ').count());
                // First row listing a surface wins.
                by_surface
                    .entry(key)
                    .or_insert(LexiconEntry { token_type, lemma });
            }
            if let Some(first) = surfaces.first() {
                aliases.entry(lemma).or_insert(*first);
            }
        }

        Self {
            language,
            by_surface,
            aliases,
            max_key_chars,
            max_phrase_words,
        }
    }

    /// Language this table serves.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Looks up an already normalized key (see [`normalize_key`]).
    pub fn lookup(&self, key: &str) -> Option<LexiconEntry> {
        self.by_surface.get(key).copied()
    }

    /// First listed surface form for a lemma, if the language has one.
    pub fn alias(&self, lemma: &str) -> Option<&'static str> {
        self.aliases.get(lemma).copied()
    }

    /// Longest key length in characters.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    /// Longest key length in space-separated words.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Lemmas known to this table.
    pub fn lemmas(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.aliases.keys().copied()
    }
}

/// Versioned set of per-language tables.
#[derive(Debug)]
pub struct Lexicon {
    version: &'static str,
    tables: BTreeMap<Language, LanguageTable>,
}

impl Lexicon {
    /// Returns the process-wide built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        static BUILTIN: OnceLock<Lexicon> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let sources: [(Language, &'static [Row]); 4] = [
                (Language::En, tables::EN),
                (Language::Zh, tables::ZH),
                (Language::Ja, tables::JA),
                (Language::Ko, tables::KO),
            ];
            let tables = sources
                .into_iter()
                .map(|(language, rows)| (language, LanguageTable::from_rows(language, rows)))
                .collect();
            tracing::debug!(version = LEXICON_VERSION, "lexicon_loaded");
            Lexicon {
                version: LEXICON_VERSION,
                tables,
            }
        })
    }

    /// Version tag of these tables.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Table for a language. Every supported language has one.
    pub fn table(&self, language: Language) -> &LanguageTable {
        &self.tables[&language]
    }

    /// Table of the base language.
    pub fn base(&self) -> &LanguageTable {
        self.table(Language::BASE)
    }

    /// Renders a lemma in the target language: the target's first alias,
    /// else the base language's, else the lemma itself.
    pub fn render(&self, lemma: &str, target: Language) -> String {
        self.table(target)
            .alias(lemma)
            .or_else(|| self.base().alias(lemma))
            .map(str::to_string)
            .unwrap_or_else(|| lemma.to_string())
    }
}

/// Normalizes a surface form into a lookup key: NFKC, lowercase, single spaces.
pub fn normalize_key(surface: &str) -> String {
    let folded: String = surface.nfkc().collect::<String>().to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn looks_up_inflected_and_phrase_forms() {
        let en = Lexicon::builtin().table(Language::En);
        let restarted = en.lookup("restarted").unwrap();
        assert_eq!(restarted.token_type, TokenType::Action);
        assert_eq!(restarted.lemma, "restart");
        assert_eq!(en.lookup("shut down").unwrap().lemma, "stop");
        assert!(en.max_phrase_words() >= 2);
        assert!(en.lookup("alice").is_none());
    }

    #[test]
    fn traditional_and_simplified_share_lemmas() {
        let zh = Lexicon::builtin().table(Language::Zh);
        assert_eq!(zh.lookup("用戶").unwrap().lemma, "user");
        assert_eq!(zh.lookup("用户").unwrap().lemma, "user");
        assert_eq!(zh.alias("user"), Some("用戶"));
    }

    #[test]
    fn no_surface_is_listed_twice_within_a_language() {
        for (language, rows) in [
            (Language::En, tables::EN),
            (Language::Zh, tables::ZH),
            (Language::Ja, tables::JA),
            (Language::Ko, tables::KO),
        ] {
            let mut seen = HashSet::new();
            for (_, _, surfaces) in rows {
                for surface in *surfaces {
                    assert!(
                        seen.insert(normalize_key(surface)),
                        "{language}: duplicate surface {surface}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_lemma_has_a_single_word_base_alias() {
        let lexicon = Lexicon::builtin();
        for language in Language::ALL {
            for lemma in lexicon.table(language).lemmas() {
                let alias = lexicon
                    .base()
                    .alias(lemma)
                    .unwrap_or_else(|| panic!("{language}: {lemma} has no base alias"));
                assert!(!alias.contains(' '), "{lemma}: alias {alias} is a phrase");
                assert_eq!(lexicon.base().lookup(alias).unwrap().lemma, lemma);
            }
        }
    }

    #[test]
    fn first_alias_maps_back_to_its_lemma() {
        let lexicon = Lexicon::builtin();
        for language in Language::ALL {
            let table = lexicon.table(language);
            for lemma in table.lemmas() {
                let alias = table.alias(lemma).unwrap();
                assert_eq!(table.lookup(&normalize_key(alias)).unwrap().lemma, lemma);
            }
        }
    }

    #[test]
    fn render_falls_back_to_base_alias() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.render("create", Language::Zh), "創建");
        // Japanese has no row for `drop`.
        assert_eq!(lexicon.render("drop", Language::Ja), "drop");
        assert_eq!(lexicon.render("unknown-lemma", Language::Ko), "unknown-lemma");
    }
}
