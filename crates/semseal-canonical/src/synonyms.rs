//! Second normalization pass: synonym equivalence over lexicon lemmas.
//!
//! The lexicon keeps fine-grained lemmas (`add`, `register`, `create`); this
//! table folds each synonym family onto one representative so that every
//! phrasing of the same operation yields the same canonical sequence.

use crate::language::{detect, Language};
use crate::token::{TokenSequence, TokenType};
use crate::tokenizer::Tokenizer;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Fine lemma → representative lemma. Lemmas not listed map to themselves.
const SYNONYMS: &[(&str, &str)] = &[
    ("add", "create"),
    ("register", "create"),
    ("remove", "delete"),
    ("drop", "delete"),
    ("modify", "update"),
    ("edit", "update"),
    ("change", "update"),
    ("reboot", "restart"),
    ("reload", "restart"),
    ("launch", "start"),
    ("kill", "stop"),
    ("release", "deploy"),
    ("account", "user"),
    ("member", "user"),
    ("host", "server"),
    ("db", "database"),
    ("folder", "directory"),
    ("setting", "config"),
    ("job", "task"),
];

fn synonym_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYNONYMS.iter().copied().collect())
}

/// Maps token lemmas through the synonym table and renders normalized text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonicalizer {
    tokenizer: Tokenizer,
}

impl Canonicalizer {
    /// Creates a canonicalizer around a tokenizer.
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Tokenizer in use.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Representative lemma for `lemma`.
    pub fn representative(lemma: &str) -> &str {
        synonym_table().get(lemma).copied().unwrap_or(lemma)
    }

    /// Remaps every ACTION and ENTITY lemma to its representative.
    pub fn normalize(&self, tokens: &TokenSequence) -> TokenSequence {
        tokens
            .iter()
            .map(|token| match token.token_type() {
                TokenType::Action | TokenType::Entity => {
                    token.remapped(Self::representative(token.canonical()))
                }
                _ => token.clone(),
            })
            .collect()
    }

    /// Detects (when `language` is `None`), tokenizes, normalizes, and renders
    /// the statement in the base language.
    ///
    /// Idempotent, and identical across every phrasing in a synonym family.
    pub fn canonicalize(&self, text: &str, language: Option<Language>) -> String {
        let language = language.unwrap_or_else(|| detect(text));
        let tokenization = self.tokenizer.tokenize(text, language);
        let normalized = self.normalize(&tokenization.tokens);
        self.tokenizer.detokenize(&normalized, Language::BASE)
    }
}

/// Canonicalizes with the built-in lexicon.
pub fn canonicalize(text: &str, language: Option<Language>) -> String {
    Canonicalizer::default().canonicalize(text, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use proptest::prelude::*;

    #[test]
    fn synonym_families_collapse() {
        let expected = canonicalize("create user alice", Some(Language::En));
        assert_eq!(expected, "create user");
        for text in ["add user alice", "register account alice", "Added a member"] {
            assert_eq!(canonicalize(text, None), expected, "{text}");
        }
        assert_eq!(canonicalize("新增用戶 alice", None), expected);
    }

    #[test]
    fn identifiers_survive_canonicalization() {
        assert_eq!(
            canonicalize("註冊使用者 carol@example.com", None),
            "create user carol@example.com"
        );
    }

    #[test]
    fn conditions_are_not_remapped() {
        assert_eq!(
            canonicalize("when the job fails, reboot the host", None),
            "when task restart server"
        );
    }

    #[test]
    fn representatives_are_fixed_points() {
        for (_, representative) in SYNONYMS {
            assert_eq!(Canonicalizer::representative(representative), *representative);
            assert!(Lexicon::builtin().base().alias(representative).is_some());
        }
    }

    #[test]
    fn original_lemma_is_kept_as_attribute() {
        let tokens = crate::tokenize("reboot", Language::En).tokens;
        let normalized = Canonicalizer::default().normalize(&tokens);
        let token = &normalized.as_slice()[0];
        assert_eq!(token.canonical(), "restart");
        assert_eq!(token.attributes().get("lemma").map(String::as_str), Some("reboot"));
    }

    const VOCABULARY: &[&str] = &[
        "create", "add", "用戶", "削除", "사용자", "restart", "the", "alice",
        "bob@example.com", "42", "/etc/hosts", "if", "之後", "サーバー", "백업", "we",
    ];

    proptest! {
        #[test]
        fn canonicalize_is_idempotent(words in prop::collection::vec(prop::sample::select(VOCABULARY), 0..8)) {
            let text = words.join(" ");
            let once = canonicalize(&text, None);
            let twice = canonicalize(&once, None);
            prop_assert_eq!(once, twice);
        }
    }
}
