use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Semantic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// Verb-like operation (`create`, `restart`).
    Action,
    /// Object the action applies to (`user`, `service`).
    Entity,
    /// Structured name reserved verbatim (email, URL, path).
    Identifier,
    /// Bare numeric literal.
    Value,
    /// Conditional or temporal qualifier (`if`, `after`).
    Condition,
}

impl TokenType {
    /// Returns the wire name (`ACTION`, `ENTITY`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Action => "ACTION",
            TokenType::Entity => "ENTITY",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Value => "VALUE",
            TokenType::Condition => "CONDITION",
        }
    }

    /// Whether tokens of this type come from the lexicon (as opposed to
    /// reserved structured spans that pass through verbatim).
    pub fn is_lexical(self) -> bool {
        matches!(
            self,
            TokenType::Action | TokenType::Entity | TokenType::Condition
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed semantic unit. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    token_type: TokenType,
    surface: String,
    canonical: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl Token {
    /// Creates a token with no attributes.
    pub fn new(
        token_type: TokenType,
        surface: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        Self {
            token_type,
            surface: surface.into(),
            canonical: canonical.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Returns a copy of this token carrying an extra attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this token with a different canonical lemma.
    ///
    /// The surface text and attributes are kept; the previous lemma is
    /// recorded under the `lemma` attribute when it changes.
    pub fn remapped(&self, canonical: &str) -> Self {
        let mut token = self.clone();
        if token.canonical != canonical {
            token
                .attributes
                .insert("lemma".to_string(), token.canonical.clone());
            token.canonical = canonical.to_string();
        }
        token
    }

    /// Semantic class.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Text as it appeared in the (normalized) input.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Language-neutral canonical form.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Open attribute map (e.g. `kind = email`).
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

/// Ordered token list; order is semantically significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    /// Creates a sequence from tokens in input order.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence carries no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Borrow the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// The comparable part of the sequence: `(type, canonical)` pairs.
    pub fn canonical_forms(&self) -> Vec<(TokenType, &str)> {
        self.0
            .iter()
            .map(|t| (t.token_type(), t.canonical()))
            .collect()
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
