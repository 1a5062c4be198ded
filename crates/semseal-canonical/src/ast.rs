use crate::token::{TokenSequence, TokenType};
use serde::{Deserialize, Serialize};

/// Canonical tree over a token sequence.
///
/// The root is always a `SEQUENCE` whose children are `LEAF` nodes carrying
/// only `(token_type, canonical)`. Surface text never enters the tree, which
/// is what lets equivalent statements in different languages hash equally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalNode {
    /// Ordered list of children.
    Sequence {
        /// Child nodes in token order.
        children: Vec<CanonicalNode>,
    },
    /// One token's comparable content.
    Leaf {
        /// Semantic class.
        token_type: TokenType,
        /// Canonical lemma or verbatim identifier/value.
        canonical: String,
    },
}

impl CanonicalNode {
    /// Builds the tree for a token sequence, preserving order.
    pub fn build(tokens: &TokenSequence) -> Self {
        CanonicalNode::Sequence {
            children: tokens
                .iter()
                .map(|t| CanonicalNode::Leaf {
                    token_type: t.token_type(),
                    canonical: t.canonical().to_string(),
                })
                .collect(),
        }
    }

    /// Whether this is a `SEQUENCE` root of `LEAF` children only.
    pub fn is_well_formed(&self) -> bool {
        match self {
            CanonicalNode::Sequence { children } => children
                .iter()
                .all(|c| matches!(c, CanonicalNode::Leaf { .. })),
            CanonicalNode::Leaf { .. } => false,
        }
    }

    /// `(token_type, canonical)` pairs of the leaves, in order.
    pub fn leaves(&self) -> Vec<(TokenType, &str)> {
        match self {
            CanonicalNode::Sequence { children } => {
                children.iter().flat_map(|c| c.leaves()).collect()
            }
            CanonicalNode::Leaf {
                token_type,
                canonical,
            } => vec![(*token_type, canonical.as_str())],
        }
    }
}

/// Builds the canonical tree for a token sequence.
pub fn build(tokens: &TokenSequence) -> CanonicalNode {
    CanonicalNode::build(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    #[test]
    fn surface_text_is_not_part_of_the_tree() {
        let en = TokenSequence::new(vec![Token::new(TokenType::Action, "Created", "create")]);
        let zh = TokenSequence::new(vec![Token::new(TokenType::Action, "創建", "create")]);
        assert_eq!(build(&en), build(&zh));
    }

    #[test]
    fn serializes_with_type_tags() {
        let tokens = TokenSequence::new(vec![Token::new(TokenType::Entity, "users", "user")]);
        let value = serde_json::to_value(build(&tokens)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "SEQUENCE",
                "children": [{"type": "LEAF", "token_type": "ENTITY", "canonical": "user"}]
            })
        );
    }

    #[test]
    fn nested_sequences_are_not_well_formed() {
        let nested = CanonicalNode::Sequence {
            children: vec![CanonicalNode::Sequence { children: vec![] }],
        };
        assert!(!nested.is_well_formed());
        assert!(build(&TokenSequence::default()).is_well_formed());
    }
}
