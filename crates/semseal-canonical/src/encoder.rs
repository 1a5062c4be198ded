use canonical_json::to_string;

use crate::ast::CanonicalNode;
use std::fmt;

/// Error returned when a canonical tree cannot be encoded.
#[derive(thiserror::Error, Debug)]
pub enum EncodingError {
    /// The tree is not a `SEQUENCE` of `LEAF` nodes.
    #[error("invalid tree structure at {0}")]
    InvalidStructure(String),
    /// A leaf carries an empty or control-character canonical string.
    #[error("invalid canonical string at {0}")]
    InvalidCanonical(String),
    /// Serialization failure.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Helper for building tree paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("children[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Encodes a canonical tree to RFC 8785 JSON bytes.
///
/// Keys are sorted, no insignificant whitespace is emitted, and strings are
/// escaped the same way on every platform, so the output depends only on the
/// tree's content. Host locale and the order fields were populated in have
/// no effect.
pub fn to_canonical_json(node: &CanonicalNode) -> Result<Vec<u8>, EncodingError> {
    validate_root(node)?;
    let value =
        serde_json::to_value(node).map_err(|err| EncodingError::Serialization(err.to_string()))?;
    let canonical = to_string(&value).map_err(|err| EncodingError::Serialization(err.to_string()))?;
    Ok(canonical.into_bytes())
}

fn validate_root(node: &CanonicalNode) -> Result<(), EncodingError> {
    let path = Path::root();
    match node {
        CanonicalNode::Sequence { children } => {
            for (idx, child) in children.iter().enumerate() {
                validate_leaf(child, path.push_index(idx))?;
            }
            Ok(())
        }
        CanonicalNode::Leaf { .. } => Err(EncodingError::InvalidStructure(format!(
            "{}: expected SEQUENCE",
            path
        ))),
    }
}

fn validate_leaf(node: &CanonicalNode, path: Path) -> Result<(), EncodingError> {
    match node {
        CanonicalNode::Leaf { canonical, .. } => {
            if canonical.is_empty() || canonical.chars().any(char::is_control) {
                return Err(EncodingError::InvalidCanonical(format!("{}", path)));
            }
            Ok(())
        }
        CanonicalNode::Sequence { .. } => Err(EncodingError::InvalidStructure(format!(
            "{}: expected LEAF",
            path
        ))),
    }
}
