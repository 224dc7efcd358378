// Error types for index operations and term construction.
//
// All of these signal contract violations at the call site; none are
// transient. Missing entries are reported through return values
// (false / None), never through an error.

use crate::key::Key;
use std::fmt;

/// Errors raised by [`IndexTree`](crate::index::IndexTree) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The tree was constructed with an unusable configuration.
    InvalidConfiguration(String),
    /// An operation received a key count different from the tree depth.
    ArityMismatch { expected: usize, actual: usize },
    /// A key was rejected by the configured policy.
    InvalidKey { position: usize, key: Key },
    /// A value was rejected by the configured policy.
    InvalidValue,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidConfiguration(m) => write!(f, "{}", m),
            IndexError::ArityMismatch { expected, actual } => {
                let noun = if *expected == 1 { "key" } else { "keys" };
                let only = if actual < expected { "only " } else { "" };
                write!(
                    f,
                    "expected to get {} {} but got {}{}",
                    expected, noun, only, actual
                )
            }
            IndexError::InvalidKey { position, key } => {
                write!(f, "key {:?} at position {} failed validation", key.as_str(), position)
            }
            IndexError::InvalidValue => write!(f, "value failed validation"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised when constructing RDF terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// The value given for a named node is not an absolute IRI.
    InvalidIri(String),
    /// A term kind that requires a nonempty value got an empty one.
    EmptyValue(&'static str),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::InvalidIri(value) => write!(f, "not an absolute IRI: {:?}", value),
            TermError::EmptyValue(kind) => write!(f, "expected a nonempty value for {}", kind),
        }
    }
}

impl std::error::Error for TermError {}
