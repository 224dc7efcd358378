//! Canonical key tokens for the index trie.
//!
//! Every level of an [`IndexTree`](crate::index::IndexTree) is addressed by a
//! string token. Keys are not compared by type: a numeric key and a string key
//! collapse into the same slot when their canonical string forms match, so
//! `Key::from(1.0)` and `Key::from("1")` are the same token. Numeric
//! canonicalization follows the usual decimal rendering with three specials
//! (`NaN`, `Infinity`, `-Infinity`) and negative zero collapsing to `"0"`.

use crate::term::{BlankNode, Literal, NamedNode, Term, Variable};
use std::fmt;

/// A canonical key token. Construct via the `From` conversions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// The canonical string form of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return its canonical string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key(value.clone())
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key(value.to_owned())
    }
}

fn canonical_f64(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if value == 0.0 {
        // collapses -0 as well
        "0".to_owned()
    } else {
        // shortest round-trip form; integral values render without a fraction
        format!("{}", value)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key(canonical_f64(value))
    }
}

impl From<f32> for Key {
    fn from(value: f32) -> Self {
        Key(canonical_f64(value as f64))
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Key {
            fn from(value: $t) -> Self {
                Key(value.to_string())
            }
        }
    )*};
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

// Terms project onto their stable value string, so any term can serve as a
// component of a permutation index.

impl From<&NamedNode> for Key {
    fn from(node: &NamedNode) -> Self {
        Key(node.value().to_owned())
    }
}

impl From<&BlankNode> for Key {
    fn from(node: &BlankNode) -> Self {
        Key(node.value().to_owned())
    }
}

impl From<&Literal> for Key {
    fn from(literal: &Literal) -> Self {
        Key(literal.value().to_owned())
    }
}

impl From<&Variable> for Key {
    fn from(variable: &Variable) -> Self {
        Key(variable.value().to_owned())
    }
}

impl From<&Term> for Key {
    fn from(term: &Term) -> Self {
        Key(term.value().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_keys_collapse() {
        assert_eq!(Key::from(1), Key::from("1"));
        assert_eq!(Key::from(1.0), Key::from("1"));
        assert_eq!(Key::from(-42), Key::from("-42"));
        assert_eq!(Key::from(1.5), Key::from("1.5"));
    }

    #[test]
    fn non_finite_numbers_canonicalize() {
        assert_eq!(Key::from(f64::NAN).as_str(), "NaN");
        assert_eq!(Key::from(f64::INFINITY).as_str(), "Infinity");
        assert_eq!(Key::from(f64::NEG_INFINITY).as_str(), "-Infinity");
    }

    #[test]
    fn negative_zero_collapses() {
        assert_eq!(Key::from(-0.0).as_str(), "0");
        assert_eq!(Key::from(-0.0), Key::from(0));
    }

    #[test]
    fn term_keys_use_the_value_string() {
        let node = NamedNode::new("http://example.org/s").unwrap();
        assert_eq!(Key::from(&node).as_str(), "http://example.org/s");
        let term = Term::from(node);
        assert_eq!(Key::from(&term).as_str(), "http://example.org/s");
    }
}
