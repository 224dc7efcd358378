//! quadindex — an RDF term model and multi-depth keyed indexes, the lookup
//! backbone for a quad store.
//!
//! The centerpiece is [`IndexTree`], a fixed-arity trie mapping an ordered
//! tuple of keys to a value. A quad store keeps one tree per permutation
//! ordering (SPOG, POSG, OSPG, ...) over the same quads, so that a lookup
//! with any subset of components bound can pick the tree whose key order puts
//! the bound components first.
//!
//! Quick start: index some entries and query with a wildcard filter
//!
//! ```
//! use quadindex::{IndexTree, Key};
//!
//! let mut tree: IndexTree<String> = IndexTree::new(4).unwrap();
//! tree.add(&[1.into(), 2.into(), 3.into(), 4.into()], "hello".into()).unwrap();
//! tree.add(&[1.into(), 2.into(), 3.into(), 5.into()], "world".into()).unwrap();
//!
//! // keys are canonical string tokens, so 1 and "1" address the same slot
//! let keys: Vec<Key> = vec!["1".into(), "2".into(), "3".into(), "4".into()];
//! assert_eq!(tree.get(&keys).unwrap(), Some(&"hello".to_string()));
//!
//! // None matches any key at that position
//! let filter = [Some(Key::from(1)), Some(Key::from(2)), Some(Key::from(3)), None];
//! let mut matched: Vec<String> = tree.values(&filter).unwrap().cloned().collect();
//! matched.sort();
//! assert_eq!(matched, ["hello", "world"]);
//! ```
//!
//! Terms supply the key and value types of a quad store's indexes
//!
//! ```
//! use quadindex::{IndexTree, Key, NamedNode, Quad, Term, DefaultGraph};
//!
//! let quad = Quad::new(
//!     NamedNode::new("http://example.org/alice").unwrap().into(),
//!     NamedNode::new("http://xmlns.com/foaf/0.1/knows").unwrap().into(),
//!     NamedNode::new("http://example.org/bob").unwrap().into(),
//!     DefaultGraph.into(),
//! );
//!
//! let mut spog: IndexTree<Quad> = IndexTree::new(4).unwrap();
//! let keys = [
//!     Key::from(quad.subject()),
//!     Key::from(quad.predicate()),
//!     Key::from(quad.object()),
//!     Key::from(quad.graph()),
//! ];
//! assert!(spog.add(&keys, quad).unwrap());
//! ```

pub mod errors;
pub mod index;
pub mod key;
pub mod term;
pub mod vocab;

pub use errors::{IndexError, Result, TermError};
pub use index::{Anything, Entries, IndexTree, Keys, Policy, Values};
pub use key::Key;
pub use term::{BlankNode, DefaultGraph, Literal, NamedNode, Quad, Term, Variable};
