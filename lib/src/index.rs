//! A fixed-depth keyed index, the lookup backbone for permutation indexes.
//!
//! An [`IndexTree`] maps an ordered tuple of exactly `depth` keys to a value.
//! Internally it is a trie of [`Key`] tokens: every level below the root is a
//! branch map until the final key position, which holds the stored value. A
//! quad store keeps one tree per permutation ordering (SPOG, POSG, ...) so
//! that lookups with any subset of components bound stay cheap.
//!
//! Point operations (`has`/`get`/`add`/`set`/`delete`) address one entry by a
//! full key tuple. The filtered iterators (`entries`/`keys`/`values`) walk
//! every entry matching a partial filter, with `None` as a wildcard.
//!
//! ```
//! use quadindex::{IndexTree, Key};
//!
//! let mut tree: IndexTree<&str> = IndexTree::new(4).unwrap();
//! tree.add(&[1.into(), 2.into(), 3.into(), 4.into()], "hello").unwrap();
//! tree.add(&[1.into(), 2.into(), 3.into(), 5.into()], "world").unwrap();
//!
//! // numeric and string keys collapse into the same canonical token
//! let keys: Vec<Key> = vec!["1".into(), "2".into(), "3".into(), "4".into()];
//! assert_eq!(tree.get(&keys).unwrap(), Some(&"hello"));
//!
//! // a short filter is wildcard-padded on the trailing positions
//! let filter = [Some(Key::from(1)), Some(Key::from(2))];
//! assert_eq!(tree.values(&filter).unwrap().count(), 2);
//! ```

use crate::errors::{IndexError, Result};
use crate::key::Key;
use log::{debug, trace};
use std::collections::HashMap;

/// Validation capability an [`IndexTree`] is parameterized over.
///
/// Both hooks default to accept-all; implement the ones you need. The policy
/// is consulted on every `add`/`set`, never on reads.
pub trait Policy<V> {
    /// Whether a key may be stored at any position of the tree.
    fn valid_key(&self, key: &Key) -> bool {
        let _ = key;
        true
    }

    /// Whether a value may be stored in the tree.
    fn valid_value(&self, value: &V) -> bool {
        let _ = value;
        true
    }
}

/// The default policy: accepts every key and every value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Anything;

impl<V> Policy<V> for Anything {}

/// Trie node: branches at every level except the final key position.
#[derive(Debug, Clone)]
enum Node<V> {
    Branch(HashMap<String, Node<V>>),
    Leaf(V),
}

/// A multi-depth keyed index mapping tuples of `depth` keys to values.
///
/// `size` counts stored values only, never internal nodes, and is maintained
/// incrementally. No branch is ever left empty: `delete` prunes every
/// ancestor emptied by a removal.
#[derive(Debug)]
pub struct IndexTree<V, P = Anything> {
    depth: usize,
    size: usize,
    root: HashMap<String, Node<V>>,
    policy: P,
}

impl<V> IndexTree<V> {
    /// Create an empty tree addressed by `depth` keys per entry.
    ///
    /// Fails with [`IndexError::InvalidConfiguration`] if `depth` is zero.
    pub fn new(depth: usize) -> Result<Self> {
        Self::with_policy(depth, Anything)
    }
}

impl<V, P: Policy<V>> IndexTree<V, P> {
    /// Like [`IndexTree::new`], with a custom key/value validation policy.
    pub fn with_policy(depth: usize, policy: P) -> Result<Self> {
        if depth == 0 {
            return Err(IndexError::InvalidConfiguration(
                "expected the depth to be an integer > 0".to_owned(),
            ));
        }
        debug!("creating index tree with depth {}", depth);
        Ok(IndexTree {
            depth,
            size: 0,
            root: HashMap::new(),
            policy,
        })
    }

    /// The number of keys necessary to address one entry.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The number of stored entries.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn split_keys<'k>(&self, keys: &'k [Key]) -> Result<(&'k [Key], &'k Key)> {
        if keys.len() != self.depth {
            return Err(IndexError::ArityMismatch {
                expected: self.depth,
                actual: keys.len(),
            });
        }
        match keys.split_last() {
            Some((last, prefix)) => Ok((prefix, last)),
            // depth > 0 is guaranteed at construction
            None => Err(IndexError::ArityMismatch {
                expected: self.depth,
                actual: 0,
            }),
        }
    }

    fn check_keys(&self, keys: &[Key]) -> Result<()> {
        for (position, key) in keys.iter().enumerate() {
            if !self.policy.valid_key(key) {
                return Err(IndexError::InvalidKey {
                    position,
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }

    fn leaf_at(&self, prefix: &[Key], last: &Key) -> Option<&V> {
        let mut branch = &self.root;
        for key in prefix {
            match branch.get(key.as_str()) {
                Some(Node::Branch(children)) => branch = children,
                _ => return None,
            }
        }
        match branch.get(last.as_str()) {
            Some(Node::Leaf(value)) => Some(value),
            _ => None,
        }
    }

    /// Descend to the branch holding the final key position, creating missing
    /// intermediate branches along the way.
    fn branch_for_insert(&mut self, prefix: &[Key]) -> &mut HashMap<String, Node<V>> {
        let mut branch = &mut self.root;
        for key in prefix {
            let node = branch
                .entry(key.as_str().to_owned())
                .or_insert_with(|| Node::Branch(HashMap::new()));
            match node {
                Node::Branch(children) => branch = children,
                // leaves only ever sit at the final key position
                Node::Leaf(_) => unreachable!("leaf node above the final key position"),
            }
        }
        branch
    }

    /// Whether a value is stored under exactly these keys.
    ///
    /// Fails with [`IndexError::ArityMismatch`] unless exactly `depth` keys
    /// are given. A missing path is `Ok(false)`, not an error.
    pub fn has(&self, keys: &[Key]) -> Result<bool> {
        let (prefix, last) = self.split_keys(keys)?;
        Ok(self.leaf_at(prefix, last).is_some())
    }

    /// The value stored under these keys, or `None` if the path is absent.
    pub fn get(&self, keys: &[Key]) -> Result<Option<&V>> {
        let (prefix, last) = self.split_keys(keys)?;
        Ok(self.leaf_at(prefix, last))
    }

    /// Store a value without overwriting an existing one.
    ///
    /// Returns `Ok(true)` if the entry was freshly inserted, `Ok(false)` if a
    /// value already existed (and is left untouched). Keys and value are
    /// checked against the policy before any mutation.
    pub fn add(&mut self, keys: &[Key], value: V) -> Result<bool> {
        let (prefix, last) = self.split_keys(keys)?;
        self.check_keys(keys)?;
        if !self.policy.valid_value(&value) {
            return Err(IndexError::InvalidValue);
        }

        let branch = self.branch_for_insert(prefix);
        if branch.contains_key(last.as_str()) {
            return Ok(false);
        }
        branch.insert(last.as_str().to_owned(), Node::Leaf(value));
        self.size += 1;
        trace!("added entry, {} stored", self.size);
        Ok(true)
    }

    /// Store a value, overwriting an existing one if necessary.
    ///
    /// Returns `Ok(true)` if a prior value existed and was replaced,
    /// `Ok(false)` on a fresh insertion. Note the inverse polarity of
    /// [`IndexTree::add`].
    pub fn set(&mut self, keys: &[Key], value: V) -> Result<bool> {
        let (prefix, last) = self.split_keys(keys)?;
        self.check_keys(keys)?;
        if !self.policy.valid_value(&value) {
            return Err(IndexError::InvalidValue);
        }

        let branch = self.branch_for_insert(prefix);
        let existed = branch
            .insert(last.as_str().to_owned(), Node::Leaf(value))
            .is_some();
        if !existed {
            self.size += 1;
        }
        trace!("set entry, {} stored", self.size);
        Ok(existed)
    }

    /// Remove the value stored under these keys.
    ///
    /// Returns `Ok(false)` if any prefix of the path is missing. On removal,
    /// every ancestor branch left empty is pruned, nearest first, stopping at
    /// the first ancestor that retains another child.
    pub fn delete(&mut self, keys: &[Key]) -> Result<bool> {
        let (prefix, last) = self.split_keys(keys)?;
        let removed = remove_and_prune(&mut self.root, prefix, last);
        if removed {
            self.size -= 1;
            trace!("deleted entry, {} stored", self.size);
        }
        Ok(removed)
    }

    fn compile_filter(&self, filter: &[Option<Key>]) -> Result<Vec<Option<Key>>> {
        if filter.len() > self.depth {
            return Err(IndexError::ArityMismatch {
                expected: self.depth,
                actual: filter.len(),
            });
        }
        let mut compiled = filter.to_vec();
        // trailing positions left out of the filter match any key
        compiled.resize(self.depth, None);
        Ok(compiled)
    }

    /// Iterate over `(keys, value)` pairs matching the filter.
    ///
    /// `None` at a position matches any key; `Some(key)` matches exactly that
    /// canonical token. A filter shorter than the depth is wildcard-padded on
    /// the trailing positions; one longer than the depth is an
    /// [`IndexError::ArityMismatch`]. The yielded key tuples are the concrete
    /// keys actually matched, with wildcards resolved.
    ///
    /// Each call computes a fresh, lazy traversal. The traversal order is
    /// unspecified but repeats as long as the tree is not mutated, so
    /// [`IndexTree::keys`] and [`IndexTree::values`] over the same filter
    /// align with the entries element for element.
    pub fn entries(&self, filter: &[Option<Key>]) -> Result<Entries<'_, V>> {
        Ok(Entries::new(&self.root, self.compile_filter(filter)?))
    }

    /// Iterate over the concrete key tuples matching the filter.
    pub fn keys(&self, filter: &[Option<Key>]) -> Result<Keys<'_, V>> {
        Ok(Keys(self.entries(filter)?))
    }

    /// Iterate over the values matching the filter.
    pub fn values(&self, filter: &[Option<Key>]) -> Result<Values<'_, V>> {
        Ok(Values(self.entries(filter)?))
    }
}

/// Remove the leaf addressed by `prefix + last`, pruning emptied branches on
/// the way back up. Returns whether a value was removed.
fn remove_and_prune<V>(
    branch: &mut HashMap<String, Node<V>>,
    prefix: &[Key],
    last: &Key,
) -> bool {
    match prefix.split_first() {
        None => match branch.get(last.as_str()) {
            Some(Node::Leaf(_)) => {
                branch.remove(last.as_str());
                true
            }
            _ => false,
        },
        Some((head, rest)) => {
            let Some(Node::Branch(children)) = branch.get_mut(head.as_str()) else {
                return false;
            };
            let removed = remove_and_prune(children, rest, last);
            if removed && children.is_empty() {
                branch.remove(head.as_str());
            }
            removed
        }
    }
}

/// Lazy depth-first traversal over the entries matching a filter.
#[derive(Debug)]
pub struct Entries<'a, V> {
    filter: Vec<Option<Key>>,
    stack: Vec<(Vec<Key>, &'a Node<V>)>,
}

impl<'a, V> Entries<'a, V> {
    fn new(root: &'a HashMap<String, Node<V>>, filter: Vec<Option<Key>>) -> Self {
        let mut entries = Entries {
            filter,
            stack: Vec::new(),
        };
        entries.push_matches(Vec::new(), root);
        entries
    }

    fn push_matches(&mut self, prefix: Vec<Key>, branch: &'a HashMap<String, Node<V>>) {
        match &self.filter[prefix.len()] {
            Some(key) => {
                if let Some(child) = branch.get(key.as_str()) {
                    let mut path = prefix;
                    path.push(key.clone());
                    self.stack.push((path, child));
                }
            }
            None => {
                for (token, child) in branch {
                    let mut path = prefix.clone();
                    path.push(Key::from(token));
                    self.stack.push((path, child));
                }
            }
        }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (Vec<Key>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                Node::Leaf(value) => return Some((path, value)),
                Node::Branch(children) => self.push_matches(path, children),
            }
        }
        None
    }
}

/// Lazy traversal over the concrete key tuples matching a filter.
pub struct Keys<'a, V>(Entries<'a, V>);

impl<V> Iterator for Keys<'_, V> {
    type Item = Vec<Key>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(keys, _)| keys)
    }
}

/// Lazy traversal over the values matching a filter.
pub struct Values<'a, V>(Entries<'a, V>);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(parts: &[&str]) -> Vec<Key> {
        parts.iter().map(|&p| Key::from(p)).collect()
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(matches!(
            IndexTree::<()>::new(0),
            Err(IndexError::InvalidConfiguration(_))
        ));
        assert!(IndexTree::<()>::new(1).is_ok());
        assert!(IndexTree::<()>::new(usize::MAX).is_ok());
    }

    #[test]
    fn shared_prefixes_survive_partial_deletion() {
        let mut tree: IndexTree<u32> = IndexTree::new(4).unwrap();
        tree.add(&keys(&["a", "b", "c", "d"]), 1).unwrap();
        tree.add(&keys(&["a", "b", "e", "f"]), 2).unwrap();

        assert!(tree.delete(&keys(&["a", "b", "c", "d"])).unwrap());
        // the shared a -> b branch is retained, only c -> d is pruned
        assert_eq!(tree.root.len(), 1);
        assert!(tree.has(&keys(&["a", "b", "e", "f"])).unwrap());
        assert!(!tree.has(&keys(&["a", "b", "c", "d"])).unwrap());

        assert!(tree.delete(&keys(&["a", "b", "e", "f"])).unwrap());
        // last entry under "a" gone, the whole branch is pruned
        assert!(tree.root.is_empty());
        assert_eq!(tree.size(), 0);
    }

    #[test]
    fn delete_on_missing_prefix_is_a_noop() {
        let mut tree: IndexTree<u32> = IndexTree::new(2).unwrap();
        tree.add(&keys(&["a", "b"]), 1).unwrap();
        assert!(!tree.delete(&keys(&["x", "b"])).unwrap());
        assert!(!tree.delete(&keys(&["a", "x"])).unwrap());
        assert_eq!(tree.size(), 1);
    }

    struct ShortKeys;

    impl Policy<u32> for ShortKeys {
        fn valid_key(&self, key: &Key) -> bool {
            key.as_str().len() <= 3
        }

        fn valid_value(&self, value: &u32) -> bool {
            *value < 100
        }
    }

    #[test]
    fn policy_rejections_surface_as_errors() {
        let mut tree = IndexTree::with_policy(2, ShortKeys).unwrap();
        assert!(tree.add(&keys(&["ab", "cd"]), 7).unwrap());

        let err = tree.add(&keys(&["ab", "toolong"]), 7).unwrap_err();
        assert!(matches!(err, IndexError::InvalidKey { position: 1, .. }));

        let err = tree.add(&keys(&["ab", "ef"]), 1000).unwrap_err();
        assert_eq!(err, IndexError::InvalidValue);

        // a rejected insert leaves no residue behind
        assert_eq!(tree.size(), 1);
        assert!(!tree.has(&keys(&["ab", "ef"])).unwrap());
    }

    #[test]
    fn over_long_filter_is_an_arity_mismatch() {
        let tree: IndexTree<u32> = IndexTree::new(2).unwrap();
        let filter = vec![None, None, None];
        assert!(matches!(
            tree.entries(&filter),
            Err(IndexError::ArityMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }
}
