//! A "special AVL" tree. It keeps every key in a sorted list and, instead of rotating nodes after
//! an insert or delete, throws the whole node graph away and builds a perfectly balanced one from
//! the list again.
//!
//! The rebuild makes every mutation `O(N)` (plus an `O(lg N)` search of the sorted list) where an
//! AVL tree would be `O(lg N)`. In exchange the tree is balanced after every mutation by
//! construction: each node is the upper midpoint (see [`upper_mid`]) of the keys in its subtree,
//! so its two subtrees hold the same number of keys, give or take one.
//!
//! # Examples
//!
//! ```
//! use midpoint_bst::rebuild::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! for key in [3, 1, 2] {
//!     tree.insert(key);
//! }
//! assert!(tree.contains(&1));
//!
//! // Inserting a key twice does nothing the second time.
//! assert!(!tree.insert(2));
//!
//! // The upper middle of [1, 2, 3] is the root.
//! assert_eq!(tree.root().map(|n| *n.key()), Some(2));
//!
//! // Search paths remember every node they visited.
//! let path = tree.search_path(&3);
//! assert_eq!(path.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
//! assert!(path.found(&3));
//!
//! // Deleting a key rebuilds the tree around the remaining keys.
//! assert!(tree.remove(&2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(3));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::keys::SortedKeys;
use crate::midpoint::upper_mid;

/// A height-balanced Binary Search Tree over unique keys, rebuilt from a sorted list after every
/// mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    keys: SortedKeys<K>,
    root: Option<Box<Node<K>>>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            keys: SortedKeys::new(),
            root: None,
        }
    }

    /// Builds a balanced tree holding `keys`. The keys don't have to be sorted and duplicates are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use midpoint_bst::rebuild::Tree;
    ///
    /// let tree = Tree::from_keys(vec![1, 2, 3, 4]);
    ///
    /// // The upper middle of four keys is the third one.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self
    where
        K: Ord + Clone,
    {
        let mut tree = Self {
            keys: keys.into_iter().collect(),
            root: None,
        };
        tree.rebuild();
        tree
    }

    /// Inserts `key` into the tree and rebuilds it. Inserting a key that is already present does
    /// nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use midpoint_bst::rebuild::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord + Clone,
    {
        if !self.keys.insert(key) {
            tracing::trace!("duplicate key ignored");
            return false;
        }

        self.rebuild();
        true
    }

    /// Removes `key` from the tree and rebuilds it. Removing a key that isn't present does nothing
    /// and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use midpoint_bst::rebuild::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.root().is_none());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord + Clone,
    {
        if !self.keys.remove(key) {
            tracing::trace!("missing key ignored");
            return false;
        }

        self.rebuild();
        true
    }

    /// Whether `key` is in the tree. This walks the nodes from the root like any BST lookup rather
    /// than searching the sorted key list.
    ///
    /// # Examples
    ///
    /// ```
    /// use midpoint_bst::rebuild::Tree;
    ///
    /// let tree = Tree::from_keys(vec![1, 2]);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Descends from the root towards `key` like [`contains`][Tree::contains], recording every
    /// node it visits. The walk stops at the node holding `key` or, if there is none, at the last
    /// node before the child it needed was missing.
    ///
    /// The returned path borrows the tree so it has to be used before the tree changes again.
    ///
    /// # Examples
    ///
    /// ```
    /// use midpoint_bst::rebuild::Tree;
    ///
    /// let tree = Tree::from_keys(vec![1, 2, 3]);
    ///
    /// let path = tree.search_path(&4);
    /// assert_eq!(path.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
    /// assert!(!path.found(&4));
    /// ```
    pub fn search_path(&self, key: &K) -> SearchPath<'_, K>
    where
        K: Ord,
    {
        let mut nodes = Vec::with_capacity(self.height());
        let mut current = self.root();
        while let Some(node) = current {
            nodes.push(node);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => break,
                Ordering::Greater => node.right(),
            };
        }

        SearchPath { nodes }
    }

    /// The root node, if the tree has any keys. Use it to walk the tree's structure.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The keys of the tree in ascending order.
    pub fn keys(&self) -> &[K] {
        self.keys.as_slice()
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// How many levels are in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Iterates over the keys by walking the nodes in order (left subtree, node, right subtree).
    /// The keys come out ascending.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Collects the keys from an in-order walk of the nodes.
    pub fn inorder(&self) -> Vec<&K> {
        self.iter().collect()
    }

    fn rebuild(&mut self)
    where
        K: Clone,
    {
        self.root = Node::build(self.keys.as_slice());
        tracing::debug!(keys = self.keys.len(), height = self.height(), "rebuilt tree");
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds the tree in one go, the same as [`Tree::from_keys`].
impl<K> FromIterator<K> for Tree<K>
where
    K: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

/// Prints the in-order keys separated by spaces.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// A `Node` has a key and up to two children, each of which it owns outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, whose keys are all smaller.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, whose keys are all larger.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Builds a balanced subtree out of the ascending `sorted` keys. The root is the upper middle
    /// key; everything before it becomes the left subtree and everything after it the right.
    ///
    /// Working on subslices is the same as working on an inclusive range `[lo, hi]` of the whole
    /// list: `upper_mid(0, hi - lo)` is exactly `upper_mid(lo, hi) - lo`.
    fn build(sorted: &[K]) -> Option<Box<Self>>
    where
        K: Clone,
    {
        if sorted.is_empty() {
            return None;
        }

        let mid = upper_mid(0, sorted.len() - 1);
        let left = Self::build(&sorted[..mid]);
        let right = Self::build(&sorted[mid + 1..]);
        let (left_height, right_height) = (height(&left), height(&right));

        // In tests, assert that the two halves really came out balanced.
        if cfg!(test) {
            assert!((left_height as isize - right_height as isize).abs() <= 1);
        }

        Some(Box::new(Self {
            key: sorted[mid].clone(),
            left,
            right,
            height: left_height.max(right_height) + 1,
        }))
    }
}

fn height<K>(node: &Option<Box<Node<K>>>) -> usize {
    node.as_ref().map_or(0, |n| n.height)
}

/// The nodes visited by [`Tree::search_path`], in visitation order.
#[derive(Debug)]
pub struct SearchPath<'a, K> {
    nodes: Vec<&'a Node<K>>,
}

impl<K> Clone for SearchPath<'_, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<'a, K> SearchPath<'a, K> {
    /// Whether the search for `key` succeeded, i.e. whether the last visited node holds `key`.
    pub fn found(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.last().is_some_and(|n| n.key == *key)
    }

    /// The visited nodes, starting with the root.
    pub fn nodes(&self) -> &[&'a Node<K>] {
        &self.nodes
    }

    /// The keys of the visited nodes, starting with the root's.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + '_ {
        self.nodes.iter().map(|&n| n.key())
    }

    /// The last node visited.
    pub fn last(&self) -> Option<&'a Node<K>> {
        self.nodes.last().copied()
    }

    /// Whether `node` was visited. Nodes are compared by identity, not by key.
    pub fn contains(&self, node: &Node<K>) -> bool {
        self.nodes.iter().any(|n| std::ptr::eq(*n, node))
    }

    /// How many nodes were visited.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes were visited, which only happens on an empty tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a, K> IntoIterator for SearchPath<'a, K> {
    type Item = &'a Node<K>;
    type IntoIter = std::vec::IntoIter<&'a Node<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}
