//! Trie node representation.
//!
//! This module provides [TrieNode], the node type of the prefix trie. Each
//! node carries an occurrence count and an ordered collection of child nodes
//! keyed by a single input byte. The tree is acyclic and owned root-down;
//! no node is shared or weakly referenced.

use std::collections::BTreeMap;

// =#========================================================================#=
// TRIE NODE
// =#========================================================================#=
/// A node of the prefix trie.
///
/// A node represents some prefix common to all strings counted below it.
/// It holds the number of ingested strings whose path passes through it
/// (including strings that terminate exactly here) and a map of continuations
/// keyed by the next input byte.
///
/// # Ordering
/// Children are kept in a [BTreeMap], so iteration yields them in ascending
/// byte order. This is the trie's natural display order; frequency-based
/// display orders are computed on top of it at render time.
///
/// # Invariants
/// - `count(node) >= sum of count(child) over all children`; equality holds
///   exactly when no ingested string terminates at `node`.
/// - A child entry exists only if its `count > 0`: children are created
///   lazily on first traversal and never pruned, and no count ever decreases.
/// - `count(root)` equals the total number of ingested strings; empty strings
///   increment only the root.
///
/// Nodes are constructed through [TrieBuilder](crate::model::TrieBuilder);
/// after construction the tree is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Number of ingested strings passing through this node
    count: usize,

    /// Continuations, keyed by the next input byte
    children: BTreeMap<u8, TrieNode>,
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl TrieNode {
    /// Returns the number of ingested strings whose path passes through this
    /// node, including those terminating exactly here.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the children of this node in ascending byte order.
    pub fn children(&self) -> &BTreeMap<u8, TrieNode> {
        &self.children
    }

    /// Returns the child keyed by `unit`, or `None` if no ingested string
    /// continues with that byte here.
    pub fn child(&self, unit: u8) -> Option<&TrieNode> {
        self.children.get(&unit)
    }

    /// Returns whether this node has no continuations.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the node reached by walking `path` from this node,
    /// or `None` if some byte of `path` has no matching child.
    ///
    /// The empty path returns this node itself.
    ///
    /// # Example
    /// ```
    /// use stree::build_from_lines;
    ///
    /// let root = build_from_lines(["foo", "bar", "baz"]);
    /// assert_eq!(root.descend(b"ba").map(|n| n.count()), Some(2));
    /// assert_eq!(root.descend(b"qux"), None);
    /// ```
    pub fn descend(&self, path: &[u8]) -> Option<&TrieNode> {
        let mut node = self;
        for &unit in path {
            node = node.child(unit)?;
        }
        Some(node)
    }

    /// Returns the sum of the children's counts.
    ///
    /// Strictly less than `count()` exactly when one or more ingested strings
    /// terminate at this node.
    pub fn child_count_sum(&self) -> usize {
        self.children.values().map(|child| child.count).sum()
    }

    /// Returns the number of nodes in the subtree rooted here, including
    /// this node itself.
    pub fn num_nodes(&self) -> usize {
        1 + self.children.values().map(|child| child.num_nodes()).sum::<usize>()
    }
}

// ============================================================================
// Construction (crate-internal, used by TrieBuilder)
// ============================================================================
impl TrieNode {
    /// Creates an empty node with count zero.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Increments this node's count by one.
    pub(crate) fn bump(&mut self) {
        self.count += 1;
    }

    /// Returns the child keyed by `unit`, creating it with count zero if it
    /// does not exist yet.
    pub(crate) fn child_or_insert(&mut self, unit: u8) -> &mut TrieNode {
        self.children.entry(unit).or_default()
    }
}
