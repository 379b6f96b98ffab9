//! Sequential construction of the prefix trie.
//!
//! This module provides [TrieBuilder], which ingests one string at a time,
//! walking and extending the tree while incrementing counts along the path.
//! Construction and rendering are two strictly sequential phases: build the
//! whole trie first with a builder, then hand the root over with
//! [TrieBuilder::finish] and render it.

use crate::model::TrieNode;
use std::io::{self, BufRead};

// =#========================================================================#=
// TRIE BUILDER
// =#========================================================================#=
/// Builder that grows a [TrieNode] tree from a sequence of byte strings.
///
/// Ingestion is total: any byte sequence is accepted, including the empty
/// one, which increments only the root. The tree grows monotonically; no
/// child mapping is ever removed and no count ever decreases.
///
/// Input strings are treated as opaque byte sequences. No character
/// segmentation is applied; a multi-byte encoded character simply occupies
/// several trie levels, which chain compaction folds back together at
/// render time.
///
/// # Example
/// ```
/// use stree::model::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.ingest(b"foo");
/// builder.ingest(b"bar");
/// builder.ingest(b"baz");
///
/// let root = builder.finish();
/// assert_eq!(root.count(), 3);
/// assert_eq!(root.descend(b"ba").map(|n| n.count()), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TrieNode,
}

impl TrieBuilder {
    /// Creates a builder holding an empty trie.
    pub fn new() -> Self {
        Self { root: TrieNode::new() }
    }

    /// Ingests a single string, incrementing the count of every node on its
    /// path from the root and creating missing nodes along the way.
    ///
    /// The empty string increments only the root.
    pub fn ingest(&mut self, s: &[u8]) {
        self.root.bump();
        let mut current = &mut self.root;
        for &unit in s {
            current = current.child_or_insert(unit);
            current.bump();
        }
    }

    /// Ingests every line of `reader`, one string per line.
    ///
    /// Lines are split on `\n`; the terminator is not part of the ingested
    /// string and no other byte (such as `\r`) is stripped. A final line
    /// without a terminator still counts; a blank line is ingested as the
    /// empty string.
    ///
    /// # Errors
    /// Returns an I/O error if reading from `reader` fails. Lines ingested
    /// before the failure remain counted.
    pub fn ingest_lines<R: BufRead>(&mut self, mut reader: R) -> io::Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(());
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            self.ingest(&line);
        }
    }

    /// Returns the number of strings ingested so far.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Returns whether no string has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the builder and returns the root of the finished trie.
    pub fn finish(self) -> TrieNode {
        self.root
    }
}
