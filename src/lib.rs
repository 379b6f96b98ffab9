//! Stree builds a prefix trie from a list of strings and displays it.
//!
//! Strings are read one per line, aggregated by their common prefixes into
//! a counted trie, and the resulting tree is rendered in one of several
//! textual notations. Core functionality provided:
//! - Trie model: [TrieNode] holds an occurrence count and its byte-keyed
//!   children; [TrieBuilder] ingests strings one at a time.
//!   See [crate::model] for details.
//! - Rendering: a recursive walk with chain compaction (unbranching runs of
//!   bytes merge onto one label) emitting linewise, parenthesized,
//!   brace-expansion, or Graphviz notation. See [crate::render].
//! - Configurability:
//!   - Frequency annotation prepended or appended per node
//!   - Sibling order alphabetical or frequency-descending with
//!     alphabetical tie-break
//!   - Prefix repetition or equal-width blanking in linewise output
//! - CLI: flag parsing for the `stree` binary. See [crate::cli].
//!
//! Limitations:
//! - Input strings are opaque byte sequences; no Unicode segmentation
//! - The trie is built fully before rendering starts; no streaming
//! - Single-threaded throughout
//!
//! # Usage patterns
//! 1. Quick functions below cover the common build-then-render flow.
//! 2. For full control, drive [TrieBuilder] and
//!    [render::render_tree]/[render::write_tree] with a [RenderConfig].
//!
//! ## Example
//! Build from lines and render with default settings:
//! ```
//! use stree::{RenderConfig, build_from_lines, render_to_string};
//!
//! let root = build_from_lines(["foo", "bar", "baz"]);
//! assert_eq!(root.count(), 3);
//!
//! let out = render_to_string(&root, &RenderConfig::default());
//! assert_eq!(out, "\nba\nbar\nbaz\nfoo\n\n");
//! ```
//!
//! ## Example Render Configuration
//! ```
//! use stree::render::{RenderConfig, StructureStyle};
//! use stree::{build_from_lines, render_to_string};
//!
//! let root = build_from_lines(["foo", "bar", "baz"]);
//! let config = RenderConfig::new().with_style(StructureStyle::Graph);
//! assert_eq!(render_to_string(&root, &config), "digraph {ba -> {r;z};foo}\n");
//! ```

pub mod cli;
pub mod model;
pub mod render;

pub use crate::model::{TrieBuilder, TrieNode};
pub use crate::render::{FrequencyPosition, RenderConfig, StructureStyle};
pub use crate::render::{render_to_string, render_tree, write_tree};

use std::io::{self, BufRead};

// ============================================================================
// Quick build API
// ============================================================================
/// Builds a trie from every line of `reader`, one string per line.
///
/// See [TrieBuilder::ingest_lines] for the exact line-splitting rules.
///
/// # Errors
/// Returns an I/O error if reading fails.
///
/// # Example
/// ```no_run
/// use std::io;
///
/// let root = stree::build_from_reader(io::stdin().lock())?;
/// println!("{} lines read", root.count());
/// # Ok::<(), io::Error>(())
/// ```
pub fn build_from_reader<R: BufRead>(reader: R) -> io::Result<TrieNode> {
    let mut builder = TrieBuilder::new();
    builder.ingest_lines(reader)?;
    Ok(builder.finish())
}

/// Builds a trie from an in-memory sequence of strings.
///
/// # Example
/// ```
/// let root = stree::build_from_lines(["foo", "foolish"]);
/// assert_eq!(root.descend(b"foo").map(|n| n.count()), Some(2));
/// ```
pub fn build_from_lines<I, S>(lines: I) -> TrieNode
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut builder = TrieBuilder::new();
    for line in lines {
        builder.ingest(line.as_ref());
    }
    builder.finish()
}
