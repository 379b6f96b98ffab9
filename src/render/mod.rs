//! Rendering of a finished trie into text.
//!
//! This module turns a [TrieNode](crate::model::TrieNode) tree into one of
//! four notations selected by [RenderConfig]:
//!
//! | Style | `foo`, `bar`, `baz` |
//! |-------|---------------------|
//! | [Linewise](StructureStyle::Linewise) | one line per compacted node |
//! | [Parenthesized](StructureStyle::Parenthesized) | `((ba(r)(z))(foo))` |
//! | [BraceExpansion](StructureStyle::BraceExpansion) | `{ba{r,z},foo}` |
//! | [Graph](StructureStyle::Graph) | `digraph {ba -> {r;z};foo}` |
//!
//! Counts can be prepended or appended per node ([FrequencyPosition]), and
//! sibling order switches to frequency-descending with alphabetical
//! tie-break whenever counts are shown, unless alphabetical order is forced.
//!
//! Rendering is a single top-down recursive walk over a read-only tree;
//! see [writer] for the walk and the chain-compaction rule.

pub mod config;
pub mod order;
pub mod writer;

pub use config::{FrequencyPosition, RenderConfig, StructureStyle};
pub use order::ordered_children;
pub use writer::{render_to_string, render_tree, write_tree};
