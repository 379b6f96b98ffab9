//! Trie rendering into the four output notations.
//!
//! This module provides the recursive tree walk that turns a finished
//! [TrieNode] tree into text. The walk performs chain compaction, obtains
//! sibling order from [ordered_children], and emits per-style decoration
//! tokens through the policy methods on
//! [StructureStyle](crate::render::StructureStyle). The walk itself is
//! infallible: output is built into a `Vec<u8>` and only [write_tree]'s
//! final sink write can fail.
//!
//! # Chain compaction
//! A maximal run of nodes with exactly one child whose count equals the
//! parent's count represents characters shared by all and only the same set
//! of strings, with no branch and no string terminating mid-run. Such runs
//! are folded onto one label, so `"bar"`/`"baz"` render as `ba` with
//! continuations `r` and `z` instead of one byte per node.

use crate::model::TrieNode;
use crate::render::RenderConfig;
use crate::render::config::FrequencyPosition;
use crate::render::order::ordered_children;
use std::io::{self, Write};

/// Per-node output estimate: label bytes, count, decoration.
const NODE_CHARS_ESTIMATE: usize = 12;

/// Extra buffer in the output length estimate, covering the root
/// preamble/postamble and final line break.
const BUFFER_CHARS: usize = 16;

// ============================================================================
// RENDERING API (pub)
// ============================================================================
/// Renders the trie into a byte buffer according to `config`.
///
/// Input strings are opaque byte sequences, so the rendered output is bytes
/// as well; for valid UTF-8 input it is valid UTF-8. An entirely empty input
/// (root count zero) renders to an empty buffer.
///
/// # Example
/// ```
/// use stree::render::{RenderConfig, StructureStyle, render_tree};
/// use stree::build_from_lines;
///
/// let root = build_from_lines(["foo", "bar", "baz"]);
/// let config = RenderConfig::new().with_style(StructureStyle::BraceExpansion);
/// assert_eq!(render_tree(&root, &config), b"{ba{r,z},foo}\n");
/// ```
pub fn render_tree(root: &TrieNode, config: &RenderConfig) -> Vec<u8> {
    let estimated_capacity = root.num_nodes() * NODE_CHARS_ESTIMATE + BUFFER_CHARS;
    let mut out = Vec::with_capacity(estimated_capacity);
    render_node(&mut out, root, Vec::new(), b"", true, config);
    out
}

/// Renders the trie to a string, replacing any non-UTF-8 input bytes with
/// the replacement character.
///
/// # Example
/// ```
/// use stree::render::{RenderConfig, render_to_string};
/// use stree::build_from_lines;
///
/// let root = build_from_lines(["foo", "bar", "baz"]);
/// let out = render_to_string(&root, &RenderConfig::default());
/// assert_eq!(out, "\nba\nbar\nbaz\nfoo\n\n");
/// ```
pub fn render_to_string(root: &TrieNode, config: &RenderConfig) -> String {
    String::from_utf8_lossy(&render_tree(root, config)).into_owned()
}

/// Renders the trie and writes it to `writer` in one piece.
///
/// # Errors
/// Returns an I/O error if the final write fails; rendering itself cannot.
pub fn write_tree<W: Write>(writer: &mut W, root: &TrieNode, config: &RenderConfig) -> io::Result<()> {
    writer.write_all(&render_tree(root, config))
}

// ============================================================================
// RECURSIVE WALK
// ============================================================================
/// Renders one node (and its subtree) into `out`.
///
/// `label` holds the bytes this node contributes beyond `prefix`, the text
/// already accounted for by its ancestors: a single byte for a regular
/// child, empty for the root, possibly extended here by chain compaction.
/// Invariant after compaction: `prefix + label` is either a complete input
/// string or the longest common prefix of at least two input strings.
fn render_node(
    out: &mut Vec<u8>,
    node: &TrieNode,
    label: Vec<u8>,
    prefix: &[u8],
    is_root: bool,
    config: &RenderConfig,
) {
    // Only reachable at the root, for an entirely empty input.
    if node.count() == 0 {
        return;
    }

    // Chain compaction: fold unbranching, non-terminating runs onto `label`.
    let mut node = node;
    let mut label = label;
    while let Some((&unit, child)) = node.children().first_key_value() {
        if node.children().len() != 1 || child.count() != node.count() {
            break;
        }
        label.push(unit);
        node = child;
    }

    let style = config.style;
    if is_root {
        out.extend_from_slice(style.preamble().as_bytes());
    }
    out.extend_from_slice(style.node_open().as_bytes());

    if config.frequency == FrequencyPosition::Prepend {
        if style.is_linewise() {
            // Fixed-width field for vertical alignment.
            out.extend_from_slice(format!("{:<8}", node.count()).as_bytes());
        } else {
            out.extend_from_slice(node.count().to_string().as_bytes());
        }
        if !label.is_empty() {
            out.push(b' ');
        }
    }

    if style.is_linewise() {
        if config.repeat_prefix {
            out.extend_from_slice(prefix);
        } else {
            out.resize(out.len() + prefix.len(), b' ');
        }
    }
    out.extend_from_slice(&label);

    if config.frequency == FrequencyPosition::Append {
        if !label.is_empty() {
            out.push(b' ');
        }
        out.extend_from_slice(node.count().to_string().as_bytes());
    }

    if style.is_linewise() {
        out.push(b'\n');
    }

    if !node.children().is_empty() {
        let strings_end_here = node.child_count_sum() < node.count();
        out.extend_from_slice(style.branch_open(strings_end_here, label.is_empty()).as_bytes());

        let child_prefix = [prefix, label.as_slice()].concat();
        for (i, (unit, child)) in ordered_children(node, config).into_iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(style.separator().as_bytes());
            }
            render_node(out, child, vec![unit], &child_prefix, false, config);
        }

        out.extend_from_slice(style.branch_close(label.is_empty()).as_bytes());
    }

    out.extend_from_slice(style.node_close().as_bytes());

    if is_root {
        out.extend_from_slice(style.postamble().as_bytes());
        out.push(b'\n');
    }
}
