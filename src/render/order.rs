//! Sibling ordering policy.

use crate::model::TrieNode;
use crate::render::RenderConfig;
use std::cmp::Reverse;

/// Returns a node's children in display order.
///
/// With a frequency position active and alphabetical order not forced,
/// children are sorted descending by count; ties keep ascending byte order.
/// Otherwise the trie's natural ascending-byte order is returned unchanged.
///
/// The tie-break falls out of sort stability: the input iteration order is
/// already ascending by byte, and a stable sort on `Reverse(count)` preserves
/// it among equal counts. The order is therefore deterministic and total.
pub fn ordered_children<'a>(node: &'a TrieNode, config: &RenderConfig) -> Vec<(u8, &'a TrieNode)> {
    let mut children: Vec<(u8, &TrieNode)> = node
        .children()
        .iter()
        .map(|(&unit, child)| (unit, child))
        .collect();

    if config.sorts_by_frequency() {
        children.sort_by_key(|&(_, child)| Reverse(child.count()));
    }

    children
}
