//! Data model for the prefix trie.
//!
//! # Tree representation
//! The trie is a recursive owned structure: each [TrieNode] holds an
//! occurrence count and a byte-keyed, order-stable map of child nodes it
//! exclusively owns. No cycles exist, so no arena or shared-ownership scheme
//! is needed.
//!
//! # Building tries
//! Tries are constructed through [TrieBuilder], one input string at a time.
//! The lifecycle is two-phase: ingest everything, then obtain the root with
//! [TrieBuilder::finish]. Rendering only reads; nothing mutates the tree
//! once construction completes.

pub mod trie_builder;
pub mod trie_node;

pub use trie_builder::TrieBuilder;
pub use trie_node::TrieNode;
