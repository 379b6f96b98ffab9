//! Rendering configuration.
//!
//! This module provides [RenderConfig], one immutable value bundling every
//! display choice, constructed once from parsed arguments and threaded
//! explicitly into rendering. The two enums it carries,
//! [FrequencyPosition] and [StructureStyle], enumerate the frequency
//! annotation modes and the four output notations.

// =#========================================================================#=
// FREQUENCY POSITION
// =#========================================================================#=
/// Where the per-node occurrence count appears in the output, if at all.
///
/// Enabling either position also switches sibling order to
/// frequency-descending, unless alphabetical order is forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyPosition {
    /// No counts in the output.
    #[default]
    None,
    /// Count before each label; left-justified in an 8-column field in
    /// linewise style, unpadded otherwise.
    Prepend,
    /// Count after each label, separated by one space.
    Append,
}

// =#========================================================================#=
// STRUCTURE STYLE
// =#========================================================================#=
/// Output notation for the trie.
///
/// The tree walk itself is style-agnostic; each variant contributes its
/// decoration tokens through the policy methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructureStyle {
    /// One line per node after chain compaction (the default).
    #[default]
    Linewise,
    /// Nested parentheses, e.g. `((ba(r)(z))(foo))`.
    Parenthesized,
    /// Shell brace-expansion notation, e.g. `{ba{r,z},foo}`.
    BraceExpansion,
    /// Graphviz digraph description, e.g. `digraph {ba -> {r;z};foo}`.
    Graph,
}

impl StructureStyle {
    /// Returns whether this is the line-oriented style, which is the only
    /// style with per-node line breaks, count padding, and prefix blanking.
    pub fn is_linewise(self) -> bool {
        matches!(self, StructureStyle::Linewise)
    }

    /// Token emitted once before the root node.
    pub(crate) fn preamble(self) -> &'static str {
        match self {
            StructureStyle::Graph => "digraph {",
            _ => "",
        }
    }

    /// Token emitted once after the root node.
    pub(crate) fn postamble(self) -> &'static str {
        match self {
            StructureStyle::Graph => "}",
            _ => "",
        }
    }

    /// Token opening every node.
    pub(crate) fn node_open(self) -> &'static str {
        match self {
            StructureStyle::Parenthesized => "(",
            _ => "",
        }
    }

    /// Token closing every node.
    pub(crate) fn node_close(self) -> &'static str {
        match self {
            StructureStyle::Parenthesized => ")",
            _ => "",
        }
    }

    /// Token emitted between consecutive siblings.
    pub(crate) fn separator(self) -> &'static str {
        match self {
            StructureStyle::Graph => ";",
            StructureStyle::BraceExpansion => ",",
            _ => "",
        }
    }

    /// Token opening a node's group of children.
    ///
    /// `strings_end_here` reports whether some ingested strings terminate at
    /// the node in addition to continuing below it; brace expansion encodes
    /// that as an empty leading alternative (`foo{,lish}` for "foo" and
    /// "foolish"). The graph style only descends from a labeled node, so the
    /// root's children attach directly to the digraph body.
    pub(crate) fn branch_open(self, strings_end_here: bool, label_is_empty: bool) -> &'static str {
        match self {
            StructureStyle::Graph if !label_is_empty => " -> {",
            StructureStyle::BraceExpansion if strings_end_here => "{,",
            StructureStyle::BraceExpansion => "{",
            _ => "",
        }
    }

    /// Token closing a node's group of children; mirrors [Self::branch_open].
    pub(crate) fn branch_close(self, label_is_empty: bool) -> &'static str {
        match self {
            StructureStyle::Graph if !label_is_empty => "}",
            StructureStyle::BraceExpansion => "}",
            _ => "",
        }
    }
}

// =#========================================================================#=
// RENDER CONFIG
// =#========================================================================#=
/// Fully-resolved rendering configuration.
///
/// Constructed once (typically by [cli::parse_args](crate::cli::parse_args))
/// and passed by reference into rendering; there is no ambient mutable state.
///
/// # Example
/// ```
/// use stree::render::{FrequencyPosition, RenderConfig, StructureStyle};
///
/// let config = RenderConfig::new()
///     .with_style(StructureStyle::Linewise)
///     .with_frequency(FrequencyPosition::Prepend);
/// assert!(config.sorts_by_frequency());
///
/// let config = config.with_force_alphabetical(true);
/// assert!(!config.sorts_by_frequency());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Where occurrence counts appear, if at all.
    pub frequency: FrequencyPosition,

    /// Output notation.
    pub style: StructureStyle,

    /// In linewise style, whether each line repeats the prefix already
    /// printed for its ancestors (`true`, the default) or blanks it with
    /// equal-width whitespace (`false`). Other styles never repeat the
    /// prefix, so the flag has no effect there.
    pub repeat_prefix: bool,

    /// Keep alphabetical sibling order even when frequencies are shown.
    pub force_alphabetical: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frequency: FrequencyPosition::None,
            style: StructureStyle::Linewise,
            repeat_prefix: true,
            force_alphabetical: false,
        }
    }
}

impl RenderConfig {
    /// Creates the default configuration: linewise, no frequencies,
    /// prefixes repeated, alphabetical order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets where occurrence counts appear.
    pub fn with_frequency(mut self, frequency: FrequencyPosition) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the output notation.
    pub fn with_style(mut self, style: StructureStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether linewise output repeats the common prefix on each line.
    pub fn with_repeat_prefix(mut self, repeat_prefix: bool) -> Self {
        self.repeat_prefix = repeat_prefix;
        self
    }

    /// Sets whether alphabetical sibling order is kept even when
    /// frequencies are shown.
    pub fn with_force_alphabetical(mut self, force_alphabetical: bool) -> Self {
        self.force_alphabetical = force_alphabetical;
        self
    }

    /// Returns whether siblings are displayed in descending-count order:
    /// a frequency position is active and alphabetical order is not forced.
    pub fn sorts_by_frequency(&self) -> bool {
        self.frequency != FrequencyPosition::None && !self.force_alphabetical
    }
}
