use stree::render::{FrequencyPosition, RenderConfig, StructureStyle, render_to_string};
use stree::build_from_lines;

fn render(lines: &[&str], config: RenderConfig) -> String {
    let root = build_from_lines(lines.iter().copied());
    render_to_string(&root, &config)
}

// --- TESTS LINEWISE STYLE ---
#[test]
fn test_linewise_default() {
    // Empty root line, then alphabetical order with prefixes repeated,
    // one unconditional line break at the very end.
    let out = render(&["foo", "bar", "baz"], RenderConfig::default());
    assert_eq!(out, "\nba\nbar\nbaz\nfoo\n\n");
}

#[test]
fn test_linewise_prepend_frequency_sorts_descending() {
    let config = RenderConfig::new().with_frequency(FrequencyPosition::Prepend);
    let out = render(&["foo", "bar", "baz"], config);

    // Counts left-justified in an 8-column field, one space before the
    // label; descending count with alphabetical tie-break.
    let expected = format!(
        "{:<8}\n{:<8} ba\n{:<8} bar\n{:<8} baz\n{:<8} foo\n\n",
        3, 2, 1, 1, 1
    );
    assert_eq!(out, expected);
}

#[test]
fn test_linewise_suppressed_prefix_is_blanked() {
    let config = RenderConfig::new().with_repeat_prefix(false);
    let out = render(&["foo", "bar", "baz"], config);
    assert_eq!(out, "\nba\n  r\n  z\nfoo\n\n");
}

#[test]
fn test_linewise_append_frequency() {
    let config = RenderConfig::new().with_frequency(FrequencyPosition::Append);
    let out = render(&["foo", "bar", "baz"], config);
    // Root has no label, so its count stands alone without a space.
    assert_eq!(out, "3\nba 2\nbar 1\nbaz 1\nfoo 1\n\n");
}

#[test]
fn test_linewise_append_frequency_with_suppressed_prefix() {
    let config = RenderConfig::new()
        .with_frequency(FrequencyPosition::Append)
        .with_repeat_prefix(false);
    let out = render(&["foo", "bar", "baz"], config);
    assert_eq!(out, "3\nba 2\n  r 1\n  z 1\nfoo 1\n\n");
}

#[test]
fn test_linewise_frequency_sort_recurses_per_branch() {
    let config = RenderConfig::new().with_frequency(FrequencyPosition::Prepend);
    let out = render(&["foo", "bar", "baz", "folder", "form"], config);

    // Top-level split is fo(3) vs ba(2); each branch expands by descending
    // count, ties alphabetical.
    let expected = format!(
        "{:<8}\n{:<8} fo\n{:<8} folder\n{:<8} foo\n{:<8} form\n{:<8} ba\n{:<8} bar\n{:<8} baz\n\n",
        5, 3, 1, 1, 1, 2, 1, 1
    );
    assert_eq!(out, expected);
}

#[test]
fn test_linewise_force_alphabetical_overrides_frequency_sort() {
    let config = RenderConfig::new()
        .with_frequency(FrequencyPosition::Prepend)
        .with_force_alphabetical(true);
    let out = render(&["foo", "bar", "baz", "folder", "form"], config);

    let expected = format!(
        "{:<8}\n{:<8} ba\n{:<8} bar\n{:<8} baz\n{:<8} fo\n{:<8} folder\n{:<8} foo\n{:<8} form\n\n",
        5, 2, 1, 1, 3, 1, 1, 1
    );
    assert_eq!(out, expected);
}

// --- TESTS BRACKETED STYLES ---
#[test]
fn test_parenthesized() {
    let config = RenderConfig::new()
        .with_style(StructureStyle::Parenthesized)
        .with_repeat_prefix(false);
    let out = render(&["foo", "bar", "baz"], config);
    assert_eq!(out, "((ba(r)(z))(foo))\n");
}

#[test]
fn test_parenthesized_ignores_repeat_prefix() {
    // Bracketed styles never repeat the prefix, with or without -s.
    let with_repeat = render(
        &["foo", "bar", "baz"],
        RenderConfig::new().with_style(StructureStyle::Parenthesized),
    );
    assert_eq!(with_repeat, "((ba(r)(z))(foo))\n");
}

#[test]
fn test_brace_expansion() {
    let config = RenderConfig::new().with_style(StructureStyle::BraceExpansion);
    let out = render(&["foo", "bar", "baz"], config);
    assert_eq!(out, "{ba{r,z},foo}\n");
}

#[test]
fn test_brace_expansion_marks_terminating_prefix() {
    // "foo" both terminates and continues: empty leading alternative.
    let config = RenderConfig::new().with_style(StructureStyle::BraceExpansion);
    let out = render(&["foo", "foolish"], config);
    assert_eq!(out, "foo{,lish}\n");
}

#[test]
fn test_brace_expansion_marks_empty_line_at_root() {
    let config = RenderConfig::new().with_style(StructureStyle::BraceExpansion);
    let out = render(&["", "foo"], config);
    assert_eq!(out, "{,foo}\n");
}

#[test]
fn test_graph() {
    let config = RenderConfig::new().with_style(StructureStyle::Graph);
    let out = render(&["bar", "baz"], config);
    assert_eq!(out, "digraph {ba -> {r;z}}\n");
}

#[test]
fn test_graph_with_sibling_separator() {
    let config = RenderConfig::new().with_style(StructureStyle::Graph);
    let out = render(&["foo", "bar", "baz"], config);
    assert_eq!(out, "digraph {ba -> {r;z};foo}\n");
}

#[test]
fn test_graph_root_chain_compacts_into_labeled_node() {
    let config = RenderConfig::new().with_style(StructureStyle::Graph);
    let out = render(&["foo", "foolish"], config);
    assert_eq!(out, "digraph {foo -> {lish}}\n");
}

// --- TESTS EDGE CASES ---
#[test]
fn test_empty_input_renders_nothing() {
    let root = build_from_lines(Vec::<&str>::new());
    let out = render_to_string(&root, &RenderConfig::default());
    assert_eq!(out, "");
}

#[test]
fn test_single_empty_line() {
    // One empty string: the root renders with an empty label.
    assert_eq!(render(&[""], RenderConfig::default()), "\n\n");
    assert_eq!(
        render(&[""], RenderConfig::new().with_style(StructureStyle::Graph)),
        "digraph {}\n"
    );
    assert_eq!(
        render(&[""], RenderConfig::new().with_style(StructureStyle::Parenthesized)),
        "()\n"
    );
}

#[test]
fn test_single_string_compacts_to_one_line() {
    let out = render(&["abcdefghij"], RenderConfig::default());
    assert_eq!(out, "abcdefghij\n\n");
}

#[test]
fn test_structure_agrees_across_bracketed_styles() {
    // The set of compacted labels implied by the output must be identical
    // for parenthesized, brace-expansion, and graph notation.
    fn labels(output: &str) -> Vec<String> {
        let mut labels: Vec<String> = output
            .trim_start_matches("digraph ")
            .split(['{', '}', '(', ')', ',', ';', '\n'])
            .map(|token| token.trim().trim_end_matches(" ->").trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
        labels.sort();
        labels
    }

    let lines = ["foo", "foolish", "bar", "baz", "form"];
    let styles = [
        StructureStyle::Parenthesized,
        StructureStyle::BraceExpansion,
        StructureStyle::Graph,
    ];
    let rendered: Vec<Vec<String>> = styles
        .iter()
        .map(|&style| labels(&render(&lines, RenderConfig::new().with_style(style))))
        .collect();

    assert_eq!(rendered[0], rendered[1]);
    assert_eq!(rendered[1], rendered[2]);
    assert_eq!(rendered[0], vec!["ba", "fo", "lish", "o", "r", "rm", "z"]);
}
