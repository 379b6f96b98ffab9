use criterion::{Criterion, criterion_group, criterion_main};
use stree::model::{TrieBuilder, TrieNode};
use stree::render::{FrequencyPosition, RenderConfig, StructureStyle, render_tree};

const WORD_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

/// Deterministic pseudo-word list with heavy prefix sharing.
fn generate_words(n: usize) -> Vec<String> {
    const SYLLABLES: &[&str] = &["ba", "be", "fo", "fu", "ka", "lo", "mi", "ne", "ra", "zu"];
    let mut state: u64 = 0x5eed_cafe;
    let mut words = Vec::with_capacity(n);
    for _ in 0..n {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let len = 2 + (state % 4) as usize;
        let mut word = String::with_capacity(len * 2);
        let mut bits = state;
        for _ in 0..len {
            word.push_str(SYLLABLES[(bits % 10) as usize]);
            bits /= 10;
        }
        words.push(word);
    }
    words
}

fn build_trie(words: &[String]) -> TrieNode {
    let mut builder = TrieBuilder::new();
    for word in words {
        builder.ingest(word.as_bytes());
    }
    builder.finish()
}

fn trie_construction(c: &mut Criterion) {
    for &n in WORD_COUNTS {
        let words = generate_words(n);
        c.bench_function(&format!("build_{n}"), |b| {
            b.iter(|| build_trie(&words));
        });
    }
}

fn trie_rendering(c: &mut Criterion) {
    let words = generate_words(10_000);
    let root = build_trie(&words);
    let configs = [
        ("linewise", RenderConfig::new()),
        (
            "linewise_freq",
            RenderConfig::new().with_frequency(FrequencyPosition::Prepend),
        ),
        (
            "parenthesized",
            RenderConfig::new().with_style(StructureStyle::Parenthesized),
        ),
        (
            "brace",
            RenderConfig::new().with_style(StructureStyle::BraceExpansion),
        ),
        ("graph", RenderConfig::new().with_style(StructureStyle::Graph)),
    ];

    for (name, config) in configs {
        c.bench_function(&format!("render_{name}"), |b| {
            b.iter(|| render_tree(&root, &config));
        });
    }
}

criterion_group!(construction, trie_construction);
criterion_group! {
    name = rendering;
    config = Criterion::default().sample_size(20);
    targets = trie_rendering
}
criterion_main!(construction, rendering);
