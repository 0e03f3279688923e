//! Fuzzy text matching
//!
//! Exact character-offset correspondence between an annotation's source text
//! and the rendered text layer is not guaranteed, so spans are matched by
//! word-set overlap instead: tokenize, drop stop-words, score the
//! intersection against the smaller set.

use crate::layout::LayoutNode;
use crate::span_index::MeasuredNode;
use std::collections::HashSet;

/// Words too common to carry matching signal.
pub const DEFAULT_STOP_WORDS: [&str; 10] =
    ["a", "of", "and", "the", "in", "on", "at", "to", "is", "it"];

/// Tolerates float rounding at the threshold, so exact-tie scores pass.
const SCORE_EPSILON: f32 = 1e-6;

const OVERLAP_THRESHOLD: f32 = 0.5;

pub fn default_stop_words() -> HashSet<&'static str> {
    DEFAULT_STOP_WORDS.iter().copied().collect()
}

fn significant_words<'t>(text: &'t str, stop_words: &HashSet<&str>) -> HashSet<&'t str> {
    text.split_whitespace()
        .filter(|word| !stop_words.contains(word.to_lowercase().as_str()))
        .collect()
}

/// Token-set overlap between two strings: `|A ∩ B| / min(|A|, |B|)` after
/// stop-word removal. An empty token set on either side scores 0.
pub fn overlap_score(a: &str, b: &str, stop_words: &HashSet<&str>) -> f32 {
    let words_a = significant_words(a, stop_words);
    let words_b = significant_words(b, stop_words);

    let smaller = words_a.len().min(words_b.len());
    if smaller == 0 {
        return 0.0;
    }

    let common = words_a.intersection(&words_b).count();
    common as f32 / smaller as f32
}

/// Spans that plausibly render `target`, in reading order.
///
/// Spans are sorted by ascending x then y before filtering; every span whose
/// overlap score reaches 0.5 (ties included) is kept.
pub fn find_overlapping_spans<N: LayoutNode>(
    mut spans: Vec<MeasuredNode<N>>,
    target: &str,
    stop_words: &HashSet<&str>,
) -> Vec<MeasuredNode<N>> {
    spans.sort_by(|a, b| {
        a.bbox.x1.total_cmp(&b.bbox.x1).then(a.bbox.y1.total_cmp(&b.bbox.y1))
    });

    spans
        .into_iter()
        .filter(|span| {
            overlap_score(&span.node.text_content(), target, stop_words) + SCORE_EPSILON
                >= OVERLAP_THRESHOLD
        })
        .collect()
}
