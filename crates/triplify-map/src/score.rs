//! Similarity scoring between normalized column keys.
//!
//! The score is rule-based rather than edit-distance-based: headers either
//! match a catalog key exactly, contain it (or vice versa), or share
//! underscore-separated tokens with it. The first rule that applies wins;
//! rules never blend.

use std::collections::BTreeSet;

use triplify_model::{ColumnKey, PredicateSpec, Template};

/// Score assigned when one key is a non-empty substring of the other.
pub const SUBSTRING_SCORE: f32 = 0.8;

/// Decision thresholds used by the engine and the template selector.
///
/// All comparisons are strict: a score must exceed the threshold, so a
/// substring match at exactly [`SUBSTRING_SCORE`] does not count as high
/// confidence.
#[derive(Debug, Clone, Copy)]
pub struct MatchThresholds {
    /// Minimum similarity for an inferred mapping to be kept (default 0.6).
    pub accept: f32,
    /// Minimum average template score before the selector falls back to
    /// the catalog's fallback template (default 0.3).
    pub template_fallback: f32,
    /// Confidence above which a mapping counts as high confidence
    /// (default 0.8).
    pub high_confidence: f32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            accept: 0.6,
            template_fallback: 0.3,
            high_confidence: 0.8,
        }
    }
}

/// Similarity between two normalized keys, in `[0.0, 1.0]`.
///
/// 1. equal keys score 1.0;
/// 2. one key a non-empty substring of the other scores [`SUBSTRING_SCORE`];
/// 3. otherwise the token overlap count divided by the larger token-set
///    size, which is 0.0 when the sets share nothing.
pub fn similarity(a: &ColumnKey, b: &ColumnKey) -> f32 {
    if a == b {
        return 1.0;
    }
    if !a.is_empty()
        && !b.is_empty()
        && (a.as_str().contains(b.as_str()) || b.as_str().contains(a.as_str()))
    {
        return SUBSTRING_SCORE;
    }
    let tokens_a: BTreeSet<&str> = a.tokens().collect();
    let tokens_b: BTreeSet<&str> = b.tokens().collect();
    let overlap = tokens_a.intersection(&tokens_b).count();
    if overlap == 0 {
        return 0.0;
    }
    overlap as f32 / tokens_a.len().max(tokens_b.len()) as f32
}

/// Best-scoring template entry for a key, if any clears `accept`.
///
/// Entries are scanned in template order and replaced only on a strictly
/// better score, so the first entry wins ties.
pub fn best_match<'a>(
    template: &'a Template,
    key: &ColumnKey,
    accept: f32,
) -> Option<(&'a PredicateSpec, f32)> {
    let mut best_spec = None;
    let mut best_score = accept;
    for entry in &template.entries {
        let score = similarity(key, &entry.key);
        if score > best_score {
            best_spec = Some(&entry.spec);
            best_score = score;
        }
    }
    best_spec.map(|spec| (spec, best_score))
}
