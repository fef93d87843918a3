//! Template selection over a full header set.

use triplify_model::{ColumnKey, Template};

use crate::catalog::TemplateCatalog;
use crate::score::{MatchThresholds, best_match};

/// Score contribution of an exact key match when ranking templates.
///
/// Exact hits count double the best possible fuzzy score, so a template
/// whose keys literally appear in the headers beats one that only gets
/// near misses.
pub const EXACT_CONTRIBUTION: f32 = 2.0;

/// Pick the template whose keys best cover the headers.
///
/// Each header contributes [`EXACT_CONTRIBUTION`] on an exact normalized
/// match, otherwise its best similarity when that clears the accept
/// threshold, otherwise nothing. Template scores are averaged over the
/// header count; the highest average wins, ties keeping the first template
/// in catalog order. When no average clears the fallback threshold (always
/// the case for empty headers) the catalog's fallback template is returned.
pub fn suggest_template<'a>(
    catalog: &'a TemplateCatalog,
    headers: &[String],
    thresholds: &MatchThresholds,
) -> &'a Template {
    let keys: Vec<ColumnKey> = headers
        .iter()
        .map(|header| ColumnKey::normalize(header))
        .collect();

    let mut best: Option<(&Template, f32)> = None;
    for template in catalog.all() {
        let score = template_score(template, &keys, thresholds);
        tracing::debug!(template = %template.name, score, "Scored template against headers");
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((template, score));
        }
    }

    match best {
        Some((template, score)) if score > thresholds.template_fallback => template,
        _ => catalog.fallback(),
    }
}

fn template_score(template: &Template, keys: &[ColumnKey], thresholds: &MatchThresholds) -> f32 {
    if keys.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;
    for key in keys {
        if template.entry(key).is_some() {
            total += EXACT_CONTRIBUTION;
        } else if let Some((_, score)) = best_match(template, key, thresholds.accept) {
            total += score;
        }
    }
    total / keys.len() as f32
}
