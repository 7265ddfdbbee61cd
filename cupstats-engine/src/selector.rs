//! Title selection - quota-constrained admission of qualifying titles
//!
//! Four ordered passes over the (priority, score)-sorted qualifying set:
//! positives under their cap, negatives under theirs, neutrals, then a
//! relaxation fallback that ignores the per-polarity caps and the priority
//! threshold to fill any remaining slots.

use rustc_hash::FxHashSet;

use cupstats_core::{AwardedTitle, EngineConfig, EngineError, Polarity};

use crate::evaluator::QualifiedTitle;

/// Shrink the qualifying set to the bounded awarded set (Level 2 phase).
/// Deterministic given the same qualified list and configuration.
pub fn select_titles(
    qualified: &[QualifiedTitle],
    config: &EngineConfig,
) -> Result<Vec<AwardedTitle>, EngineError> {
    config.validate()?;

    let mut selected: Vec<AwardedTitle> = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut positive_count = 0usize;
    let mut negative_count = 0usize;

    // Pass 1: positives under their cap
    for q in polarity_pass(qualified, Polarity::Positive) {
        if selected.len() >= config.max_titles || positive_count >= config.max_positive {
            break;
        }
        if q.definition.priority >= config.priority_threshold && seen.insert(&q.definition.name) {
            selected.push(q.award());
            positive_count += 1;
        }
    }

    // Pass 2: negatives under the symmetric cap
    for q in polarity_pass(qualified, Polarity::Negative) {
        if selected.len() >= config.max_titles || negative_count >= config.max_negative {
            break;
        }
        if q.definition.priority >= config.priority_threshold && seen.insert(&q.definition.name) {
            selected.push(q.award());
            negative_count += 1;
        }
    }

    // Pass 3: neutrals, gated only by the threshold and the total
    for q in polarity_pass(qualified, Polarity::Neutral) {
        if selected.len() >= config.max_titles {
            break;
        }
        if q.definition.priority >= config.priority_threshold && seen.insert(&q.definition.name) {
            selected.push(q.award());
        }
    }

    // Pass 4: relaxation fallback - refill from the whole qualified list
    // in priority/score order, caps and threshold waived
    for q in qualified {
        if selected.len() >= config.max_titles {
            break;
        }
        if seen.insert(&q.definition.name) {
            selected.push(q.award());
        }
    }

    Ok(selected)
}

fn polarity_pass(
    qualified: &[QualifiedTitle],
    polarity: Polarity,
) -> impl Iterator<Item = &QualifiedTitle> {
    qualified
        .iter()
        .filter(move |q| q.definition.polarity == polarity)
}
