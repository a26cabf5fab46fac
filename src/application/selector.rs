//! Deterministic top-k selection with random fallback fill.
//!
//! Policy: candidates scoring above zero qualify for the ranked selection;
//! when fewer qualify than requested, the remaining slots are topped up with
//! uniform random draws from the leftover pool. Ranking is fully
//! deterministic; only the fill consumes randomness, and the generator is
//! supplied by the caller so tests can seed it.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::Rng;

use crate::domain::entities::PostRecord;
use crate::domain::relatedness::{RelatednessWeights, score};

/// Select up to `desired_count` posts related to `current` from `candidates`.
///
/// The result never contains `current.id` and never a duplicate id; it is
/// shorter than `desired_count` only when the deduplicated pool itself is.
/// Equal scores order by ascending id, so repeated runs agree regardless of
/// input order.
pub fn select_related<R: Rng + ?Sized>(
    current: &PostRecord,
    candidates: &[PostRecord],
    desired_count: usize,
    weights: &RelatednessWeights,
    rng: &mut R,
) -> Vec<PostRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut scored: Vec<(f64, &PostRecord)> = candidates
        .iter()
        .filter(|post| post.id != current.id && seen.insert(post.id.as_str()))
        .map(|post| (score(current, post, weights), post))
        .collect();

    scored.sort_by(|(left_score, left), (right_score, right)| {
        right_score
            .partial_cmp(left_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.id.cmp(&right.id))
    });

    let qualifying = scored
        .iter()
        .take_while(|(candidate_score, _)| *candidate_score > 0.0)
        .count();
    let primary = desired_count.min(qualifying);

    let mut selection: Vec<PostRecord> = scored[..primary]
        .iter()
        .map(|(_, post)| (*post).clone())
        .collect();
    let mut leftover: Vec<&PostRecord> =
        scored[primary..].iter().map(|(_, post)| *post).collect();

    while selection.len() < desired_count && !leftover.is_empty() {
        let index = rng.random_range(0..leftover.len());
        selection.push(leftover.swap_remove(index).clone());
    }

    selection
}
