//! Relatedness heuristic between two posts.
//!
//! The score is a simple additive heuristic, not a retrieval system: shared
//! tag names, a flat bonus when one title contains the other, and a bonus
//! that decays linearly to zero as the publish dates drift 30 days apart.
//! It is pure and total: identical inputs always produce the identical
//! score, and malformed inputs degrade to zero contributions.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::entities::PostRecord;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Knobs of the relatedness heuristic. Defaults: 2 points per shared tag,
/// 3 for title containment, and up to 3 for posts published within 30 days
/// of each other.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelatednessWeights {
    pub tag_weight: f64,
    pub title_bonus: f64,
    pub recency_window_days: f64,
    pub recency_divisor: f64,
}

impl Default for RelatednessWeights {
    fn default() -> Self {
        Self {
            tag_weight: 2.0,
            title_bonus: 3.0,
            recency_window_days: 30.0,
            recency_divisor: 10.0,
        }
    }
}

/// Compute how related `candidate` is to `current`. Non-negative, unbounded
/// above (tag overlap dominates), deterministic.
pub fn score(current: &PostRecord, candidate: &PostRecord, weights: &RelatednessWeights) -> f64 {
    let mut total = tag_overlap(current, candidate) as f64 * weights.tag_weight;
    if titles_contain(current, candidate) {
        total += weights.title_bonus;
    }
    total + recency_proximity(current, candidate, weights)
}

/// Count tag names shared between the two posts, case-insensitively.
/// Each side is normalized to a set first, so a tag repeated on one side
/// counts once.
fn tag_overlap(current: &PostRecord, candidate: &PostRecord) -> usize {
    if current.tags.is_empty() || candidate.tags.is_empty() {
        return 0;
    }

    let current_names: HashSet<String> = current
        .tags
        .iter()
        .map(|tag| tag.name.to_lowercase())
        .collect();
    candidate
        .tags
        .iter()
        .map(|tag| tag.name.to_lowercase())
        .collect::<HashSet<String>>()
        .intersection(&current_names)
        .count()
}

/// True when either lower-cased title is a substring of the other,
/// equality included. Binary, not proportional to overlap length.
fn titles_contain(current: &PostRecord, candidate: &PostRecord) -> bool {
    let left = current.title.to_lowercase();
    let right = candidate.title.to_lowercase();
    left.contains(&right) || right.contains(&left)
}

/// Linear recency bonus: `(window - days) / divisor` inside the window,
/// zero at or beyond it. Missing `published_at` on either side yields zero.
fn recency_proximity(
    current: &PostRecord,
    candidate: &PostRecord,
    weights: &RelatednessWeights,
) -> f64 {
    let (Some(current_at), Some(candidate_at)) = (current.published_at, candidate.published_at)
    else {
        return 0.0;
    };

    let days = (current_at - candidate_at).as_seconds_f64().abs() / SECONDS_PER_DAY;
    if days < weights.recency_window_days {
        (weights.recency_window_days - days) / weights.recency_divisor
    } else {
        0.0
    }
}
