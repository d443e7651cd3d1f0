use std::cmp::Ordering;

use crate::models::{RecommendationResult, ScoredHobby};

/// Ordering used everywhere results are sorted: score descending, then
/// hobby id ascending
#[inline]
pub fn compare_scored(a: &ScoredHobby, b: &ScoredHobby) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.hobby.id.cmp(&b.hobby.id))
}

/// Sort scored hobbies and keep the top `k`
///
/// `k` larger than the input returns everything; `k = 0` and an empty input
/// both return an empty result.
pub fn rank(mut scored: Vec<ScoredHobby>, k: usize) -> RecommendationResult {
    let total_candidates = scored.len();

    scored.sort_by(compare_scored);
    scored.truncate(k);

    RecommendationResult {
        recommendations: scored,
        total_candidates,
    }
}

/// Merge independently scored shards into one ranked result
///
/// Shards may already be truncated to their local top `k`; the merge keeps
/// the same ordering so the output does not depend on how the catalog was
/// split.
pub fn merge_ranked<I>(shards: I, k: usize) -> RecommendationResult
where
    I: IntoIterator<Item = Vec<ScoredHobby>>,
{
    let merged: Vec<ScoredHobby> = shards.into_iter().flatten().collect();
    rank(merged, k)
}
