use std::collections::BTreeMap;

use crate::core::tables::ScoringConfig;
use crate::models::{Confidence, Hobby, ScoreBreakdown, ScoredHobby, UserProfile};

/// Calculate a match score (0-1) for a hobby against a user profile
///
/// Scoring formula:
/// similarity = sum(w_t * (1 - |profile_t - hobby_t|)) / sum(w_t)
///     over the traits the hobby actually carries
/// score = clamp(similarity + category_bonus, 0, 1)
///
/// Hobby values are clamped into [0, 1]; non-finite values count as absent.
/// A hobby with no usable traits is scored on category affinity alone.
pub fn score_hobby(profile: &UserProfile, hobby: &Hobby, config: &ScoringConfig) -> ScoredHobby {
    let mut closeness = BTreeMap::new();
    let mut weighted_sum = 0.0;
    let mut weight_used = 0.0;

    for (t, raw_value) in &hobby.traits {
        if !raw_value.is_finite() {
            continue;
        }
        let Some(user_value) = profile.get(*t) else {
            continue;
        };

        let close = trait_closeness(user_value, raw_value.clamp(0.0, 1.0));
        let weight = config.weights().get(*t);

        weighted_sum += weight * close;
        weight_used += weight;
        closeness.insert(*t, close);
    }

    let total_weight = config.weights().total();
    let coverage = if total_weight > 0.0 {
        (weight_used / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let similarity = if weight_used > 0.0 {
        (weighted_sum / weight_used).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let confidence = if closeness.is_empty() {
        tracing::warn!(
            hobby_id = %hobby.id,
            "Hobby has no usable trait attributes, scoring on category affinity only"
        );
        Confidence::Low
    } else if closeness.len() < profile.traits().len() {
        Confidence::Partial
    } else {
        Confidence::Full
    };

    let category_bonus = category_bonus(profile, hobby, config);
    let score = (similarity + category_bonus).clamp(0.0, 1.0);

    tracing::trace!(hobby_id = %hobby.id, score, similarity, category_bonus, "Scored hobby");

    ScoredHobby {
        hobby: hobby.clone(),
        score,
        breakdown: ScoreBreakdown {
            closeness,
            similarity,
            category_bonus,
            coverage,
            confidence,
        },
    }
}

/// Closeness of two values in [0, 1]; 1 means identical
#[inline]
pub fn trait_closeness(user_value: f64, hobby_value: f64) -> f64 {
    (1.0 - (user_value - hobby_value).abs()).clamp(0.0, 1.0)
}

#[inline]
fn category_bonus(profile: &UserProfile, hobby: &Hobby, config: &ScoringConfig) -> f64 {
    match profile.preferred_category() {
        Some(category) if category == hobby.category => config.category_bonus(),
        _ => 0.0,
    }
}
