//! Property-based tests for the recommendation engine.
//!
//! # Invariants tested
//!
//! - **Boundedness:** every closeness term and final score lies in [0, 1].
//! - **Monotonicity:** moving one hobby trait strictly closer to the profile
//!   strictly raises that hobby's score.
//! - **Determinism:** identical inputs produce identical rankings.
//! - **Sharding:** parallel sharded scoring matches the single-pass result.
//! - **Truncation:** results never exceed `k` and are sorted with id
//!   tie-breaks.

use std::collections::BTreeMap;

use hobby_algo::core::{build_profile, score_hobby, Recommender, ScoringConfig, SurveyResponse};
use hobby_algo::models::{Hobby, HobbyCategory, Trait};
use proptest::prelude::*;

fn survey_strategy() -> impl Strategy<Value = SurveyResponse> {
    prop::array::uniform8(0i64..=4).prop_map(|answers| {
        let raw: BTreeMap<String, i64> = answers
            .iter()
            .enumerate()
            .map(|(i, a)| ((i + 1).to_string(), *a))
            .collect();
        SurveyResponse::try_from(raw).expect("answers are in domain")
    })
}

fn category_strategy() -> impl Strategy<Value = HobbyCategory> {
    prop_oneof![
        Just(HobbyCategory::Creative),
        Just(HobbyCategory::Outdoor),
        Just(HobbyCategory::Fitness),
        Just(HobbyCategory::Social),
        Just(HobbyCategory::Learning),
        Just(HobbyCategory::Games),
    ]
}

fn hobby_strategy(id: String) -> impl Strategy<Value = Hobby> {
    (
        category_strategy(),
        prop::collection::vec(prop::option::of(0.0f64..=1.0), 8),
    )
        .prop_map(move |(category, values)| Hobby {
            id: id.clone(),
            name: id.clone(),
            category,
            traits: Trait::ALL
                .iter()
                .zip(values)
                .filter_map(|(t, v)| v.map(|v| (*t, v)))
                .collect(),
            description: None,
            image_urls: vec![],
            tags: vec![],
            rejected_traits: vec![],
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Hobby>> {
    (0usize..30).prop_flat_map(|len| {
        (0..len)
            .map(|i| hobby_strategy(format!("hobby-{:02}", i % 12)))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: all scores and closeness terms stay inside [0, 1].
    #[test]
    fn scores_are_bounded(survey in survey_strategy(), hobby in hobby_strategy("h".to_string())) {
        let profile = build_profile(&survey);
        for (_, v) in profile.traits() {
            prop_assert!((0.0..=1.0).contains(v));
        }

        let scored = score_hobby(&profile, &hobby, &ScoringConfig::default());
        prop_assert!((0.0..=1.0).contains(&scored.score));
        for (_, c) in &scored.breakdown.closeness {
            prop_assert!((0.0..=1.0).contains(c));
        }
    }

    /// Property: moving a trait strictly closer to the profile raises the score.
    #[test]
    fn closer_trait_scores_higher(
        survey in survey_strategy(),
        trait_index in 0usize..8,
        start in 0.0f64..=1.0,
        step in 0.05f64..=1.0,
    ) {
        let profile = build_profile(&survey);
        let t = Trait::ALL[trait_index];
        let target = profile.get(t).expect("profile covers every trait");
        prop_assume!((start - target).abs() > 0.01);

        // Hobby off-category so the bonus never caps the comparison
        let base = Hobby {
            id: "h".to_string(),
            name: "h".to_string(),
            category: HobbyCategory::Other,
            traits: Trait::ALL.iter().map(|x| (*x, 0.0)).collect(),
            description: None,
            image_urls: vec![],
            tags: vec![],
            rejected_traits: vec![],
        };
        let mut before = base.clone();
        before.traits.insert(t, start);

        let moved = start + (target - start) * step.min(1.0);
        let mut after = base;
        after.traits.insert(t, moved);

        let config = ScoringConfig::default();
        let before_score = score_hobby(&profile, &before, &config).score;
        let after_score = score_hobby(&profile, &after, &config).score;
        prop_assert!(after_score > before_score, "{} !> {}", after_score, before_score);
    }

    /// Property: ranking the same inputs twice yields identical output.
    #[test]
    fn ranking_is_deterministic(
        survey in survey_strategy(),
        catalog in catalog_strategy(),
        k in 0usize..40,
    ) {
        let recommender = Recommender::default();
        let first = recommender.recommend(&survey, &catalog, k);
        let second = recommender.recommend(&survey, &catalog, k);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.len() <= k);
        prop_assert_eq!(first.len(), k.min(catalog.len()));
        for pair in first.recommendations.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score > b.score || (a.score == b.score && a.hobby.id <= b.hobby.id));
        }
    }

    /// Property: sharded parallel scoring matches the single-pass ranking.
    #[test]
    fn sharding_preserves_ranking(
        survey in survey_strategy(),
        catalog in catalog_strategy(),
        shard_size in 1usize..10,
        k in 0usize..15,
    ) {
        let recommender = Recommender::default();
        let profile = build_profile(&survey);
        let direct = recommender.recommend_for_profile(&profile, &catalog, k);
        let sharded = recommender.recommend_sharded(&profile, &catalog, shard_size, k);
        prop_assert_eq!(direct.ids(), sharded.ids());
        prop_assert_eq!(direct.total_candidates, sharded.total_candidates);
    }
}
