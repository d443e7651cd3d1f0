// Integration tests for Hobby Algo

use hobby_algo::core::{build_profile, score_hobby, Recommender, ScoringConfig, SurveyResponse};
use hobby_algo::models::{Hobby, HobbyCategory, Trait};
use hobby_algo::services::CatalogStore;
use std::collections::BTreeMap;

fn create_survey(pairs: &[(&str, i64)]) -> SurveyResponse {
    let raw: BTreeMap<String, i64> = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    SurveyResponse::try_from(raw).unwrap()
}

fn scenario_survey() -> SurveyResponse {
    create_survey(&[
        ("1", 2), ("2", 3), ("3", 1), ("4", 4),
        ("5", 0), ("6", 2), ("7", 3), ("8", 1),
    ])
}

fn create_hobby(id: &str, category: HobbyCategory, values: [f64; 8]) -> Hobby {
    Hobby {
        id: id.to_string(),
        name: id.replace('-', " "),
        category,
        traits: Trait::ALL.iter().copied().zip(values).collect(),
        description: None,
        image_urls: vec![],
        tags: vec![],
        rejected_traits: vec![],
    }
}

fn watercolor() -> Hobby {
    create_hobby(
        "watercolor-painting",
        HobbyCategory::Creative,
        [0.2, 0.3, 0.9, 0.1, 0.2, 0.5, 0.6, 0.2],
    )
}

fn hiking() -> Hobby {
    create_hobby(
        "mountain-hiking",
        HobbyCategory::Outdoor,
        [0.8, 0.5, 0.2, 0.8, 1.0, 0.2, 0.4, 0.4],
    )
}

#[test]
fn test_integration_scenario_favors_closer_hobby() {
    let recommender = Recommender::with_default_config();
    let survey = scenario_survey();
    let catalog = vec![watercolor(), hiking()];

    let result = recommender.recommend(&survey, &catalog, 1);

    assert_eq!(result.len(), 1);
    assert_eq!(result.ids(), vec!["mountain-hiking"]);

    // Recompute the excluded hobby's score and compare
    let profile = build_profile(&survey);
    let excluded = score_hobby(&profile, &watercolor(), &ScoringConfig::default());
    let winner = &result.recommendations[0];
    assert!(winner.score > excluded.score);
    assert!((winner.score - 0.887).abs() < 0.001, "got {}", winner.score);
    assert!((excluded.score - 0.580).abs() < 0.001, "got {}", excluded.score);
    assert_eq!(winner.breakdown.category_bonus, 0.05);
}

#[test]
fn test_integration_end_to_end_with_shipped_catalog() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/hobbies.json");
    let catalog = CatalogStore::load(path).unwrap();
    let snapshot = catalog.snapshot();
    let recommender = Recommender::default();

    let result = recommender.recommend(&scenario_survey(), &snapshot, 5);

    assert_eq!(result.len(), 5);
    assert_eq!(result.total_candidates, snapshot.len());

    // All recommendations should be sorted by score, ties by id
    for pair in result.recommendations.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.hobby.id < b.hobby.id),
            "Recommendations not sorted: {} then {}",
            a.hobby.id,
            b.hobby.id
        );
    }

    for r in &result.recommendations {
        assert!((0.0..=1.0).contains(&r.score));
    }
}

#[test]
fn test_repeated_calls_are_byte_identical() {
    let recommender = Recommender::default();
    let survey = scenario_survey();
    let catalog = vec![watercolor(), hiking()];

    let first = serde_json::to_string(&recommender.recommend(&survey, &catalog, 2)).unwrap();
    for _ in 0..10 {
        let again = serde_json::to_string(&recommender.recommend(&survey, &catalog, 2)).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_k_larger_than_catalog_returns_everything() {
    let recommender = Recommender::default();
    let result = recommender.recommend(&scenario_survey(), &[watercolor(), hiking()], 50);

    assert_eq!(result.ids(), vec!["mountain-hiking", "watercolor-painting"]);
}

#[test]
fn test_k_zero_returns_empty() {
    let recommender = Recommender::default();
    let result = recommender.recommend(&scenario_survey(), &[watercolor(), hiking()], 0);

    assert!(result.is_empty());
    assert_eq!(result.total_candidates, 2);
}

#[test]
fn test_identical_hobbies_ordered_by_id() {
    let recommender = Recommender::default();
    let values = [0.5; 8];
    let catalog = vec![
        create_hobby("tai-chi", HobbyCategory::Fitness, values),
        create_hobby("bowling", HobbyCategory::Fitness, values),
        create_hobby("pilates", HobbyCategory::Fitness, values),
    ];

    let result = recommender.recommend(&scenario_survey(), &catalog, 3);

    assert_eq!(result.ids(), vec!["bowling", "pilates", "tai-chi"]);
}

#[test]
fn test_bare_hobby_does_not_break_batch() {
    let recommender = Recommender::default();
    let bare = Hobby {
        traits: BTreeMap::new(),
        ..create_hobby("allotment", HobbyCategory::Outdoor, [0.0; 8])
    };
    let catalog = vec![watercolor(), bare, hiking()];

    let result = recommender.recommend(&scenario_survey(), &catalog, 3);

    assert_eq!(result.len(), 3);
    // Bare outdoor hobby only earns the category bonus
    let last = &result.recommendations[2];
    assert_eq!(last.hobby.id, "allotment");
    assert_eq!(last.score, 0.05);
}
