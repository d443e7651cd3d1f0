use rayon::prelude::*;

use crate::core::{
    profile::build_profile,
    ranker::{merge_ranked, rank},
    scoring::score_hobby,
    survey::SurveyResponse,
    tables::ScoringConfig,
};
use crate::models::{Hobby, RecommendationResult, ScoredHobby, UserProfile};

/// Recommendation orchestrator: survey -> profile -> scores -> ranking
///
/// # Pipeline Stages
/// 1. Profile building from the validated survey
/// 2. Scoring every hobby in the caller's catalog
/// 3. Ranking and truncation to the requested count
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads and requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    config: ScoringConfig,
}

impl Recommender {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Recommend the top `k` hobbies for a survey
    ///
    /// # Arguments
    /// * `survey` - Validated survey answers
    /// * `catalog` - Read-only hobby catalog snapshot
    /// * `k` - Maximum number of recommendations to return
    pub fn recommend(
        &self,
        survey: &SurveyResponse,
        catalog: &[Hobby],
        k: usize,
    ) -> RecommendationResult {
        let profile = build_profile(survey);
        self.recommend_for_profile(&profile, catalog, k)
    }

    /// Recommend against an already built profile
    pub fn recommend_for_profile(
        &self,
        profile: &UserProfile,
        catalog: &[Hobby],
        k: usize,
    ) -> RecommendationResult {
        let result = rank(self.score_all(profile, catalog), k);

        tracing::debug!(
            "Ranked {} hobbies, returning {}",
            result.total_candidates,
            result.len()
        );

        result
    }

    /// Score every hobby without ranking
    pub fn score_all(&self, profile: &UserProfile, catalog: &[Hobby]) -> Vec<ScoredHobby> {
        catalog
            .iter()
            .map(|hobby| score_hobby(profile, hobby, &self.config))
            .collect()
    }

    /// Score catalog shards in parallel and merge their local top `k`
    ///
    /// Produces the same result as `recommend_for_profile` for any shard
    /// size. A `shard_size` of 0 is treated as 1.
    pub fn recommend_sharded(
        &self,
        profile: &UserProfile,
        catalog: &[Hobby],
        shard_size: usize,
        k: usize,
    ) -> RecommendationResult {
        let shards: Vec<Vec<ScoredHobby>> = catalog
            .par_chunks(shard_size.max(1))
            .map(|shard| rank(self.score_all(profile, shard), k).recommendations)
            .collect();

        tracing::debug!("Scored {} shards in parallel", shards.len());

        let mut result = merge_ranked(shards, k);
        result.total_candidates = catalog.len();
        result
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_config()
    }
}
