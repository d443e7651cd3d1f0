use moka::future::Cache;
use std::time::Duration;

use crate::core::SurveyResponse;

/// Latest validated survey per user
///
/// Stands in for the platform's persistence layer: a submission replaces
/// any earlier one for the same user. Entries expire after the configured
/// TTL and the store is bounded by `capacity`.
#[derive(Clone)]
pub struct SurveyStore {
    surveys: Cache<String, SurveyResponse>,
}

impl SurveyStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let surveys = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { surveys }
    }

    /// Store a survey, replacing any previous submission
    pub async fn put(&self, user_id: &str, survey: SurveyResponse) {
        self.surveys.insert(user_id.to_string(), survey).await;
        tracing::trace!("Stored survey for {}", user_id);
    }

    pub async fn get(&self, user_id: &str) -> Option<SurveyResponse> {
        self.surveys.get(user_id).await
    }

    pub async fn remove(&self, user_id: &str) {
        self.surveys.invalidate(user_id).await;
    }

    /// Approximate number of stored surveys
    pub fn len(&self) -> u64 {
        self.surveys.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn survey(answer: i64) -> SurveyResponse {
        let raw: BTreeMap<String, i64> = (1..=8).map(|q| (q.to_string(), answer)).collect();
        SurveyResponse::try_from(raw).unwrap()
    }

    #[test]
    fn test_latest_submission_wins() {
        let store = SurveyStore::new(100, 60);

        tokio_test::block_on(async {
            store.put("user123", survey(1)).await;
            store.put("user123", survey(3)).await;

            let stored = store.get("user123").await.unwrap();
            assert_eq!(stored.answer(1), Some(3));
        });
    }

    #[test]
    fn test_missing_and_removed() {
        let store = SurveyStore::new(100, 60);

        tokio_test::block_on(async {
            assert!(store.get("nobody").await.is_none());

            store.put("user123", survey(2)).await;
            store.remove("user123").await;
            assert!(store.get("user123").await.is_none());
        });
    }
}
