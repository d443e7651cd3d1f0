use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Raw survey answers as submitted by the client, keyed by question id
///
/// Values stay untyped until validation so a wrongly typed answer can be
/// reported against its question.
pub type RawAnswers = BTreeMap<String, serde_json::Value>;

/// Survey submission, validated into a `SurveyResponse` by the handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRequest {
    pub answers: RawAnswers,
}

/// Request to rank hobbies for a set of survey answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub answers: RawAnswers,
    /// Catalog to score instead of the loaded snapshot; entries are read
    /// one by one so a bad entry is skipped rather than failing the request
    #[serde(default)]
    pub catalog: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query parameters for stored-survey recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Path parameters identifying a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPath {
    #[validate(length(min = 1, max = 128))]
    #[serde(rename = "userId")]
    pub user_id: String,
}
