use serde::{Deserialize, Serialize};
use crate::models::domain::{RecommendationResult, UserProfile};

/// Response for the recommendation endpoints
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(flatten)]
    pub result: RecommendationResult,
}

/// Built profile, returned for explainability
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

/// Acknowledges a stored survey
#[derive(Debug, Clone, Serialize)]
pub struct SurveyStoredResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub profile: UserProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    #[serde(rename = "storedSurveys")]
    pub stored_surveys: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub question: Option<String>,
}
