// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Confidence, Hobby, HobbyCategory, RecommendationResult, RejectedTrait, ScoreBreakdown, ScoredHobby, Trait, TraitVector, UserProfile};
pub use requests::{LimitQuery, RawAnswers, RecommendRequest, SurveyRequest, UserPath};
pub use responses::{ErrorResponse, HealthResponse, ProfileResponse, RecommendationResponse, SurveyStoredResponse};
