//! Hobby Algo - recommendation engine for the retiree hobby community platform
//!
//! This library turns an eight-question intake survey into a normalized trait
//! profile, scores every hobby in a caller-supplied catalog against it and
//! returns a deterministic top-K ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_profile, rank, score_hobby, Recommender, ScoringConfig, SurveyResponse, ValidationError};
pub use crate::models::{Hobby, HobbyCategory, RecommendationResult, ScoredHobby, Trait, UserProfile};
