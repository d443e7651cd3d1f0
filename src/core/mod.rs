// Core algorithm exports
pub mod catalog;
pub mod profile;
pub mod ranker;
pub mod recommender;
pub mod scoring;
pub mod survey;
pub mod tables;

pub use catalog::{inspect_catalog, log_catalog_warnings, log_warnings, parse_catalog, CatalogIntegrityWarning};
pub use profile::{build_profile, infer_preferred_category};
pub use ranker::{compare_scored, merge_ranked, rank};
pub use recommender::Recommender;
pub use scoring::{score_hobby, trait_closeness};
pub use survey::{SurveyResponse, ValidationError};
pub use tables::{ScoringConfig, ScoringConfigError, TraitWeights};
