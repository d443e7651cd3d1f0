//! Static configuration data for the recommendation engine.
//!
//! Everything the scoring logic treats as tunable lives here: the question to
//! trait contribution table, trait importance weights, the category signal
//! table and the category affinity bonus.

use thiserror::Error;

use crate::models::{HobbyCategory, Trait};

/// Number of questions in the intake survey
pub const QUESTION_COUNT: usize = 8;

/// Answer at or above which a category signal question marks a preference
pub const CATEGORY_SIGNAL_THRESHOLD: u8 = 3;

/// Added to a hobby's score when its category is the preferred one
pub const CATEGORY_BONUS: f64 = 0.05;

/// One survey question and the traits it feeds
#[derive(Debug, Clone, Copy)]
pub struct QuestionSpec {
    pub id: u8,
    pub prompt: &'static str,
    /// Inclusive upper bound of the answer domain; the lower bound is 0
    pub max_answer: u8,
    pub contributions: &'static [(Trait, f64)],
}

pub const QUESTIONS: [QuestionSpec; QUESTION_COUNT] = [
    QuestionSpec {
        id: 1,
        prompt: "How much of your week would you like to fill with activities?",
        max_answer: 4,
        contributions: &[(Trait::ActivityLevel, 1.0), (Trait::PhysicalIntensity, 0.4)],
    },
    QuestionSpec {
        id: 2,
        prompt: "How much do you enjoy meeting new people?",
        max_answer: 4,
        contributions: &[(Trait::Sociability, 1.0), (Trait::GroupSize, 0.4)],
    },
    QuestionSpec {
        id: 3,
        prompt: "How much do you enjoy making things with your hands?",
        max_answer: 4,
        contributions: &[(Trait::Creativity, 1.0), (Trait::LearningTolerance, 0.2)],
    },
    QuestionSpec {
        id: 4,
        prompt: "How much do you prefer spending time outdoors?",
        max_answer: 4,
        contributions: &[(Trait::OutdoorPreference, 1.0), (Trait::ActivityLevel, 0.3)],
    },
    QuestionSpec {
        id: 5,
        prompt: "How important is it that a hobby costs little?",
        max_answer: 4,
        contributions: &[(Trait::BudgetSensitivity, 1.0)],
    },
    QuestionSpec {
        id: 6,
        prompt: "How comfortable are you with physical exertion?",
        max_answer: 4,
        contributions: &[(Trait::PhysicalIntensity, 1.0), (Trait::ActivityLevel, 0.3)],
    },
    QuestionSpec {
        id: 7,
        prompt: "How keen are you to learn a new skill from scratch?",
        max_answer: 4,
        contributions: &[(Trait::LearningTolerance, 1.0), (Trait::Creativity, 0.3)],
    },
    QuestionSpec {
        id: 8,
        prompt: "How large a group would you like to join?",
        max_answer: 4,
        contributions: &[(Trait::GroupSize, 1.0), (Trait::Sociability, 0.3)],
    },
];

/// Questions whose answers signal a category preference, in tie-break order
pub const CATEGORY_SIGNALS: [(u8, HobbyCategory); 5] = [
    (4, HobbyCategory::Outdoor),
    (3, HobbyCategory::Creative),
    (6, HobbyCategory::Fitness),
    (2, HobbyCategory::Social),
    (7, HobbyCategory::Learning),
];

/// Per-trait importance weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitWeights {
    pub activity_level: f64,
    pub sociability: f64,
    pub creativity: f64,
    pub physical_intensity: f64,
    pub outdoor_preference: f64,
    pub budget_sensitivity: f64,
    pub learning_tolerance: f64,
    pub group_size: f64,
}

impl TraitWeights {
    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::ActivityLevel => self.activity_level,
            Trait::Sociability => self.sociability,
            Trait::Creativity => self.creativity,
            Trait::PhysicalIntensity => self.physical_intensity,
            Trait::OutdoorPreference => self.outdoor_preference,
            Trait::BudgetSensitivity => self.budget_sensitivity,
            Trait::LearningTolerance => self.learning_tolerance,
            Trait::GroupSize => self.group_size,
        }
    }

    pub fn total(&self) -> f64 {
        Trait::ALL.iter().map(|t| self.get(*t)).sum()
    }
}

impl Default for TraitWeights {
    fn default() -> Self {
        Self {
            activity_level: 0.15,
            sociability: 0.15,
            creativity: 0.15,
            physical_intensity: 0.15,
            outdoor_preference: 0.12,
            budget_sensitivity: 0.10,
            learning_tolerance: 0.08,
            group_size: 0.10,
        }
    }
}

/// Tolerance when checking that importance weights sum to 1
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Errors raised when a scoring configuration would break score bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringConfigError {
    #[error("weight for {trait_name} must be a finite non-negative number, got {value}")]
    InvalidWeight { trait_name: Trait, value: f64 },

    #[error("trait weights must sum to 1, got {total}")]
    WeightSum { total: f64 },

    #[error("category bonus must be a finite non-negative number, got {0}")]
    InvalidBonus(f64),
}

/// Injectable scoring configuration, defaulting to the static tables
///
/// Only built through `new` or `Default`, so the weights are always
/// non-negative and sum to 1 and the bonus is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    weights: TraitWeights,
    category_bonus: f64,
}

impl ScoringConfig {
    pub fn new(weights: TraitWeights, category_bonus: f64) -> Result<Self, ScoringConfigError> {
        for t in Trait::ALL {
            let value = weights.get(t);
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::InvalidWeight { trait_name: t, value });
            }
        }

        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ScoringConfigError::WeightSum { total });
        }

        if !category_bonus.is_finite() || category_bonus < 0.0 {
            return Err(ScoringConfigError::InvalidBonus(category_bonus));
        }

        Ok(Self {
            weights,
            category_bonus,
        })
    }

    pub fn weights(&self) -> &TraitWeights {
        &self.weights
    }

    pub fn category_bonus(&self) -> f64 {
        self.category_bonus
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: TraitWeights::default(),
            category_bonus: CATEGORY_BONUS,
        }
    }
}

/// Look up a question by its identifier
pub fn question(id: u8) -> Option<&'static QuestionSpec> {
    QUESTIONS.iter().find(|q| q.id == id)
}
