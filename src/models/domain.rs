use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

/// One dimension of the preference space shared by user profiles and hobbies
///
/// Variant order matches `Trait::ALL`, so `t as usize` indexes per-trait arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    ActivityLevel,
    Sociability,
    Creativity,
    PhysicalIntensity,
    OutdoorPreference,
    BudgetSensitivity,
    LearningTolerance,
    GroupSize,
}

impl Trait {
    pub const COUNT: usize = 8;

    pub const ALL: [Trait; Trait::COUNT] = [
        Trait::ActivityLevel,
        Trait::Sociability,
        Trait::Creativity,
        Trait::PhysicalIntensity,
        Trait::OutdoorPreference,
        Trait::BudgetSensitivity,
        Trait::LearningTolerance,
        Trait::GroupSize,
    ];

    /// Trait for its wire name, if it is one
    pub fn from_name(name: &str) -> Option<Trait> {
        Trait::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::ActivityLevel => "activity_level",
            Trait::Sociability => "sociability",
            Trait::Creativity => "creativity",
            Trait::PhysicalIntensity => "physical_intensity",
            Trait::OutdoorPreference => "outdoor_preference",
            Trait::BudgetSensitivity => "budget_sensitivity",
            Trait::LearningTolerance => "learning_tolerance",
            Trait::GroupSize => "group_size",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hobby category as carried by the catalog
///
/// Only a subset of categories can be inferred from the survey; the rest
/// exist so catalog entries deserialize without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HobbyCategory {
    Creative,
    Outdoor,
    Fitness,
    Social,
    Learning,
    Games,
    Music,
    #[serde(other)]
    Other,
}

/// Trait-attribute vector; absent keys are treated as neutral by the scorer
pub type TraitVector = BTreeMap<Trait, f64>;

/// Trait attribute dropped while reading a catalog entry
#[derive(Debug, Clone, PartialEq)]
pub enum RejectedTrait {
    /// Key that names no known trait
    UnknownKey(String),
    /// Known trait whose value is not a number; holds the value as JSON text
    InvalidValue { trait_name: Trait, value: String },
}

/// Catalog entry supplied by the caller
///
/// Trait attributes are read leniently: unknown keys and non-numeric values
/// are set aside in `rejected_traits` instead of failing the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(from = "HobbyRecord")]
pub struct Hobby {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub category: HobbyCategory,
    pub traits: TraitVector,
    pub description: Option<String>,
    #[serde(rename = "imageUrls")]
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip)]
    pub rejected_traits: Vec<RejectedTrait>,
}

/// Wire shape of a catalog entry before trait attributes are checked
#[derive(Deserialize)]
struct HobbyRecord {
    id: String,
    name: String,
    category: HobbyCategory,
    #[serde(default)]
    traits: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "imageUrls", default)]
    image_urls: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<HobbyRecord> for Hobby {
    fn from(record: HobbyRecord) -> Self {
        let mut traits = TraitVector::new();
        let mut rejected_traits = Vec::new();

        for (key, value) in record.traits.unwrap_or_default() {
            let Some(trait_name) = Trait::from_name(&key) else {
                rejected_traits.push(RejectedTrait::UnknownKey(key));
                continue;
            };
            match value.as_f64() {
                Some(number) => {
                    traits.insert(trait_name, number);
                }
                None => rejected_traits.push(RejectedTrait::InvalidValue {
                    trait_name,
                    value: value.to_string(),
                }),
            }
        }

        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            traits,
            description: record.description,
            image_urls: record.image_urls,
            tags: record.tags,
            rejected_traits,
        }
    }
}

/// Normalized trait scores derived from a single survey submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    traits: TraitVector,
    #[serde(rename = "preferredCategory")]
    preferred_category: Option<HobbyCategory>,
}

impl UserProfile {
    pub(crate) fn new(traits: TraitVector, preferred_category: Option<HobbyCategory>) -> Self {
        Self {
            traits,
            preferred_category,
        }
    }

    /// Score for a trait, in [0, 1]
    pub fn get(&self, t: Trait) -> Option<f64> {
        self.traits.get(&t).copied()
    }

    pub fn traits(&self) -> &TraitVector {
        &self.traits
    }

    pub fn preferred_category(&self) -> Option<HobbyCategory> {
        self.preferred_category
    }
}

/// How much of the importance weight a hobby's vector covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Full,
    Partial,
    Low,
}

/// Contributing factors behind a match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub closeness: BTreeMap<Trait, f64>,
    pub similarity: f64,
    #[serde(rename = "categoryBonus")]
    pub category_bonus: f64,
    pub coverage: f64,
    pub confidence: Confidence,
}

/// Hobby paired with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHobby {
    pub hobby: Hobby,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredHobby {
    pub fn id(&self) -> &str {
        &self.hobby.id
    }
}

/// Ranked recommendations, descending by score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<ScoredHobby>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

impl RecommendationResult {
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.recommendations.iter().map(ScoredHobby::id).collect()
    }
}
