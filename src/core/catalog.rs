use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use validator::Validate;

use crate::models::{Hobby, RejectedTrait, Trait};

/// Non-fatal catalog problems; logged, never returned as errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogIntegrityWarning {
    #[error("hobby {hobby_id} has no trait attributes; it will be scored on category alone")]
    MissingTraits { hobby_id: String },

    #[error("hobby {hobby_id} lacks traits {missing:?}")]
    PartialTraits { hobby_id: String, missing: Vec<Trait> },

    #[error("hobby {hobby_id} has {trait_name} = {value}, outside [0, 1]; it will be clamped")]
    ValueOutOfRange { hobby_id: String, trait_name: Trait, value: f64 },

    #[error("hobby {hobby_id} has a non-finite value for {trait_name}; it will be ignored")]
    NonFiniteValue { hobby_id: String, trait_name: Trait },

    #[error("hobby id {hobby_id} appears more than once")]
    DuplicateId { hobby_id: String },

    #[error("hobby {hobby_id} has unknown trait {key:?}; it will be ignored")]
    UnknownTrait { hobby_id: String, key: String },

    #[error("hobby {hobby_id} has non-numeric value {value} for {trait_name}; it will be ignored")]
    InvalidTraitValue { hobby_id: String, trait_name: Trait, value: String },

    #[error("hobby {hobby_id:?} is malformed: {message}")]
    InvalidEntry { hobby_id: String, message: String },

    #[error("catalog entry {index} ({hobby_id:?}) could not be read and was skipped: {message}")]
    UnreadableEntry { index: usize, hobby_id: String, message: String },
}

/// Read catalog entries one at a time
///
/// An entry that does not deserialize as a hobby is skipped and reported,
/// so a single bad entry never costs the rest of the catalog.
pub fn parse_catalog(entries: Vec<Value>) -> (Vec<Hobby>, Vec<CatalogIntegrityWarning>) {
    let mut hobbies = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let hobby_id = entry
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match serde_json::from_value::<Hobby>(entry) {
            Ok(hobby) => hobbies.push(hobby),
            Err(e) => skipped.push(CatalogIntegrityWarning::UnreadableEntry {
                index,
                hobby_id,
                message: e.to_string(),
            }),
        }
    }

    (hobbies, skipped)
}

/// Check a catalog for entries the scorer will handle in degraded mode
pub fn inspect_catalog(catalog: &[Hobby]) -> Vec<CatalogIntegrityWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::with_capacity(catalog.len());

    for hobby in catalog {
        if let Err(errors) = hobby.validate() {
            warnings.push(CatalogIntegrityWarning::InvalidEntry {
                hobby_id: hobby.id.clone(),
                message: errors.to_string(),
            });
        }

        if !seen.insert(hobby.id.as_str()) {
            warnings.push(CatalogIntegrityWarning::DuplicateId {
                hobby_id: hobby.id.clone(),
            });
        }

        warnings.extend(inspect_traits(hobby));
    }

    warnings
}

fn inspect_traits(hobby: &Hobby) -> Vec<CatalogIntegrityWarning> {
    let mut warnings: Vec<CatalogIntegrityWarning> = hobby
        .rejected_traits
        .iter()
        .map(|rejected| match rejected {
            RejectedTrait::UnknownKey(key) => CatalogIntegrityWarning::UnknownTrait {
                hobby_id: hobby.id.clone(),
                key: key.clone(),
            },
            RejectedTrait::InvalidValue { trait_name, value } => {
                CatalogIntegrityWarning::InvalidTraitValue {
                    hobby_id: hobby.id.clone(),
                    trait_name: *trait_name,
                    value: value.clone(),
                }
            }
        })
        .collect();

    if hobby.traits.is_empty() {
        warnings.push(CatalogIntegrityWarning::MissingTraits {
            hobby_id: hobby.id.clone(),
        });
        return warnings;
    }

    for (t, value) in &hobby.traits {
        if !value.is_finite() {
            warnings.push(CatalogIntegrityWarning::NonFiniteValue {
                hobby_id: hobby.id.clone(),
                trait_name: *t,
            });
        } else if !(0.0..=1.0).contains(value) {
            warnings.push(CatalogIntegrityWarning::ValueOutOfRange {
                hobby_id: hobby.id.clone(),
                trait_name: *t,
                value: *value,
            });
        }
    }

    let missing: Vec<Trait> = Trait::ALL
        .iter()
        .filter(|t| !hobby.traits.contains_key(*t))
        .copied()
        .collect();
    if !missing.is_empty() {
        warnings.push(CatalogIntegrityWarning::PartialTraits {
            hobby_id: hobby.id.clone(),
            missing,
        });
    }

    warnings
}

/// Log every warning for a catalog and return how many were found
pub fn log_catalog_warnings(catalog: &[Hobby]) -> usize {
    let warnings = inspect_catalog(catalog);
    log_warnings(&warnings);
    warnings.len()
}

pub fn log_warnings(warnings: &[CatalogIntegrityWarning]) {
    for warning in warnings {
        tracing::warn!("Catalog integrity: {}", warning);
    }
}
