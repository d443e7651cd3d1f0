use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::core::{log_catalog_warnings, log_warnings, parse_catalog};
use crate::models::Hobby;

/// Errors that can occur while loading the hobby catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only hobby catalog snapshot
///
/// Loaded once at startup; handlers clone the `Arc` and hand the slice to
/// the recommender, which never touches storage itself.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    hobbies: Arc<[Hobby]>,
}

impl CatalogStore {
    /// Load a catalog from a JSON array of hobbies
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&json)?;
        tracing::info!("Loaded {} hobbies from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse a catalog from JSON text
    ///
    /// Only a document that is not a JSON array fails; unreadable entries
    /// are logged and skipped.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let (hobbies, skipped) = parse_catalog(entries);
        if !skipped.is_empty() {
            log_warnings(&skipped);
            tracing::warn!("Skipped {} unreadable catalog entries", skipped.len());
        }
        Ok(Self::from_hobbies(hobbies))
    }

    /// Wrap an in-memory catalog, logging integrity warnings
    pub fn from_hobbies(hobbies: Vec<Hobby>) -> Self {
        let warnings = log_catalog_warnings(&hobbies);
        if warnings > 0 {
            tracing::warn!("Catalog has {} integrity warnings", warnings);
        }
        Self {
            hobbies: hobbies.into(),
        }
    }

    /// Shared snapshot of the catalog
    pub fn snapshot(&self) -> Arc<[Hobby]> {
        Arc::clone(&self.hobbies)
    }

    pub fn len(&self) -> usize {
        self.hobbies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hobbies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let store = CatalogStore::from_json(
            r#"[
                {"id": "gardening", "name": "Gardening", "category": "outdoor",
                 "traits": {"outdoor_preference": 0.9, "physical_intensity": 0.4}},
                {"id": "bridge", "name": "Bridge", "category": "games"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].id, "gardening");
    }

    #[test]
    fn test_bad_entries_do_not_drop_the_catalog() {
        let store = CatalogStore::from_json(
            r#"[
                {"id": "gardening", "name": "Gardening", "category": "outdoor",
                 "traits": {"outdoor_preference": 0.9, "physical_intensity": 0.4}},
                {"id": "karaoke", "name": "Karaoke", "category": "music",
                 "traits": {"noise_level": 0.5, "creativity": null, "sociability": "high"}},
                {"id": "no-name", "category": "games"}
            ]"#,
        )
        .unwrap();

        let snapshot = store.snapshot();
        assert_eq!(store.len(), 2);
        assert_eq!(snapshot[1].id, "karaoke");
        assert!(snapshot[1].traits.is_empty());
        assert_eq!(snapshot[1].rejected_traits.len(), 3);

        let raw: std::collections::BTreeMap<String, i64> =
            (1..=8).map(|q| (q.to_string(), 4)).collect();
        let survey = crate::core::SurveyResponse::try_from(raw).unwrap();
        let result = crate::core::Recommender::default().recommend(&survey, &snapshot, 2);

        assert_eq!(result.ids(), vec!["gardening", "karaoke"]);
        assert!(result.recommendations[0].score > 0.0);
    }

    #[test]
    fn test_non_array_document_rejected() {
        let result = CatalogStore::from_json(r#"{"id": "a"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = CatalogStore::load("does/not/exist.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_shipped_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/hobbies.json");
        let store = CatalogStore::load(path).unwrap();
        assert!(!store.is_empty());
    }
}
