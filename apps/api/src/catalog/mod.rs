//! University catalog loading.
//!
//! The catalog is read once at startup and handed to the engine explicitly.
//! Entry order is preserved and acts as the tie-break order when ranking.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::engine::validation::validate_university;
use crate::engine::EngineError;
use crate::models::university::University;

const BUNDLED_CATALOG: &str = include_str!("../../data/universities.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate university id '{0}' in catalog")]
    DuplicateId(String),

    #[error("Invalid catalog entry: {0}")]
    Invalid(#[from] EngineError),
}

/// Loads the catalog from `path`, or the bundled default when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<University>, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let catalog = parse_catalog(&raw)?;
            info!(
                "Loaded {} universities from {}",
                catalog.len(),
                path.display()
            );
            catalog
        }
        None => {
            let catalog = parse_catalog(BUNDLED_CATALOG)?;
            info!("Loaded {} universities from bundled catalog", catalog.len());
            catalog
        }
    };
    Ok(catalog)
}

/// Parses a JSON array of universities and checks every entry.
pub fn parse_catalog(raw: &str) -> Result<Vec<University>, CatalogError> {
    let catalog: Vec<University> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(catalog.len());
    for university in &catalog {
        validate_university(university)?;
        if !seen.insert(university.id.as_str()) {
            return Err(CatalogError::DuplicateId(university.id.clone()));
        }
    }

    Ok(catalog)
}

pub fn find<'a>(catalog: &'a [University], id: &str) -> Option<&'a University> {
    catalog.iter().find(|u| u.id == id)
}
