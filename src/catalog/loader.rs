//! Catalog loading utilities
//!
//! Reads a JSON object of `name -> algorithm` from disk, keeping the order
//! the keys appear in the file.

use super::Catalog;
use crate::core::{Move, tokenize};
use std::fs;
use std::io;
use std::path::Path;

/// Error type for catalog files
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
    #[error("catalog is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog entry '{0}' is not a string")]
    NotAString(String),
    #[error("catalog entry '{0}' has no moves")]
    EmptyAlgorithm(String),
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, is not a JSON object,
/// or contains an entry that is not a non-empty algorithm string.
///
/// # Examples
/// ```no_run
/// use algle::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/algorithms.json").unwrap();
/// println!("Loaded {} algorithms", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Parse a catalog from JSON text
///
/// Algorithms are re-joined with single spaces so later splitting is exact.
///
/// # Errors
///
/// Returns `CatalogError` on malformed JSON or invalid entries.
pub fn from_json_str(content: &str) -> Result<Catalog, CatalogError> {
    let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;

    let mut entries = Vec::with_capacity(parsed.len());
    for (name, value) in parsed {
        let Some(raw) = value.as_str() else {
            return Err(CatalogError::NotAString(name));
        };

        let moves = tokenize(raw);
        if moves.is_empty() {
            return Err(CatalogError::EmptyAlgorithm(name));
        }

        let algorithm = moves
            .iter()
            .map(Move::text)
            .collect::<Vec<_>>()
            .join(" ");
        entries.push((name, algorithm));
    }

    Ok(Catalog::new(entries))
}
