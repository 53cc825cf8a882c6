//! Catalog check command
//!
//! Validates a catalog and gathers statistics about its algorithms.

use crate::catalog::Catalog;
use crate::core::{MoveKind, tokenize};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Result of checking a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    pub total: usize,
    pub average_moves: f64,
    pub shortest: Option<(String, usize)>,
    pub longest: Option<(String, usize)>,
    pub kind_counts: BTreeMap<MoveKind, usize>,
    /// `(name, earlier name with the same algorithm)`
    pub duplicates: Vec<(String, String)>,
    /// `(name, token)` for moves outside the known notation
    pub unknown_moves: Vec<(String, String)>,
}

impl CatalogReport {
    /// No duplicates and no unknown moves
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.unknown_moves.is_empty()
    }
}

/// Check every algorithm of a catalog
///
/// Duplicated algorithms are legal but make some days repeat an earlier
/// puzzle; unknown moves are usually typos.
#[must_use]
pub fn check_catalog(catalog: &Catalog) -> CatalogReport {
    let mut kind_counts: BTreeMap<MoveKind, usize> = BTreeMap::new();
    let mut first_seen: FxHashMap<&str, &str> = FxHashMap::default();
    let mut duplicates = Vec::new();
    let mut unknown_moves = Vec::new();
    let mut shortest: Option<(String, usize)> = None;
    let mut longest: Option<(String, usize)> = None;
    let mut total_moves = 0;

    for (name, algorithm) in catalog.iter() {
        let moves = tokenize(algorithm);
        let len = moves.len();
        total_moves += len;

        for m in &moves {
            let kind = m.kind();
            *kind_counts.entry(kind).or_insert(0) += 1;
            if kind == MoveKind::Other {
                unknown_moves.push((name.to_string(), m.text().to_string()));
            }
        }

        if let Some(&first) = first_seen.get(algorithm) {
            duplicates.push((name.to_string(), first.to_string()));
        } else {
            first_seen.insert(algorithm, name);
        }

        if shortest.as_ref().is_none_or(|(_, best)| len < *best) {
            shortest = Some((name.to_string(), len));
        }
        if longest.as_ref().is_none_or(|(_, best)| len > *best) {
            longest = Some((name.to_string(), len));
        }
    }

    let total = catalog.len();
    let average_moves = if total == 0 {
        0.0
    } else {
        total_moves as f64 / total as f64
    };

    CatalogReport {
        total,
        average_moves,
        shortest,
        longest,
        kind_counts,
        duplicates,
        unknown_moves,
    }
}
