//! Algorithm catalogs
//!
//! A catalog maps a name (e.g. `"PLL T"`) to an algorithm string. Iteration
//! order is the order entries were loaded in, which the daily selection
//! depends on, so it is never sorted or deduplicated.

mod embedded;
pub mod loader;

pub use embedded::{ALGORITHMS, ALGORITHMS_COUNT};

/// Immutable, insertion-ordered algorithm catalog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<(String, String)>,
}

impl Catalog {
    #[must_use]
    pub const fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Build a catalog from borrowed pairs
    ///
    /// # Examples
    /// ```
    /// use algle::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_pairs(&[("sexy", "R U R' U'"), ("sledge", "R' F R F'")]);
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.get("sledge"), Some("R' F R F'"));
    /// ```
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(name, alg)| (name.to_string(), alg.to_string()))
                .collect(),
        )
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(ALGORITHMS)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an algorithm by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, alg)| alg.as_str())
    }

    /// Entry at a position in load order
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<(&str, &str)> {
        self.entries
            .get(index)
            .map(|(name, alg)| (name.as_str(), alg.as_str()))
    }

    /// Iterate `(name, algorithm)` pairs in load order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, alg)| (name.as_str(), alg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenize;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(ALGORITHMS.len(), ALGORITHMS_COUNT);
        assert_eq!(Catalog::embedded().len(), ALGORITHMS_COUNT);
    }

    #[test]
    fn embedded_is_not_empty() {
        assert!(!Catalog::embedded().is_empty());
    }

    #[test]
    fn embedded_algorithms_tokenize() {
        for (name, alg) in Catalog::embedded().iter() {
            let moves = tokenize(alg);
            assert!(!moves.is_empty(), "Algorithm '{name}' has no moves");
            // Stored form is single-space separated
            let rejoined: Vec<&str> = moves.iter().map(|m| m.text()).collect();
            assert_eq!(rejoined.join(" "), alg, "Algorithm '{name}' is not normalized");
        }
    }

    #[test]
    fn embedded_keeps_file_order() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.entry_at(0).map(|(name, _)| name), Some("PLL Aa"));
        assert_eq!(
            catalog.iter().last().map(|(name, _)| name),
            Some("Sledgehammer")
        );
    }

    #[test]
    fn entry_at_out_of_range() {
        let catalog = Catalog::from_pairs(&[("a", "R")]);
        assert_eq!(catalog.entry_at(0), Some(("a", "R")));
        assert_eq!(catalog.entry_at(1), None);
    }

    #[test]
    fn get_missing_name() {
        let catalog = Catalog::from_pairs(&[("a", "R")]);
        assert_eq!(catalog.get("b"), None);
    }
}
