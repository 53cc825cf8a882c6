//! Guess feedback calculation and representation
//!
//! Each position of a guess is compared with the solution move at the same
//! position only:
//! - Exact   = same move (apostrophe variants count as equal)
//! - Partial = same base face/axis, different modifier
//! - Absent  = anything else, including positions the guess never filled
//!
//! Unlike letter games there is no credit for a move that appears elsewhere
//! in the solution.

use super::{Move, split_guess, tokenize};

/// Verdict for one guessed position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Exact,
    Partial,
    Absent,
}

impl Classification {
    /// Compare a guessed move (if any) with the solution move at the same index
    ///
    /// The exact check runs before the base-letter check.
    #[must_use]
    pub fn of(guess: Option<&Move>, solution: &Move) -> Self {
        match guess {
            Some(g) if g.is_exact(solution) => Self::Exact,
            Some(g) if g.same_base(solution) => Self::Partial,
            _ => Self::Absent,
        }
    }

    /// Share glyph for this verdict
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Short label used in plain-text output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Absent => "absent",
        }
    }
}

/// One scored position of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItem {
    /// The guessed move, `None` for a blank position or a short guess
    pub token: Option<Move>,
    pub classification: Classification,
}

impl FeedbackItem {
    /// Text to show for this position (empty when nothing was guessed)
    #[must_use]
    pub fn token_text(&self) -> &str {
        self.token.as_ref().map_or("", Move::text)
    }
}

/// Feedback for one submitted guess, one item per solution move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    items: Vec<FeedbackItem>,
}

impl GuessRecord {
    /// Score guess positions against solution moves
    ///
    /// Only the first `solution.len()` positions are looked at. Blank or
    /// missing positions score as absent.
    #[must_use]
    pub fn score(solution: &[Move], guess: &[Option<Move>]) -> Self {
        let items = solution
            .iter()
            .enumerate()
            .map(|(i, expected)| {
                let guessed = guess.get(i).and_then(Option::as_ref);
                FeedbackItem {
                    token: guessed.cloned(),
                    classification: Classification::of(guessed, expected),
                }
            })
            .collect();

        Self { items }
    }

    /// Score a raw guess string against a raw solution string
    ///
    /// # Examples
    /// ```
    /// use algle::core::{Classification, GuessRecord};
    ///
    /// let record = GuessRecord::calculate("R U R' U'", "R U R2 U'");
    /// assert_eq!(record.items()[2].classification, Classification::Partial);
    /// assert_eq!(record.to_emoji(), "🟩 🟩 🟨 🟩");
    /// ```
    #[must_use]
    pub fn calculate(solution: &str, guess: &str) -> Self {
        Self::score(&tokenize(solution), &split_guess(guess))
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.classification == Classification::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Classification::Exact)
    }

    #[must_use]
    pub fn count_partial(&self) -> usize {
        self.count(Classification::Partial)
    }

    #[must_use]
    pub fn count_absent(&self) -> usize {
        self.count(Classification::Absent)
    }

    fn count(&self, classification: Classification) -> usize {
        self.items
            .iter()
            .filter(|item| item.classification == classification)
            .count()
    }

    /// Convert to the space-separated emoji row used in share text
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.items
            .iter()
            .map(|item| item.classification.emoji().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Absent, Exact, Partial};

    fn classes(record: &GuessRecord) -> Vec<Classification> {
        record.items().iter().map(|i| i.classification).collect()
    }

    #[test]
    fn record_all_exact() {
        let record = GuessRecord::calculate("R U R' U'", "R U R' U'");
        assert!(record.is_perfect());
        assert_eq!(record.count_exact(), 4);
        assert_eq!(record.count_partial(), 0);
        assert_eq!(record.count_absent(), 0);
    }

    #[test]
    fn record_wrong_modifier_is_partial() {
        let record = GuessRecord::calculate("R U R' U'", "R U R2 U'");
        assert_eq!(classes(&record), [Exact, Exact, Partial, Exact]);
        assert!(!record.is_perfect());
    }

    #[test]
    fn record_no_shared_bases() {
        let record = GuessRecord::calculate("R U R' U'", "L D L' D'");
        assert_eq!(classes(&record), [Absent; 4]);
    }

    #[test]
    fn record_short_guess_pads_absent() {
        let record = GuessRecord::calculate("R U R' U'", "R2");
        assert_eq!(classes(&record), [Partial, Absent, Absent, Absent]);
        assert_eq!(record.items()[0].token_text(), "R2");
        assert!(record.items()[1].token.is_none());
        assert_eq!(record.items()[3].token_text(), "");
    }

    #[test]
    fn record_long_guess_truncated() {
        let record = GuessRecord::calculate("R U", "R U R' U'");
        assert_eq!(record.len(), 2);
        assert!(record.is_perfect());
    }

    #[test]
    fn record_empty_guess() {
        let record = GuessRecord::calculate("R U R' U'", "");
        assert_eq!(record.len(), 4);
        assert_eq!(classes(&record), [Absent; 4]);
    }

    #[test]
    fn record_right_quote_counts_as_exact() {
        let record = GuessRecord::calculate("R\u{2019} U", "R' U");
        assert!(record.is_perfect());

        let reversed = GuessRecord::calculate("R' U", "R\u{2019} U");
        assert!(reversed.is_perfect());
    }

    #[test]
    fn record_leading_space_shifts_moves() {
        let record = GuessRecord::calculate("R U R' U'", " R U R' U'");
        assert_eq!(classes(&record), [Absent; 4]);
        assert!(record.items()[0].token.is_none());
        assert_eq!(record.items()[1].token_text(), "R");
    }

    #[test]
    fn record_double_space_leaves_a_gap() {
        let record = GuessRecord::calculate("R U R' U'", "R  U R' U'");
        assert_eq!(classes(&record), [Exact, Absent, Absent, Absent]);
        assert!(!record.is_perfect());
    }

    #[test]
    fn record_trailing_space_beyond_solution_is_ignored() {
        let record = GuessRecord::calculate("R U", "R U ");
        assert!(record.is_perfect());
    }

    #[test]
    fn record_is_positional_only() {
        // U and R both appear in the solution, but at other positions
        let record = GuessRecord::calculate("R U", "U R");
        assert_eq!(classes(&record), [Absent, Absent]);
    }

    #[test]
    fn record_wide_vs_layer_is_absent() {
        let record = GuessRecord::calculate("r U", "R U");
        assert_eq!(classes(&record), [Absent, Exact]);
    }

    #[test]
    fn record_keeps_guessed_text() {
        let record = GuessRecord::calculate("R U", "R\u{2019} U2");
        assert_eq!(record.items()[0].token_text(), "R\u{2019}");
        assert_eq!(record.items()[1].token_text(), "U2");
    }

    #[test]
    fn record_to_emoji() {
        let record = GuessRecord::calculate("R U R' U'", "R2 U F B");
        assert_eq!(record.to_emoji(), "🟨 🟩 ⬜ ⬜");
    }

    #[test]
    fn classification_labels() {
        assert_eq!(Exact.label(), "exact");
        assert_eq!(Partial.emoji(), '🟨');
        assert_eq!(Absent.emoji(), '⬜');
    }
}
