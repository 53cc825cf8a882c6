//! Cube move notation
//!
//! A Move is one whitespace-free token of an algorithm such as `R`, `U'`,
//! `r2` or `x`. Its first character is the base face or axis; anything after
//! it is a direction/count modifier.

use std::fmt;

/// ASCII apostrophe used for counter-clockwise turns
const PRIME: char = '\'';

/// Typographic apostrophe that word processors substitute for `'`
const RIGHT_QUOTE: char = '\u{2019}';

/// A single move token
///
/// Stores the token exactly as written, so feedback can echo the player's
/// input, and a normalized form used for comparisons.
#[derive(Debug, Clone)]
pub struct Move {
    text: String,
    normalized: String,
    base: char,
}

/// Error type for invalid move tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Move token must not be empty")]
    Empty,
    #[error("Move token must not contain whitespace: {0:?}")]
    ContainsWhitespace(String),
}

/// What part of the cube a move turns, judged from its base character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    /// Single outer layer: `R L U D F B`
    Layer,
    /// Middle slice: `M E S`
    Slice,
    /// Two layers at once: `r l u d f b` (and `Rw`-style tokens)
    Wide,
    /// Whole cube: `x y z`
    Rotation,
    /// Anything this notation does not know about
    Other,
}

impl Move {
    /// Create a new Move from a token
    ///
    /// # Errors
    /// Returns `MoveError` if the token is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use algle::core::Move;
    ///
    /// let prime = Move::new("R'").unwrap();
    /// assert_eq!(prime.base(), 'R');
    /// assert_eq!(prime.modifier(), "'");
    ///
    /// assert!(Move::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, MoveError> {
        let text: String = text.into();

        if text.chars().any(char::is_whitespace) {
            return Err(MoveError::ContainsWhitespace(text));
        }

        let normalized = text.replace(RIGHT_QUOTE, &PRIME.to_string());

        let Some(base) = normalized.chars().next() else {
            return Err(MoveError::Empty);
        };

        Ok(Self {
            text,
            normalized,
            base,
        })
    }

    /// Get the token as written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the token with typographic apostrophes replaced by `'`
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Base face or axis letter (case-sensitive)
    #[inline]
    #[must_use]
    pub const fn base(&self) -> char {
        self.base
    }

    /// Everything after the base letter, normalized
    #[must_use]
    pub fn modifier(&self) -> &str {
        &self.normalized[self.base.len_utf8()..]
    }

    /// Exact match: same token once apostrophes are normalized
    #[inline]
    #[must_use]
    pub fn is_exact(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }

    /// Same base face or axis, whatever the modifier
    #[inline]
    #[must_use]
    pub const fn same_base(&self, other: &Self) -> bool {
        self.base == other.base
    }

    /// Classify the base character
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match self.base {
            'R' | 'L' | 'U' | 'D' | 'F' | 'B' if self.modifier().starts_with('w') => {
                MoveKind::Wide
            }
            'R' | 'L' | 'U' | 'D' | 'F' | 'B' => MoveKind::Layer,
            'M' | 'E' | 'S' => MoveKind::Slice,
            'r' | 'l' | 'u' | 'd' | 'f' | 'b' => MoveKind::Wide,
            'x' | 'y' | 'z' => MoveKind::Rotation,
            _ => MoveKind::Other,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.is_exact(other)
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Layer => "layer",
            Self::Slice => "slice",
            Self::Wide => "wide",
            Self::Rotation => "rotation",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Split a catalog algorithm into moves
///
/// Runs of whitespace count as one separator. Only for trusted algorithm
/// text; guesses go through [`split_guess`].
///
/// # Examples
/// ```
/// use algle::core::tokenize;
///
/// let moves = tokenize("R U R' U'");
/// assert_eq!(moves.len(), 4);
/// assert_eq!(moves[2].text(), "R'");
///
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(algorithm: &str) -> Vec<Move> {
    algorithm
        .split_whitespace()
        .filter_map(|token| Move::new(token).ok())
        .collect()
}

/// Split a raw guess into positions on single spaces
///
/// Every piece keeps its position. An empty piece (from a leading space or a
/// double space) is `None` and later scores as absent, shifting the moves
/// after it.
///
/// # Examples
/// ```
/// use algle::core::split_guess;
///
/// let positions = split_guess(" R U");
/// assert_eq!(positions.len(), 3);
/// assert!(positions[0].is_none());
/// assert_eq!(positions[1].as_ref().map(|m| m.text()), Some("R"));
/// ```
#[must_use]
pub fn split_guess(raw: &str) -> Vec<Option<Move>> {
    raw.split(' ').map(|token| Move::new(token).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_creation_valid() {
        let m = Move::new("R2").unwrap();
        assert_eq!(m.text(), "R2");
        assert_eq!(m.base(), 'R');
        assert_eq!(m.modifier(), "2");
    }

    #[test]
    fn move_creation_invalid() {
        assert_eq!(Move::new(""), Err(MoveError::Empty));
        assert!(matches!(
            Move::new("R U"),
            Err(MoveError::ContainsWhitespace(_))
        ));
    }

    #[test]
    fn move_right_quote_normalized() {
        let typographic = Move::new("R\u{2019}").unwrap();
        let ascii = Move::new("R'").unwrap();

        assert_eq!(typographic.text(), "R\u{2019}");
        assert_eq!(typographic.normalized(), "R'");
        assert_eq!(typographic.modifier(), "'");
        assert!(typographic.is_exact(&ascii));
        assert_eq!(typographic, ascii);
    }

    #[test]
    fn move_base_is_case_sensitive() {
        let layer = Move::new("R").unwrap();
        let wide = Move::new("r").unwrap();
        assert!(!layer.same_base(&wide));
        assert!(!layer.is_exact(&wide));
    }

    #[test]
    fn move_same_base_different_modifier() {
        let prime = Move::new("U'").unwrap();
        let double = Move::new("U2").unwrap();
        assert!(prime.same_base(&double));
        assert!(!prime.is_exact(&double));
    }

    #[test]
    fn move_kinds() {
        let kind = |t: &str| Move::new(t).unwrap().kind();
        assert_eq!(kind("R'"), MoveKind::Layer);
        assert_eq!(kind("M2"), MoveKind::Slice);
        assert_eq!(kind("r"), MoveKind::Wide);
        assert_eq!(kind("Rw2"), MoveKind::Wide);
        assert_eq!(kind("x'"), MoveKind::Rotation);
        assert_eq!(kind("Q"), MoveKind::Other);
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        let moves = tokenize("  R  U\tR' ");
        let texts: Vec<&str> = moves.iter().map(Move::text).collect();
        assert_eq!(texts, ["R", "U", "R'"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    fn guess_texts(raw: &str) -> Vec<Option<String>> {
        split_guess(raw)
            .into_iter()
            .map(|m| m.map(|m| m.text().to_string()))
            .collect()
    }

    #[test]
    fn split_guess_single_spaces() {
        assert_eq!(
            guess_texts("R U R'"),
            [Some("R".to_string()), Some("U".to_string()), Some("R'".to_string())]
        );
    }

    #[test]
    fn split_guess_keeps_empty_positions() {
        assert_eq!(guess_texts(" R"), [None, Some("R".to_string())]);
        assert_eq!(
            guess_texts("R  U"),
            [Some("R".to_string()), None, Some("U".to_string())]
        );
    }

    #[test]
    fn split_guess_empty_is_one_blank_position() {
        assert_eq!(guess_texts(""), [None]);
    }

    #[test]
    fn split_guess_tab_inside_token_is_blank() {
        assert_eq!(guess_texts("R\tU"), [None]);
    }

    #[test]
    fn move_display() {
        let m = Move::new("F'").unwrap();
        assert_eq!(format!("{m}"), "F'");
    }
}
