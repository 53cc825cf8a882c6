//! Puzzle day numbering

use chrono::NaiveDate;
use std::fmt;

/// 1-based day index since the deployment epoch
///
/// Doubles as the public puzzle number and the persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDay(u32);

impl PuzzleDay {
    /// Create a puzzle day from a raw number
    ///
    /// Returns `None` for 0, days start at 1.
    #[must_use]
    pub const fn new(number: u32) -> Option<Self> {
        if number == 0 { None } else { Some(Self(number)) }
    }

    /// Whole days from `epoch` to `today`, plus one
    ///
    /// Returns `None` if `today` is before `epoch`.
    ///
    /// # Examples
    /// ```
    /// use algle::puzzle::PuzzleDay;
    /// use chrono::NaiveDate;
    ///
    /// let epoch = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    /// let today = NaiveDate::from_ymd_opt(2024, 4, 11).unwrap();
    /// assert_eq!(PuzzleDay::between(epoch, today).unwrap().number(), 11);
    /// assert_eq!(PuzzleDay::between(today, epoch), None);
    /// ```
    #[must_use]
    pub fn between(epoch: NaiveDate, today: NaiveDate) -> Option<Self> {
        let elapsed = today.signed_duration_since(epoch).num_days();
        let number = u32::try_from(elapsed.checked_add(1)?).ok()?;
        Self::new(number)
    }

    #[inline]
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Catalog position for this day: `day mod len`
    ///
    /// Returns `None` for an empty catalog.
    #[must_use]
    pub const fn catalog_index(self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.0 as usize % len)
        }
    }
}

impl fmt::Display for PuzzleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_day_is_one() {
        let epoch = date(2024, 4, 1);
        assert_eq!(PuzzleDay::between(epoch, epoch), PuzzleDay::new(1));
    }

    #[test]
    fn counts_across_month_and_leap_day() {
        let epoch = date(2024, 2, 28);
        // 28th, 29th (leap), 1st
        assert_eq!(PuzzleDay::between(epoch, date(2024, 3, 1)).unwrap().number(), 3);
    }

    #[test]
    fn before_epoch_is_none() {
        assert_eq!(PuzzleDay::between(date(2024, 4, 1), date(2024, 3, 31)), None);
    }

    #[test]
    fn zero_is_not_a_day() {
        assert_eq!(PuzzleDay::new(0), None);
    }

    #[test]
    fn catalog_index_wraps() {
        let day = PuzzleDay::new(7).unwrap();
        assert_eq!(day.catalog_index(5), Some(2));
        assert_eq!(day.catalog_index(7), Some(0));
        assert_eq!(day.catalog_index(10), Some(7));
        assert_eq!(day.catalog_index(0), None);
    }

    #[test]
    fn display_is_number() {
        assert_eq!(PuzzleDay::new(42).unwrap().to_string(), "42");
    }
}
