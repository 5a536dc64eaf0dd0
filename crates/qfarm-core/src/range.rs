//! Year range for projections

use crate::error::{QFarmError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive range of consecutive years
///
/// Only constructible through [`YearRange::new`], so `start <= end` always
/// holds and the range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange", into = "RawYearRange")]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Create a validated range
    ///
    /// # Errors
    /// `InvalidRange` if `end < start`
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if end < start {
            return Err(QFarmError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First year
    #[inline]
    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last year (inclusive)
    #[inline]
    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of years
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn len(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    /// Always false; kept for the `len`/`is_empty` pair
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether a year lies within the range
    #[inline]
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Years elapsed since `start`
    #[inline]
    #[must_use]
    pub fn offset_of(&self, year: i32) -> i64 {
        i64::from(year) - i64::from(self.start)
    }

    /// Iterate the years in order
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 2020,
            end: 2050,
        }
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize)]
struct RawYearRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = QFarmError;

    fn try_from(raw: RawYearRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl From<YearRange> for RawYearRange {
    fn from(range: YearRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_range_matches_dashboard() {
        let range = YearRange::default();
        assert_eq!(range.start(), 2020);
        assert_eq!(range.end(), 2050);
        assert_eq!(range.len(), 31);
    }

    #[test]
    fn reversed_range_rejected() {
        let err = YearRange::new(2050, 2020).unwrap_err();
        assert!(matches!(
            err,
            QFarmError::InvalidRange { start: 2050, end: 2020 }
        ));
    }

    #[test]
    fn single_year_range() {
        let range = YearRange::new(2030, 2030).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![2030]);
    }

    #[test]
    fn offset_spans_full_i32_range() {
        let range = YearRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(range.offset_of(i32::MIN), 0);
        assert_eq!(range.offset_of(i32::MAX), i64::from(u32::MAX));
        assert_eq!(range.len(), 1usize << 32);
    }

    #[test]
    fn contains_is_inclusive() {
        let range = YearRange::new(2020, 2022).unwrap();
        assert!(range.contains(2020));
        assert!(range.contains(2022));
        assert!(!range.contains(2019));
        assert!(!range.contains(2023));
    }

    #[test]
    fn deserialize_rejects_reversed() {
        let parsed: std::result::Result<YearRange, _> =
            serde_json::from_str(r#"{"start":2040,"end":2030}"#);
        assert!(parsed.is_err());
    }

    proptest! {
        #[test]
        fn prop_iter_is_consecutive(start in -5000i32..5000, span in 0i32..500) {
            let range = YearRange::new(start, start + span).unwrap();
            let years: Vec<i32> = range.iter().collect();
            prop_assert_eq!(years.len(), range.len());
            prop_assert!(years.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }
}
