use crate::error::SelectionError;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive range of years, `min <= max`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, SelectionError> {
        if min > max {
            return Err(SelectionError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn single(year: i32) -> Self {
        Self {
            min: year,
            max: year,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// True if every year of `other` lies within `self`.
    pub fn encloses(&self, other: &YearRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Number of years covered.
    pub fn span(&self) -> u32 {
        self.min.abs_diff(self.max) + 1
    }

    /// Smallest range covering both `self` and `year`.
    pub fn extend(&self, year: i32) -> Self {
        Self {
            min: self.min.min(year),
            max: self.max.max(year),
        }
    }

    /// Every year from `min` through `max`.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::YearRange;
    use crate::error::SelectionError;

    #[test]
    fn test_year_range_iteration() {
        let range = YearRange::new(2000, 2004).unwrap();
        let years: Vec<i32> = range.years().collect();
        assert_eq!(years.len(), 5);
        assert_eq!(years[0], 2000);
        assert_eq!(years[4], 2004);
        assert_eq!(range.span(), 5);
    }

    #[test]
    fn test_year_range_single_year() {
        let range = YearRange::single(2010);
        let years: Vec<i32> = range.years().collect();
        assert_eq!(years, vec![2010]);
        assert!(range.contains(2010));
        assert!(!range.contains(2011));
    }

    #[test]
    fn test_year_range_rejects_inverted_bounds() {
        assert_eq!(
            YearRange::new(2012, 2011),
            Err(SelectionError::EmptyRange {
                min: 2012,
                max: 2011
            })
        );
    }

    #[test]
    fn test_encloses_and_extend() {
        let outer = YearRange::new(2000, 2020).unwrap();
        let inner = YearRange::new(2005, 2010).unwrap();
        assert!(outer.encloses(&inner));
        assert!(!inner.encloses(&outer));
        assert_eq!(inner.extend(2015), YearRange::new(2005, 2015).unwrap());
        assert_eq!(inner.extend(2001), YearRange::new(2001, 2010).unwrap());
    }

    #[test]
    fn test_display_matches_range_label() {
        assert_eq!(YearRange::new(2000, 2020).unwrap().to_string(), "2000-2020");
    }
}
