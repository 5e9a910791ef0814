//! The immutable, load-once base table.

use crate::derive::{derive_records, melt, DerivedRecord, LongRecord};
use ged_data::{Record, SchemaError, YearRange};
use log::info;
use std::collections::BTreeSet;

/// Derived and long-form tables built once at startup.
///
/// Nothing here changes after construction; queries borrow it.
#[derive(Debug, Clone)]
pub struct Dataset {
    derived: Vec<DerivedRecord>,
    long: Vec<LongRecord>,
    years: Vec<i32>,
    countries: Vec<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let derived = derive_records(records);
        let long = melt(&derived);
        let years: Vec<i32> = derived
            .iter()
            .map(|d| d.record.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let countries: Vec<String> = derived
            .iter()
            .map(|d| d.record.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        info!(
            "Built dataset: {} records, {} long rows, {} countries, {} years",
            derived.len(),
            long.len(),
            countries.len(),
            years.len()
        );
        Self {
            derived,
            long,
            years,
            countries,
        }
    }

    /// Load from a CSV string and build the derived tables.
    pub fn load(csv_data: &str) -> Result<Self, SchemaError> {
        Ok(Self::from_records(Record::parse_energy_csv(csv_data)?))
    }

    pub fn derived(&self) -> &[DerivedRecord] {
        &self.derived
    }

    pub fn long(&self) -> &[LongRecord] {
        &self.long
    }

    /// Distinct years present, ascending (the slider marks).
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Distinct countries present, sorted.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Observed year bounds; `None` for an empty table.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let first = *self.years.first()?;
        let last = *self.years.last()?;
        Some(YearRange::single(first).extend(last))
    }

    pub fn is_empty(&self) -> bool {
        self.derived.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/global-electricity-sample.csv");

    #[test]
    fn dataset_builds_both_tables() {
        let dataset = Dataset::load(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.derived().len(), 7);
        assert_eq!(dataset.long().len(), 21);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn dataset_exposes_bounds_marks_and_countries() {
        let dataset = Dataset::load(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.years(), &[2000, 2001, 2002]);
        assert_eq!(
            dataset.year_bounds(),
            Some(YearRange::new(2000, 2002).unwrap())
        );
        assert_eq!(
            dataset.countries(),
            &["France", "Germany", "Iceland", "Kenya"]
        );
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_bounds(), None);
    }

    #[test]
    fn load_reports_schema_errors() {
        let err = Dataset::load("Country,Year\nX,2010\n").unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn { .. }));
    }
}
