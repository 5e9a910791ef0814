//! Derived fields computed once after load.
//!
//! Each [`Record`] gets a total electricity figure, and the table is
//! melted into long form: one [`LongRecord`] per (record, mode) pair.

use ged_data::{Mode, Record};
use serde::Serialize;

/// A record plus its total electricity over all three modes (TWh).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub total_electricity: f64,
}

/// One (country, year, mode) figure of the long-form table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LongRecord {
    pub country: String,
    pub continent: String,
    pub year: i32,
    pub mode: Mode,
    /// Electricity in TWh.
    pub value: f64,
}

pub fn derive_record(record: Record) -> DerivedRecord {
    let total_electricity = record.fossil + record.nuclear + record.renewables;
    DerivedRecord {
        record,
        total_electricity,
    }
}

pub fn derive_records(records: Vec<Record>) -> Vec<DerivedRecord> {
    records.into_iter().map(derive_record).collect()
}

/// Reshape into long form, three rows per record in [`Mode::ALL`] order.
pub fn melt(derived: &[DerivedRecord]) -> Vec<LongRecord> {
    let mut long = Vec::with_capacity(derived.len() * Mode::ALL.len());
    for d in derived {
        for mode in Mode::ALL {
            long.push(LongRecord {
                country: d.record.country.clone(),
                continent: d.record.continent.clone(),
                year: d.record.year,
                mode,
                value: d.record.electricity(mode),
            });
        }
    }
    long
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/global-electricity-sample.csv");

    fn sample() -> Vec<DerivedRecord> {
        derive_records(Record::parse_energy_csv(SAMPLE_CSV).unwrap())
    }

    #[test]
    fn total_is_exact_sum_of_sources() {
        for d in sample() {
            let r = &d.record;
            assert_eq!(d.total_electricity, r.fossil + r.nuclear + r.renewables);
            assert!(d.total_electricity >= 0.0);
        }
    }

    #[test]
    fn single_record_total() {
        let d = derive_record(Record {
            country: "X".to_string(),
            continent: "Nowhere".to_string(),
            year: 2010,
            fossil: 10.0,
            nuclear: 5.0,
            renewables: 5.0,
        });
        assert_eq!(d.total_electricity, 20.0);
    }

    #[test]
    fn melt_has_three_rows_per_record() {
        let derived = sample();
        let long = melt(&derived);
        assert_eq!(long.len(), 3 * derived.len());
        assert!(melt(&[]).is_empty());
    }

    #[test]
    fn melt_uses_normalized_labels_and_source_values() {
        let derived = sample();
        let long = melt(&derived);
        let france_2000: Vec<&LongRecord> = long
            .iter()
            .filter(|l| l.country == "France" && l.year == 2000)
            .collect();
        assert_eq!(france_2000.len(), 3);
        assert_eq!(france_2000[0].mode, Mode::FossilFuels);
        assert_eq!(france_2000[0].value, 50.0);
        assert_eq!(france_2000[1].mode.label(), "Nuclear");
        assert_eq!(france_2000[1].value, 400.0);
        assert_eq!(france_2000[2].mode.label(), "Renewables");
        assert_eq!(france_2000[2].value, 70.0);
        assert_eq!(france_2000[2].continent, "Europe");
    }

    #[test]
    fn long_values_sum_to_derived_totals() {
        let derived = sample();
        let long = melt(&derived);
        let long_sum: f64 = long.iter().map(|l| l.value).sum();
        let derived_sum: f64 = derived.iter().map(|d| d.total_electricity).sum();
        assert_eq!(long_sum, derived_sum);
    }
}
