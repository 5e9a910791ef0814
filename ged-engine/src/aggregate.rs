//! Read-only aggregation queries over the immutable base tables.
//!
//! Each function is pure: the same arguments always give the same result,
//! and nothing is cached between calls.

use crate::derive::{DerivedRecord, LongRecord};
use crate::models::{BarPoint, ColorScale, CountryShare, MapColorValues, PercentageSummary};
use ged_data::YearRange;
use ged_utils::numbers;
use log::debug;
use std::collections::BTreeMap;

/// Total electricity per country summed over every year in `year_range`.
///
/// The colour scale spans the smallest and largest country totals of the
/// current filter.
pub fn map_color_values(derived: &[DerivedRecord], year_range: YearRange) -> MapColorValues {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for d in derived
        .iter()
        .filter(|d| year_range.contains(d.record.year))
    {
        *totals.entry(d.record.country.clone()).or_insert(0.0) += d.total_electricity;
    }
    let scale = totals.values().fold(None, |scale: Option<ColorScale>, &v| {
        Some(match scale {
            None => ColorScale { min: v, max: v },
            Some(s) => ColorScale {
                min: s.min.min(v),
                max: s.max.max(v),
            },
        })
    });
    debug!(
        "map_color_values {}: {} countries",
        year_range,
        totals.len()
    );
    MapColorValues { totals, scale }
}

/// Share of world production for the selected country over `year_range`.
///
/// World production sums every mode of every country in the range. A
/// country absent from the data still gets a share of zero as long as the
/// world total is non-zero.
pub fn percentage_summary(
    long: &[LongRecord],
    year_range: YearRange,
    selected_country: Option<&str>,
) -> PercentageSummary {
    let Some(country) = selected_country else {
        return PercentageSummary::NoSelection;
    };

    let mut country_total = 0.0;
    let mut world_total = 0.0;
    for l in long.iter().filter(|l| year_range.contains(l.year)) {
        world_total += l.value;
        if l.country == country {
            country_total += l.value;
        }
    }
    debug!(
        "percentage_summary {} {}: country={} world={}",
        country, year_range, country_total, world_total
    );

    if world_total == 0.0 {
        return PercentageSummary::NoData {
            country: country.to_string(),
            year_range,
        };
    }

    PercentageSummary::Share(CountryShare {
        country: country.to_string(),
        country_total,
        world_total,
        percentage: numbers::percentage_of(country_total, world_total),
        year_range,
    })
}

/// Per-year, per-mode production of the selected country.
///
/// Ordered by year; within a year the long-table order (mode order) is
/// kept. Missing (year, mode) pairs are not filled with zeros. Empty when
/// nothing is selected or nothing matches.
pub fn bar_series(
    long: &[LongRecord],
    selected_country: Option<&str>,
    year_range: YearRange,
) -> Vec<BarPoint> {
    let Some(country) = selected_country else {
        return Vec::new();
    };
    let mut bars: Vec<BarPoint> = long
        .iter()
        .filter(|l| l.country == country && year_range.contains(l.year))
        .map(|l| BarPoint {
            year: l.year,
            mode: l.mode,
            value: l.value,
        })
        .collect();
    bars.sort_by_key(|b| b.year);
    debug!(
        "bar_series {} {}: {} bars",
        country,
        year_range,
        bars.len()
    );
    bars
}
