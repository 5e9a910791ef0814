//! Query result model structs for the dashboard views.
//!
//! All structs derive `Serialize` so a renderer can consume them as JSON.

use ged_data::{Mode, YearRange};
use ged_utils::{labels, numbers};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bounds of the choropleth colour scale.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

/// Per-country total electricity (TWh) summed over the selected years.
///
/// Countries with no rows in the range are absent rather than zero.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MapColorValues {
    pub totals: BTreeMap<String, f64>,
    /// `None` when no country has data in the range.
    pub scale: Option<ColorScale>,
}

impl MapColorValues {
    pub fn get(&self, country: &str) -> Option<f64> {
        self.totals.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// A country's share of world production over a year range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryShare {
    pub country: String,
    /// TWh produced by the country over the range.
    pub country_total: f64,
    /// TWh produced by every country over the range.
    pub world_total: f64,
    /// Unrounded `100 * country_total / world_total`. Not clamped.
    pub percentage: f64,
    pub year_range: YearRange,
}

impl CountryShare {
    /// Percentage rounded to two decimals, as displayed.
    pub fn rounded_percentage(&self) -> f64 {
        numbers::round_percentage(self.percentage)
    }

    /// Card text, one line per entry.
    pub fn message(&self) -> Vec<String> {
        vec![
            self.country.clone(),
            format!(
                "Produced {} TWh of electricity",
                numbers::whole_twh(self.country_total)
            ),
            format!("In the range of years {}.", self.year_range),
            format!(
                "This represents {}% of world production.",
                labels::format_percentage(self.rounded_percentage())
            ),
        ]
    }
}

pub const SELECT_PROMPT: &str = "Select a country on the map to see details.";
pub const NO_DATA_NOTICE: &str = "No data available for the selected period.";

/// Outcome of the percentage query. Callers branch on every variant.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PercentageSummary {
    /// No country selected yet.
    NoSelection,
    /// World production over the range is zero.
    NoData {
        country: String,
        year_range: YearRange,
    },
    Share(CountryShare),
}

impl PercentageSummary {
    pub fn share(&self) -> Option<&CountryShare> {
        match self {
            PercentageSummary::Share(share) => Some(share),
            _ => None,
        }
    }

    /// Text the summary panel shows for this outcome.
    pub fn message(&self) -> Vec<String> {
        match self {
            PercentageSummary::NoSelection => vec![SELECT_PROMPT.to_string()],
            PercentageSummary::NoData { .. } => vec![NO_DATA_NOTICE.to_string()],
            PercentageSummary::Share(share) => share.message(),
        }
    }
}

/// One bar segment: a mode's production for a year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarPoint {
    pub year: i32,
    pub mode: Mode,
    pub value: f64,
}
