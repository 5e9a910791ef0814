//! Current UI selection and the dashboard state it implies.
//!
//! A [`SelectionState`] is never edited in place. Each transition returns
//! a new value, and a rejected transition leaves the caller holding the
//! previous one.

use crate::aggregate::percentage_summary;
use crate::dataset::Dataset;
use crate::derive::LongRecord;
use crate::models::PercentageSummary;
use ged_data::{SelectionError, YearRange};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub year_range: YearRange,
    pub selected_country: Option<String>,
}

/// Observable state of the whole dashboard.
///
/// There is no transition back to `Unselected`: once a country is picked
/// on the map it stays picked, and only the year range moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardStatus {
    /// No country chosen; the map shows global totals.
    Unselected,
    /// Country chosen and the world total for the range is non-zero.
    Selected,
    /// Country chosen but nothing was produced worldwide in the range.
    SelectedNoData,
}

impl DashboardStatus {
    /// Status implied by an already computed summary panel.
    pub fn from_summary(summary: &PercentageSummary) -> Self {
        match summary {
            PercentageSummary::NoSelection => DashboardStatus::Unselected,
            PercentageSummary::NoData { .. } => DashboardStatus::SelectedNoData,
            PercentageSummary::Share(_) => DashboardStatus::Selected,
        }
    }
}

impl SelectionState {
    /// Full observed year range, no country.
    pub fn initial(dataset: &Dataset) -> Result<Self, SelectionError> {
        let year_range = dataset.year_bounds().ok_or(SelectionError::NoYears)?;
        Ok(Self {
            year_range,
            selected_country: None,
        })
    }

    /// New state with a different year range, validated against `bounds`.
    pub fn with_year_range(
        &self,
        min: i32,
        max: i32,
        bounds: YearRange,
    ) -> Result<Self, SelectionError> {
        let year_range = YearRange::new(min, max)?;
        if !bounds.encloses(&year_range) {
            return Err(SelectionError::OutOfBounds {
                min,
                max,
                lower: bounds.min(),
                upper: bounds.max(),
            });
        }
        Ok(Self {
            year_range,
            selected_country: self.selected_country.clone(),
        })
    }

    /// New state with `country` selected. The year range is kept.
    pub fn with_country(&self, country: impl Into<String>) -> Self {
        Self {
            year_range: self.year_range,
            selected_country: Some(country.into()),
        }
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    /// Derived from [`percentage_summary`] for the current selection.
    pub fn status(&self, long: &[LongRecord]) -> DashboardStatus {
        DashboardStatus::from_summary(&percentage_summary(
            long,
            self.year_range,
            self.selected_country(),
        ))
    }
}
