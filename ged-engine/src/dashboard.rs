//! In-order interaction dispatcher.
//!
//! Events are applied one at a time in arrival order. Rapid slider drags
//! are not coalesced, so every intermediate range is observable.

use crate::aggregate::{bar_series, map_color_values, percentage_summary};
use crate::dataset::Dataset;
use crate::models::{BarPoint, MapColorValues, PercentageSummary};
use crate::selection::{DashboardStatus, SelectionState};
use ged_data::{SelectionError, YearRange};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// A user interaction that drives recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Interaction {
    /// Range slider moved.
    YearRangeChanged { min: i32, max: i32 },
    /// Country clicked on the map.
    CountrySelected { country: String },
}

/// Everything the renderer needs after an interaction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub status: DashboardStatus,
    pub selection: SelectionState,
    pub map: MapColorValues,
    pub summary: PercentageSummary,
    pub bars: Vec<BarPoint>,
}

/// Holds the base data and the current selection.
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    bounds: YearRange,
    state: SelectionState,
}

impl<'a> Dashboard<'a> {
    /// Start in the initial state: full year range, nothing selected.
    pub fn new(dataset: &'a Dataset) -> Result<Self, SelectionError> {
        let state = SelectionState::initial(dataset)?;
        Ok(Self {
            dataset,
            bounds: state.year_range,
            state,
        })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply one interaction. On error the previous state is kept.
    pub fn handle(&mut self, event: Interaction) -> Result<&SelectionState, SelectionError> {
        let next = match &event {
            Interaction::YearRangeChanged { min, max } => {
                self.state.with_year_range(*min, *max, self.bounds)
            }
            Interaction::CountrySelected { country } => {
                Ok(self.state.with_country(country.as_str()))
            }
        };
        match next {
            Ok(state) => {
                info!("Applied {:?}", event);
                self.state = state;
                Ok(&self.state)
            }
            Err(e) => {
                warn!("Rejected {:?}: {}", event, e);
                Err(e)
            }
        }
    }

    /// Recompute every view from the base data for the current state.
    /// The status is read off the summary, so the two always agree.
    pub fn view(&self) -> DashboardView {
        let range = self.state.year_range;
        let country = self.state.selected_country();
        let summary = percentage_summary(self.dataset.long(), range, country);
        DashboardView {
            status: DashboardStatus::from_summary(&summary),
            selection: self.state.clone(),
            map: map_color_values(self.dataset.derived(), range),
            summary,
            bars: bar_series(self.dataset.long(), country, range),
        }
    }
}
