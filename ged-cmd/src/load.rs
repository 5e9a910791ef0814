//! Startup loading and flag-to-selection conversion.

use anyhow::Context;
use ged_engine::{Dataset, SelectionState};
use log::info;

/// Read and build the dataset. Any schema problem aborts the command.
pub async fn load_dataset(path: &str) -> anyhow::Result<Dataset> {
    let csv_data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path))?;
    let dataset =
        Dataset::load(&csv_data).with_context(|| format!("failed to load dataset {}", path))?;
    info!("Loaded {} records from {}", dataset.derived().len(), path);
    Ok(dataset)
}

/// Build a selection the same way interactions would: start from the
/// initial state, then apply the range and the country.
pub fn selection_from_flags(
    dataset: &Dataset,
    from: Option<i32>,
    to: Option<i32>,
    country: Option<String>,
) -> anyhow::Result<SelectionState> {
    let initial = SelectionState::initial(dataset)?;
    let bounds = initial.year_range;
    let mut state = initial.with_year_range(
        from.unwrap_or(bounds.min()),
        to.unwrap_or(bounds.max()),
        bounds,
    )?;
    if let Some(country) = country {
        state = state.with_country(country);
    }
    Ok(state)
}
