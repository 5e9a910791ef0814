//! One-shot renderings of the dashboard views.

use ged_engine::{
    bar_series, map_color_values, percentage_summary, BarPoint, Dataset, MapColorValues,
    SelectionState,
};
use ged_utils::labels;
use log::info;
use std::io::Write;

pub fn run_info(dataset: &Dataset) -> anyhow::Result<()> {
    for line in info_lines(dataset) {
        println!("{}", line);
    }
    Ok(())
}

fn info_lines(dataset: &Dataset) -> Vec<String> {
    let bounds = dataset
        .year_bounds()
        .map_or_else(|| "none".to_string(), |b| b.to_string());
    let marks: Vec<String> = dataset.years().iter().map(|&y| labels::year_mark(y)).collect();
    vec![
        format!("records: {}", dataset.derived().len()),
        format!("long rows: {}", dataset.long().len()),
        format!("countries: {}", dataset.countries().len()),
        format!("years: {}", bounds),
        format!("marks: {}", marks.join(" ")),
    ]
}

pub fn run_map(dataset: &Dataset, state: &SelectionState, json: bool) -> anyhow::Result<()> {
    let map = map_color_values(dataset.derived(), state.year_range);
    info!(
        "Map for {}: {} countries",
        state.year_range,
        map.len()
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for line in map_lines(&map) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn map_lines(map: &MapColorValues) -> Vec<String> {
    let mut lines: Vec<String> = map
        .totals
        .iter()
        .map(|(country, total)| format!("{:<32} {:>14.2}", country, total))
        .collect();
    match map.scale {
        Some(scale) => lines.push(format!("scale: {:.2} - {:.2} TWh", scale.min, scale.max)),
        None => lines.push("scale: no data in range".to_string()),
    }
    lines
}

pub fn run_summary(dataset: &Dataset, state: &SelectionState) -> anyhow::Result<()> {
    let summary = percentage_summary(
        dataset.long(),
        state.year_range,
        state.selected_country(),
    );
    for line in summary.message() {
        println!("{}", line);
    }
    Ok(())
}

pub fn run_bars(
    dataset: &Dataset,
    state: &SelectionState,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let bars = bar_series(dataset.long(), state.selected_country(), state.year_range);
    if bars.is_empty() {
        info!("Nothing to render for {:?}", state.selected_country());
    }
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_bars(&bars, file)?;
            info!("Wrote {} bars to {}", bars.len(), path);
        }
        None => write_bars(&bars, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Write bars as CSV with a `year,mode,value` header.
pub fn write_bars<W: Write>(bars: &[BarPoint], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["year", "mode", "value"])?;
    for bar in bars {
        wtr.serialize(bar)?;
    }
    wtr.flush()?;
    Ok(())
}
