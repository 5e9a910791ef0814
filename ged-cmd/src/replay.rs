//! Replay recorded interactions through the dashboard.
//!
//! Events are read from a JSON-lines file and applied strictly in file
//! order. A rejected transition is reported and skipped; the state from
//! before it stays in effect for the following events.

use anyhow::Context;
use ged_engine::{Dashboard, DashboardView, Dataset, Interaction};
use log::{info, warn};
use std::io::Write;

pub async fn run_replay(dataset: &Dataset, events_path: &str) -> anyhow::Result<()> {
    let events = tokio::fs::read_to_string(events_path)
        .await
        .with_context(|| format!("failed to read {}", events_path))?;
    let stdout = std::io::stdout();
    let count = replay_events(dataset, &events, |view| {
        let mut out = stdout.lock();
        serde_json::to_writer(&mut out, view)?;
        writeln!(out)?;
        Ok(())
    })?;
    info!("Replay complete: {} views from {}", count, events_path);
    Ok(())
}

/// Apply every event and hand the view after each accepted one to `emit`
/// before the next line is read. Returns the number of views emitted.
///
/// Blank lines are ignored. A line that is not a valid interaction is an
/// error naming its line number; views for earlier lines are already out.
pub fn replay_events<F>(dataset: &Dataset, events: &str, mut emit: F) -> anyhow::Result<usize>
where
    F: FnMut(&DashboardView) -> anyhow::Result<()>,
{
    let mut dashboard = Dashboard::new(dataset)?;
    let mut count = 0;
    for (i, line) in events.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: Interaction = serde_json::from_str(line)
            .with_context(|| format!("invalid interaction on line {}", i + 1))?;
        match dashboard.handle(event) {
            Ok(_) => {
                emit(&dashboard.view())?;
                count += 1;
            }
            Err(e) => {
                warn!("Skipping line {}: {}", i + 1, e);
                eprintln!("line {}: {}", i + 1, e);
            }
        }
    }
    Ok(count)
}
