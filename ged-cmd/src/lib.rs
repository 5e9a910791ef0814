//! Command implementations for GED CLI.
//!
//! Each subcommand loads the dataset once, builds a selection from its
//! flags and prints one of the dashboard views.

use clap::Subcommand;

pub mod load;
pub mod replay;
pub mod views;

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the dataset: countries, year bounds and slider marks
    Info {
        /// Path to the electricity CSV
        #[arg(short = 'd', long)]
        data: String,
    },

    /// Per-country total electricity for the choropleth
    Map {
        #[arg(short = 'd', long)]
        data: String,

        /// First year of the range (defaults to the earliest year)
        #[arg(long)]
        from: Option<i32>,

        /// Last year of the range (defaults to the latest year)
        #[arg(long)]
        to: Option<i32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// A country's share of world production
    Summary {
        #[arg(short = 'd', long)]
        data: String,

        /// Country as it would be clicked on the map
        #[arg(short = 'c', long)]
        country: Option<String>,

        #[arg(long)]
        from: Option<i32>,

        #[arg(long)]
        to: Option<i32>,
    },

    /// Per-year, per-source breakdown for a country, as CSV
    Bars {
        #[arg(short = 'd', long)]
        data: String,

        #[arg(short = 'c', long)]
        country: String,

        #[arg(long)]
        from: Option<i32>,

        #[arg(long)]
        to: Option<i32>,

        /// Output CSV path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Feed a JSON-lines file of interactions through the dashboard
    Replay {
        #[arg(short = 'd', long)]
        data: String,

        /// One interaction per line, e.g. {"event":"country_selected","country":"Kenya"}
        #[arg(short = 'e', long)]
        events: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Info { data } => {
            let dataset = load::load_dataset(&data).await?;
            views::run_info(&dataset)
        }
        Command::Map {
            data,
            from,
            to,
            json,
        } => {
            let dataset = load::load_dataset(&data).await?;
            let state = load::selection_from_flags(&dataset, from, to, None)?;
            views::run_map(&dataset, &state, json)
        }
        Command::Summary {
            data,
            country,
            from,
            to,
        } => {
            let dataset = load::load_dataset(&data).await?;
            let state = load::selection_from_flags(&dataset, from, to, country)?;
            views::run_summary(&dataset, &state)
        }
        Command::Bars {
            data,
            country,
            from,
            to,
            output,
        } => {
            let dataset = load::load_dataset(&data).await?;
            let state = load::selection_from_flags(&dataset, from, to, Some(country))?;
            views::run_bars(&dataset, &state, output.as_deref())
        }
        Command::Replay { data, events } => {
            let dataset = load::load_dataset(&data).await?;
            replay::run_replay(&dataset, &events).await
        }
    }
}
