//! Reactive core of the global electricity dashboard.
//!
//! The base table is loaded once and never mutated. Every user interaction
//! produces a new [`SelectionState`], and the three aggregation queries are
//! recomputed from the immutable data:
//!
//! - [`map_color_values`]: per-country totals for the choropleth
//! - [`percentage_summary`]: the selected country's share of world production
//! - [`bar_series`]: per-year, per-mode breakdown for the selected country
//!
//! # Usage
//!
//! ```rust
//! use ged_engine::{Dashboard, Dataset, Interaction};
//!
//! let dataset = Dataset::load(
//!     "Country,Continent,Year,Electricity from Fossil Fuels (TWh),Electricity from Nuclear (TWh),Electricity from Renewables (TWh)\n\
//!      X,Nowhere,2010,10,5,5\n",
//! )
//! .unwrap();
//!
//! let mut dashboard = Dashboard::new(&dataset).unwrap();
//! dashboard
//!     .handle(Interaction::CountrySelected { country: "X".to_string() })
//!     .unwrap();
//! let view = dashboard.view();
//! assert_eq!(view.bars.len(), 3);
//! ```

pub mod aggregate;
pub mod dashboard;
pub mod dataset;
pub mod derive;
pub mod models;
pub mod selection;

pub use aggregate::{bar_series, map_color_values, percentage_summary};
pub use dashboard::{Dashboard, DashboardView, Interaction};
pub use dataset::Dataset;
pub use derive::{DerivedRecord, LongRecord};
pub use models::{BarPoint, ColorScale, CountryShare, MapColorValues, PercentageSummary};
pub use selection::{DashboardStatus, SelectionState};
