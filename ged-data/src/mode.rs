use crate::error::SchemaError;
use serde::Serialize;
use std::fmt;

const COLUMN_PREFIX: &str = "Electricity from ";
const COLUMN_SUFFIX: &str = " (TWh)";

/// An electricity source category.
///
/// Source columns are named `Electricity from <Mode> (TWh)`; the bare
/// `<Mode>` part is the normalized label used everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Mode {
    #[serde(rename = "Fossil Fuels")]
    FossilFuels,
    #[serde(rename = "Nuclear")]
    Nuclear,
    #[serde(rename = "Renewables")]
    Renewables,
}

impl Mode {
    /// All modes, in source column order.
    pub const ALL: [Mode; 3] = [Mode::FossilFuels, Mode::Nuclear, Mode::Renewables];

    /// Position within [`Mode::ALL`].
    pub fn index(self) -> usize {
        match self {
            Mode::FossilFuels => 0,
            Mode::Nuclear => 1,
            Mode::Renewables => 2,
        }
    }

    /// Raw column header in the input table.
    pub fn column(self) -> &'static str {
        match self {
            Mode::FossilFuels => "Electricity from Fossil Fuels (TWh)",
            Mode::Nuclear => "Electricity from Nuclear (TWh)",
            Mode::Renewables => "Electricity from Renewables (TWh)",
        }
    }

    /// Normalized label, e.g. "Nuclear".
    pub fn label(self) -> &'static str {
        match self {
            Mode::FossilFuels => "Fossil Fuels",
            Mode::Nuclear => "Nuclear",
            Mode::Renewables => "Renewables",
        }
    }

    /// Map a raw column header to its mode.
    ///
    /// The mapping is total over the three known modes and has no fallback.
    pub fn from_column(column: &str) -> Result<Mode, SchemaError> {
        let bare = column
            .trim()
            .strip_prefix(COLUMN_PREFIX)
            .and_then(|s| s.strip_suffix(COLUMN_SUFFIX))
            .ok_or_else(|| SchemaError::UnknownMode(column.to_string()))?;
        Mode::ALL
            .into_iter()
            .find(|mode| mode.label() == bare.trim())
            .ok_or_else(|| SchemaError::UnknownMode(column.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
