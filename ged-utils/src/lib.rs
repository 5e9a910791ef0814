//! Shared utility functions for GED crates.

/// Numeric helpers for display values
pub mod numbers {
    /// Round to a fixed number of decimal places. Exact ties go to the
    /// even neighbour, so 0.125 becomes 0.12 and 0.375 becomes 0.38.
    pub fn round_to(value: f64, places: u32) -> f64 {
        let factor = 10f64.powi(places as i32);
        (value * factor).round_ties_even() / factor
    }

    /// Round a percentage to the two decimals shown on the dashboard.
    pub fn round_percentage(value: f64) -> f64 {
        round_to(value, 2)
    }

    /// Whole TWh for display; the fractional part is dropped, not rounded.
    pub fn whole_twh(value: f64) -> i64 {
        value.trunc() as i64
    }

    /// `part` as a percentage of `whole`. Caller guarantees `whole != 0`.
    pub fn percentage_of(part: f64, whole: f64) -> f64 {
        part / whole * 100.0
    }

}

/// Text helpers for dashboard labels
pub mod labels {
    /// Format a percentage with exactly two decimals, e.g. "49.41".
    pub fn format_percentage(value: f64) -> String {
        format!("{:.2}", value)
    }

    /// Slider mark label for a year.
    pub fn year_mark(year: i32) -> String {
        year.to_string()
    }

}
