//! Time units.
//!
//! Arrival-time labels and the search budget are simulated travel time in
//! **hours** (`f64`).  Users specify budgets in whole minutes; wall-clock
//! durations appear only in diagnostic logs.

use std::time::Duration;

/// Convert a budget in minutes to the hours used by arrival labels.
#[inline]
pub fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / 60.0
}

#[inline]
pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * 60.0
}

/// Render a wall-clock duration as `HH:MM:SS`.
///
/// Whole days are dropped; runs longer than a day wrap.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs() % 86_400;
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
