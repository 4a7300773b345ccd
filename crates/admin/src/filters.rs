//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, Utc};

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(Utc::now().year())
}

/// Today's date in long form, e.g. "Thursday, October 15, 2026".
///
/// Usage in templates: `{{ ""|today }}`
#[askama::filter_fn]
pub fn today(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(long_date(&Local::now()))
}

/// Format a timestamp as a long date in the viewer's local zone.
#[must_use]
pub fn long_date<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}

/// Format a timestamp as a 12-hour clock time, e.g. "9:05 AM".
#[must_use]
pub fn clock_time<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-I:%M %p").to_string()
}
