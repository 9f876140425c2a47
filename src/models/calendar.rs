//! Calendar helpers: date parsing, month names and key normalization

use chrono::{Datelike, Local, Month, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::error::{TrackerError, TrackerResult};

/// Canonical storage format for dates
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Older data files wrote dates day-first
const LEGACY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date in `YYYY-MM-DD` or `DD-MM-YYYY` form
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, STORAGE_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, LEGACY_DATE_FORMAT))
        .map_err(|_| {
            TrackerError::Input(format!(
                "'{}' is not a valid date (use YYYY-MM-DD)",
                input
            ))
        })
}

/// Full English month name of a date, e.g. "June"
pub fn month_name(date: NaiveDate) -> &'static str {
    // month() is always 1..=12, so the conversion cannot fail
    Month::try_from(date.month() as u8)
        .map(|m| m.name())
        .unwrap_or("January")
}

/// Normalize user input into a full month name
///
/// Accepts any case and the three-letter abbreviations ("jun" -> "June").
pub fn parse_month(input: &str) -> TrackerResult<&'static str> {
    input
        .trim()
        .parse::<Month>()
        .map(|m| m.name())
        .map_err(|_| TrackerError::Input(format!("'{}' is not a month name", input.trim())))
}

/// Capitalize a label: first character upper case, the rest lower case
///
/// Used for budget keys and expense categories so that both compare equal.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Serde helper accepting both the storage and the legacy date format
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
