//! Date display helpers for account pages.
//!
//! The hosted tables store timestamps as RFC 3339 and plain dates as
//! `YYYY-MM-DD`; both are accepted.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

pub const NOT_SET: &str = "Not set";

const PLAIN_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LONG: &[FormatItem<'static>] = format_description!("[month repr:long] [day padding:none], [year]");
const SHORT: &[FormatItem<'static>] = format_description!("[month repr:short] [day padding:none], [year]");

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    OffsetDateTime::parse(raw, &Rfc3339)
        .map(OffsetDateTime::date)
        .ok()
        .or_else(|| Date::parse(raw.get(..10)?, PLAIN_DATE).ok())
}

fn render(raw: Option<&str>, layout: &[FormatItem<'static>]) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => NOT_SET.to_owned(),
        Some(value) => parse_date(value)
            .and_then(|date| date.format(layout).ok())
            .unwrap_or_else(|| value.to_owned()),
    }
}

/// `"January 15, 2024"`, or "Not set" when absent.
pub fn long_date(raw: Option<&str>) -> String {
    render(raw, LONG)
}

/// `"Jan 15, 2024"`, or "Not set" when absent.
pub fn short_date(raw: Option<&str>) -> String {
    render(raw, SHORT)
}
