//! UTC timestamp conversion
//!
//! The T8 API addresses snapshots by UNIX epoch, while the CLI accepts and
//! prints dates as `YYYY-MM-DDTHH:MM:SS` interpreted as UTC. No other
//! formats and no timezone suffixes are supported; callers with localized
//! dates convert before calling.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::T8Error;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `YYYY-MM-DDTHH:MM:SS` date string as UTC into a UNIX epoch.
pub fn parse_utc(date: &str) -> Result<i64, T8Error> {
    NaiveDateTime::parse_from_str(date, DATE_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|_| T8Error::InvalidTimestamp(date.to_string()))
}

/// Format a UNIX epoch as `YYYY-MM-DDTHH:MM:SS` in UTC.
///
/// Epochs outside chrono's representable range fall back to the raw
/// number so that listings of hostile data never panic.
pub fn format_utc(epoch: i64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch, 0) {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => epoch.to_string(),
    }
}
