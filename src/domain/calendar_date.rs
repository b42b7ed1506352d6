//! Calendar-day rules shared by both charts.
//!
//! Every date that enters the engine passes through here, so burnup and
//! burndown always agree on where a day starts: midnight UTC.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::chart_error::ChartDataError;

/// A day with time-of-day and timezone discarded.
pub type CalendarDate = NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Collapses a timestamp onto its UTC calendar day.
pub fn calendar_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> CalendarDate {
    timestamp.with_timezone(&Utc).date_naive()
}

/// Parses either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp.
///
/// Timestamps carrying an offset are shifted to UTC before the time of day
/// is dropped, so `2024-06-18T23:30:00-02:00` lands on 2024-06-19.
pub fn parse_calendar_date(value: &str) -> Result<CalendarDate, ChartDataError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| calendar_day(&timestamp))
        .map_err(|_| ChartDataError::InvalidSample(format!("unparseable date: {value}")))
}

pub fn format_calendar_date(day: CalendarDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Midnight-UTC timestamp form used by the dashboard payloads.
pub fn format_calendar_timestamp(day: CalendarDate) -> String {
    day.format("%Y-%m-%dT00:00:00Z").to_string()
}
