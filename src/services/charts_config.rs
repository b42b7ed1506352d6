use std::io;
use std::path::{Path, PathBuf};

use chrono::{Duration, Months, NaiveDate, Weekday};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::calendar::{NonWorkingRange, WorkingCalendar};
use crate::domain::calendar_date::CalendarDate;
use crate::services::keyed_samples::DuplicatePolicy;

const DEFAULT_DONE_STATUS: &str = "Done";

#[derive(Error, Debug)]
pub enum ChartsConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid weekday value in {path}: {value}")]
    InvalidWeekday { path: PathBuf, value: String },
    #[error("invalid date format in {path}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },
    #[error("invalid date range in {path}: start_date {start_date} is after end_date {end_date}")]
    InvalidDateRange {
        path: PathBuf,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ConfigRecord {
    duplicate_policy: Option<DuplicatePolicy>,
    done_status: Option<String>,
    burnup_lookback_days: Option<u32>,
    non_working_weekdays: Option<Vec<String>>,
    non_working_ranges: Option<Vec<NonWorkingRangeRecord>>,
}

#[derive(Debug, Deserialize)]
struct NonWorkingRangeRecord {
    start_date: String,
    end_date: String,
}

/// Settings shared by all chart commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartsConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub done_status: String,
    pub burnup_lookback_days: Option<u32>,
    pub calendar: WorkingCalendar,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Strict,
            done_status: DEFAULT_DONE_STATUS.to_string(),
            burnup_lookback_days: None,
            calendar: WorkingCalendar::default(),
        }
    }
}

impl ChartsConfig {
    /// First day of derived burnup history. Without a configured lookback
    /// this is one calendar month before `as_of`; a lookback reaching past the
    /// earliest representable day stops there.
    pub fn burnup_since(&self, as_of: CalendarDate) -> CalendarDate {
        let since = match self.burnup_lookback_days {
            Some(days) => as_of.checked_sub_signed(Duration::days(i64::from(days))),
            None => as_of.checked_sub_months(Months::new(1)),
        };
        since.unwrap_or(NaiveDate::MIN)
    }
}

/// Loads the config file when a path is given, defaults otherwise.
pub fn load_charts_config(path: Option<&Path>) -> Result<ChartsConfig, ChartsConfigError> {
    let Some(path) = path else {
        return Ok(ChartsConfig::default());
    };
    debug!(path = %path.display(), "loading charts config");

    let contents = std::fs::read_to_string(path).map_err(|source| ChartsConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_charts_config(&contents, path)
}

fn deserialize_charts_config(
    input: &str,
    origin_path: &Path,
) -> Result<ChartsConfig, ChartsConfigError> {
    // An empty document deserializes to unit, not to a map.
    let record: ConfigRecord = if input.trim().is_empty() {
        ConfigRecord::default()
    } else {
        serde_yaml::from_str(input).map_err(|source| ChartsConfigError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?
    };

    let defaults = ChartsConfig::default();
    let non_working_weekdays = match record.non_working_weekdays {
        None => defaults.calendar.non_working_weekdays,
        Some(values) => values
            .into_iter()
            .map(|value| {
                parse_weekday(&value).ok_or_else(|| ChartsConfigError::InvalidWeekday {
                    path: origin_path.to_path_buf(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let non_working_ranges = record
        .non_working_ranges
        .unwrap_or_default()
        .into_iter()
        .map(|value| range_from_record(value, origin_path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartsConfig {
        duplicate_policy: record.duplicate_policy.unwrap_or(defaults.duplicate_policy),
        done_status: record.done_status.unwrap_or(defaults.done_status),
        burnup_lookback_days: record.burnup_lookback_days,
        calendar: WorkingCalendar {
            non_working_weekdays,
            non_working_ranges,
        },
    })
}

fn range_from_record(
    value: NonWorkingRangeRecord,
    origin_path: &Path,
) -> Result<NonWorkingRange, ChartsConfigError> {
    let start_date = parse_date(&value.start_date, origin_path)?;
    let end_date = parse_date(&value.end_date, origin_path)?;
    if start_date > end_date {
        return Err(ChartsConfigError::InvalidDateRange {
            path: origin_path.to_path_buf(),
            start_date,
            end_date,
        });
    }
    Ok(NonWorkingRange {
        start_date,
        end_date,
    })
}

fn parse_date(value: &str, origin_path: &Path) -> Result<NaiveDate, ChartsConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ChartsConfigError::InvalidDate {
        path: origin_path.to_path_buf(),
        value: value.to_string(),
    })
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
