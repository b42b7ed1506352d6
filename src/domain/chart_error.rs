use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised while validating chart input or aggregating it.
///
/// Every variant is deterministic: the same input fails the same way again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartDataError {
    #[error("duplicate sample for key {key}")]
    DuplicateKey { key: String },
    #[error("invalid iteration window: start_date {start_date} is after end_date {end_date}")]
    InvalidWindow {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    #[error("invalid sample: {0}")]
    InvalidSample(String),
}
