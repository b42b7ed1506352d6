use std::collections::BTreeMap;

use crate::domain::calendar_date::CalendarDate;
use crate::domain::chart_error::ChartDataError;

/// Number of issues holding `status` on `day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSample {
    pub status: String,
    pub day: CalendarDate,
    pub qty: u64,
}

impl StatusSample {
    /// Builds a sample from a raw signed count, rejecting negatives.
    pub fn new(status: impl Into<String>, day: CalendarDate, qty: i64) -> Result<Self, ChartDataError> {
        let status = status.into();
        let qty = u64::try_from(qty).map_err(|_| {
            ChartDataError::InvalidSample(format!("negative qty {qty} for status {status} on {day}"))
        })?;
        Ok(Self { status, day, qty })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnupPoint {
    pub day: CalendarDate,
    pub qty: u64,
}

/// Per-status day series. Days are strictly increasing within each status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BurnupSeries {
    pub by_status: BTreeMap<String, Vec<BurnupPoint>>,
}

impl BurnupSeries {
    pub fn is_empty(&self) -> bool {
        self.by_status.is_empty()
    }

    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.by_status.keys().map(String::as_str)
    }

    pub fn points(&self, status: &str) -> Option<&[BurnupPoint]> {
        self.by_status.get(status).map(Vec::as_slice)
    }

    /// Flattens back into samples, ordered by status then day.
    pub fn to_samples(&self) -> Vec<StatusSample> {
        self.by_status
            .iter()
            .flat_map(|(status, points)| {
                points.iter().map(move |point| StatusSample {
                    status: status.clone(),
                    day: point.day,
                    qty: point.qty,
                })
            })
            .collect()
    }
}
