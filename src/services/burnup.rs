use crate::domain::chart_error::ChartDataError;
use crate::domain::status_sample::{BurnupPoint, BurnupSeries, StatusSample};
use crate::services::keyed_samples::{DuplicatePolicy, collect_unique};

/// Groups status samples into one day-ordered series per status.
///
/// Statuses are an open set compared case-sensitively. Days missing for a
/// status stay missing; empty input gives an empty series.
pub fn aggregate_burnup(
    samples: &[StatusSample],
    policy: DuplicatePolicy,
) -> Result<BurnupSeries, ChartDataError> {
    let indexed = collect_unique(
        samples
            .iter()
            .map(|sample| ((sample.status.as_str(), sample.day), sample.qty)),
        policy,
        |(status, day)| format!("{status}@{day}"),
    )?;

    // Keys arrive ordered by (status, day), so pushing keeps days ascending.
    let mut series = BurnupSeries::default();
    for ((status, day), qty) in indexed {
        series
            .by_status
            .entry(status.to_string())
            .or_default()
            .push(BurnupPoint { day, qty });
    }
    Ok(series)
}
