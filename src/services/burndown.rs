use crate::domain::burndown::{BurndownSample, BurndownSeries};
use crate::domain::chart_error::ChartDataError;
use crate::domain::iteration::IterationWindow;
use crate::services::keyed_samples::{DuplicatePolicy, collect_unique};

/// Clips burndown samples to the iteration window and orders them by day.
///
/// Samples outside the window are dropped without error. Days inside the
/// window without a sample are left out; callers needing a dense series pad
/// it themselves.
pub fn aggregate_burndown(
    window: &IterationWindow,
    samples: &[BurndownSample],
    policy: DuplicatePolicy,
) -> Result<BurndownSeries, ChartDataError> {
    window.validate()?;

    let in_window = samples
        .iter()
        .filter(|sample| window.contains(sample.day))
        .map(|sample| sample.validate().map(|()| (sample.day, *sample)))
        .collect::<Result<Vec<_>, _>>()?;

    let by_day = collect_unique(in_window, policy, |day| day.to_string())?;

    Ok(BurndownSeries {
        window: *window,
        samples: by_day.into_values().collect(),
    })
}
