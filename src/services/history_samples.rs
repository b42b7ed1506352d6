//! Turns raw work-item history into chart samples.
//!
//! Burnup counts items per status and day. Burndown sums the effort that is
//! not yet done on each working day of an iteration and pairs it with a
//! linear ideal line that only moves on working days.

use std::collections::BTreeMap;

use crate::domain::burndown::BurndownSample;
use crate::domain::calendar::WorkingCalendar;
use crate::domain::calendar_date::CalendarDate;
use crate::domain::chart_error::ChartDataError;
use crate::domain::iteration::IterationWindow;
use crate::domain::status_sample::StatusSample;
use crate::domain::work_item::WorkItemSnapshot;

/// Keeps the last snapshot per `(item, day)`, the way history rows are upserted.
fn latest_per_item_and_day<'a, I>(
    history: I,
) -> Result<BTreeMap<(CalendarDate, &'a str), &'a WorkItemSnapshot>, ChartDataError>
where
    I: IntoIterator<Item = &'a WorkItemSnapshot>,
{
    let mut latest = BTreeMap::new();
    for snapshot in history {
        snapshot.validate()?;
        latest.insert((snapshot.change_date, snapshot.item_id.as_str()), snapshot);
    }
    Ok(latest)
}

/// Counts distinct items per status and day, from `since` onwards when given.
pub fn burnup_samples_from_history(
    history: &[WorkItemSnapshot],
    since: Option<CalendarDate>,
) -> Result<Vec<StatusSample>, ChartDataError> {
    let recent = history
        .iter()
        .filter(|snapshot| since.is_none_or(|since| snapshot.change_date >= since));
    let latest = latest_per_item_and_day(recent)?;

    let mut counts: BTreeMap<(&str, CalendarDate), u64> = BTreeMap::new();
    for snapshot in latest.values() {
        *counts
            .entry((snapshot.status.as_str(), snapshot.change_date))
            .or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .map(|((status, day), qty)| StatusSample {
            status: status.to_string(),
            day,
            qty,
        })
        .collect())
}

/// Builds one burndown sample per observed working day of the iteration.
///
/// The ideal line starts from the effort summed on the iteration's earliest
/// change date and drops by an equal share on each working day, reaching zero
/// on the last one.
pub fn burndown_samples_from_history(
    history: &[WorkItemSnapshot],
    iteration_id: &str,
    window: &IterationWindow,
    calendar: &WorkingCalendar,
    done_status: &str,
) -> Result<Vec<BurndownSample>, ChartDataError> {
    window.validate()?;

    let latest = latest_per_item_and_day(
        history
            .iter()
            .filter(|snapshot| snapshot.belongs_to(iteration_id)),
    )?;
    let Some(((first_change, _), _)) = latest.first_key_value() else {
        return Ok(Vec::new());
    };
    let first_change = *first_change;

    let starting_effort: f64 = latest
        .values()
        .filter(|snapshot| snapshot.change_date == first_change)
        .map(|snapshot| snapshot.effort)
        .sum();

    let mut remaining_by_day: BTreeMap<CalendarDate, f64> = BTreeMap::new();
    for snapshot in latest.values() {
        let remaining = remaining_by_day.entry(snapshot.change_date).or_insert(0.0);
        if snapshot.status != done_status {
            *remaining += snapshot.effort;
        }
    }

    let working_days = calendar.working_days(window);
    let total = working_days.len() as f64;

    let mut samples = Vec::new();
    for (index, day) in working_days.iter().enumerate() {
        let Some(remaining) = remaining_by_day.get(day) else {
            continue;
        };
        let elapsed = (index + 1) as f64;
        let ideal = (starting_effort - starting_effort / total * elapsed).max(0.0);
        samples.push(BurndownSample::new(*day, *remaining, ideal)?);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{burndown_sample, on_date, snapshot, status_sample, window};

    #[test]
    fn burnup_counts_items_per_status_and_day() {
        let history = vec![
            snapshot("I-1", (2024, 5, 22), "New", 1.0, None),
            snapshot("I-2", (2024, 5, 22), "New", 1.0, None),
            snapshot("I-3", (2024, 5, 22), "Approved", 1.0, None),
            snapshot("I-1", (2024, 5, 23), "InProgress", 1.0, None),
            snapshot("I-2", (2024, 5, 23), "New", 1.0, None),
            snapshot("I-3", (2024, 5, 23), "Approved", 1.0, None),
        ];

        let samples = burnup_samples_from_history(&history, None).unwrap();

        assert_eq!(
            samples,
            vec![
                status_sample("Approved", (2024, 5, 22), 1),
                status_sample("Approved", (2024, 5, 23), 1),
                status_sample("InProgress", (2024, 5, 23), 1),
                status_sample("New", (2024, 5, 22), 2),
                status_sample("New", (2024, 5, 23), 1),
            ]
        );
    }

    #[test]
    fn burnup_counts_an_item_once_per_day_using_its_latest_status() {
        let history = vec![
            snapshot("I-1", (2024, 5, 22), "New", 1.0, None),
            snapshot("I-1", (2024, 5, 22), "Done", 1.0, None),
        ];

        let samples = burnup_samples_from_history(&history, None).unwrap();
        assert_eq!(samples, vec![status_sample("Done", (2024, 5, 22), 1)]);
    }

    #[test]
    fn burnup_ignores_history_before_since() {
        let history = vec![
            snapshot("I-1", (2024, 4, 1), "New", 1.0, None),
            snapshot("I-1", (2024, 5, 22), "Done", 1.0, None),
        ];

        let samples = burnup_samples_from_history(&history, Some(on_date(2024, 5, 1))).unwrap();
        assert_eq!(samples, vec![status_sample("Done", (2024, 5, 22), 1)]);
    }

    fn sprint_history() -> Vec<WorkItemSnapshot> {
        vec![
            // 2024-06-18 is a Tuesday; the window runs through Monday 2024-06-24.
            snapshot("I-1", (2024, 6, 18), "New", 5.0, Some("it-1")),
            snapshot("I-2", (2024, 6, 18), "New", 5.0, Some("it-1")),
            snapshot("I-1", (2024, 6, 19), "Done", 5.0, Some("it-1")),
            snapshot("I-2", (2024, 6, 19), "InProgress", 5.0, Some("it-1")),
            snapshot("I-1", (2024, 6, 22), "Done", 5.0, Some("it-1")),
            snapshot("I-2", (2024, 6, 22), "InProgress", 5.0, Some("it-1")),
            snapshot("I-9", (2024, 6, 19), "New", 50.0, Some("it-2")),
            snapshot("I-8", (2024, 6, 19), "New", 50.0, None),
        ]
    }

    #[test]
    fn burndown_pairs_remaining_effort_with_a_working_day_ideal_line() {
        let sprint = window((2024, 6, 18), (2024, 6, 24));

        let samples = burndown_samples_from_history(
            &sprint_history(),
            "it-1",
            &sprint,
            &WorkingCalendar::new(),
            "Done",
        )
        .unwrap();

        // Five working days: ideal drops by 10 / 5 = 2 on each of them.
        assert_eq!(
            samples,
            vec![
                burndown_sample((2024, 6, 18), 10.0, 8.0),
                burndown_sample((2024, 6, 19), 5.0, 6.0),
            ]
        );
    }

    #[test]
    fn burndown_skips_days_outside_the_window() {
        let sprint = window((2024, 6, 19), (2024, 6, 19));

        let samples = burndown_samples_from_history(
            &sprint_history(),
            "it-1",
            &sprint,
            &WorkingCalendar::new(),
            "Done",
        )
        .unwrap();

        assert_eq!(samples, vec![burndown_sample((2024, 6, 19), 5.0, 0.0)]);
    }

    #[test]
    fn burndown_of_an_unknown_iteration_is_empty() {
        let sprint = window((2024, 6, 18), (2024, 6, 24));

        let samples = burndown_samples_from_history(
            &sprint_history(),
            "it-404",
            &sprint,
            &WorkingCalendar::new(),
            "Done",
        )
        .unwrap();

        assert!(samples.is_empty());
    }

    #[test]
    fn burndown_rejects_an_inverted_window() {
        let inverted = IterationWindow {
            start_date: on_date(2024, 6, 24),
            end_date: on_date(2024, 6, 18),
        };

        let err = burndown_samples_from_history(
            &sprint_history(),
            "it-1",
            &inverted,
            &WorkingCalendar::new(),
            "Done",
        )
        .unwrap_err();

        assert!(matches!(err, ChartDataError::InvalidWindow { .. }));
    }

    #[test]
    fn burndown_rejects_negative_effort() {
        let mut history = sprint_history();
        history[0].effort = -3.0;
        let sprint = window((2024, 6, 18), (2024, 6, 24));

        let err = burndown_samples_from_history(
            &history,
            "it-1",
            &sprint,
            &WorkingCalendar::new(),
            "Done",
        )
        .unwrap_err();

        assert!(matches!(err, ChartDataError::InvalidSample(_)));
    }
}
