use chrono::NaiveDate;

use crate::domain::burndown::BurndownSample;
use crate::domain::iteration::IterationWindow;
use crate::domain::status_sample::StatusSample;
use crate::domain::work_item::WorkItemSnapshot;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> IterationWindow {
    IterationWindow::new(on_date(start.0, start.1, start.2), on_date(end.0, end.1, end.2)).unwrap()
}

pub fn status_sample(status: &str, day: (i32, u32, u32), qty: u64) -> StatusSample {
    StatusSample {
        status: status.to_string(),
        day: on_date(day.0, day.1, day.2),
        qty,
    }
}

pub fn burndown_sample(day: (i32, u32, u32), remaining: f64, ideal: f64) -> BurndownSample {
    BurndownSample {
        day: on_date(day.0, day.1, day.2),
        remaining,
        ideal,
    }
}

pub fn snapshot(
    item_id: &str,
    day: (i32, u32, u32),
    status: &str,
    effort: f64,
    iteration_id: Option<&str>,
) -> WorkItemSnapshot {
    WorkItemSnapshot {
        item_id: item_id.to_string(),
        change_date: on_date(day.0, day.1, day.2),
        status: status.to_string(),
        effort,
        iteration_id: iteration_id.map(str::to_string),
    }
}
