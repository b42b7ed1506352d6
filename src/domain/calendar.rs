use chrono::Datelike;
use chrono::Weekday;

use crate::domain::calendar_date::CalendarDate;
use crate::domain::iteration::IterationWindow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonWorkingRange {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
}

impl NonWorkingRange {
    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Decides which days advance the ideal burndown line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCalendar {
    pub non_working_weekdays: Vec<Weekday>,
    pub non_working_ranges: Vec<NonWorkingRange>,
}

impl Default for WorkingCalendar {
    fn default() -> Self {
        Self {
            non_working_weekdays: vec![Weekday::Sat, Weekday::Sun],
            non_working_ranges: Vec::new(),
        }
    }
}

impl WorkingCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_working_day(&self, date: CalendarDate) -> bool {
        if self.non_working_weekdays.contains(&date.weekday()) {
            return false;
        }

        !self
            .non_working_ranges
            .iter()
            .any(|range| range.contains(date))
    }

    pub fn working_days(&self, window: &IterationWindow) -> Vec<CalendarDate> {
        window.days().filter(|day| self.is_working_day(*day)).collect()
    }
}
