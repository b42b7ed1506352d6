use crate::domain::calendar_date::CalendarDate;
use crate::domain::chart_error::ChartDataError;

/// Inclusive date range of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationWindow {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
}

impl IterationWindow {
    pub fn new(start_date: CalendarDate, end_date: CalendarDate) -> Result<Self, ChartDataError> {
        let window = Self {
            start_date,
            end_date,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), ChartDataError> {
        if self.start_date > self.end_date {
            return Err(ChartDataError::InvalidWindow {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }

    pub fn contains(&self, day: CalendarDate) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// Every calendar day of the window, start and end included.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        let mut current = Some(self.start_date);
        std::iter::from_fn(move || {
            let day = current.filter(|day| *day <= self.end_date)?;
            current = day.succ_opt();
            Some(day)
        })
    }
}
