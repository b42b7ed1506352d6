use crate::domain::calendar_date::CalendarDate;
use crate::domain::chart_error::ChartDataError;
use crate::domain::iteration::IterationWindow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurndownSample {
    pub day: CalendarDate,
    pub remaining: f64,
    pub ideal: f64,
}

impl BurndownSample {
    pub fn new(day: CalendarDate, remaining: f64, ideal: f64) -> Result<Self, ChartDataError> {
        let sample = Self {
            day,
            remaining,
            ideal,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Both values must be finite and not negative.
    pub fn validate(&self) -> Result<(), ChartDataError> {
        check_amount("remaining", self.remaining, self.day)?;
        check_amount("ideal", self.ideal, self.day)
    }
}

fn check_amount(field: &str, value: f64, day: CalendarDate) -> Result<(), ChartDataError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartDataError::InvalidSample(format!(
            "{field} must be a non-negative number on {day}, got {value}"
        )));
    }
    Ok(())
}

/// Actual-vs-ideal points of one iteration, ascending by day.
#[derive(Debug, Clone, PartialEq)]
pub struct BurndownSeries {
    pub window: IterationWindow,
    pub samples: Vec<BurndownSample>,
}

impl BurndownSeries {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.samples.iter().map(|sample| sample.day)
    }
}
