use crate::domain::calendar_date::CalendarDate;
use crate::domain::chart_error::ChartDataError;

/// One observation of a work item on a given day.
///
/// History holds at most one snapshot per item and day; a later snapshot for
/// the same pair replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItemSnapshot {
    pub item_id: String,
    pub change_date: CalendarDate,
    pub status: String,
    pub effort: f64,
    pub iteration_id: Option<String>,
}

impl WorkItemSnapshot {
    pub fn validate(&self) -> Result<(), ChartDataError> {
        if !self.effort.is_finite() || self.effort < 0.0 {
            return Err(ChartDataError::InvalidSample(format!(
                "effort must be a non-negative number for item {} on {}, got {}",
                self.item_id, self.change_date, self.effort
            )));
        }
        Ok(())
    }

    pub fn belongs_to(&self, iteration_id: &str) -> bool {
        self.iteration_id.as_deref() == Some(iteration_id)
    }
}
