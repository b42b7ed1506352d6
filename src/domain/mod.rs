pub mod burndown;
pub mod calendar;
pub mod calendar_date;
pub mod chart_error;
pub mod iteration;
pub mod status_sample;
pub mod work_item;
