//! Burnup and burndown series for project dashboards.
//!
//! The aggregators in [`services::burnup`] and [`services::burndown`] are
//! pure functions over borrowed input; everything else in the crate reads,
//! writes or draws their results.

pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;
