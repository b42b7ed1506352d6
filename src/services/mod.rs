pub mod burndown;
pub mod burnup;
pub mod chart_plot;
pub mod charts_config;
pub mod history_samples;
pub mod keyed_samples;
pub mod record_files;
