use std::process::ExitCode;

use tracing::{debug, info};

use burncharts::domain::calendar_date::parse_calendar_date;
use burncharts::domain::chart_error::ChartDataError;
use burncharts::domain::iteration::IterationWindow;
use burncharts::services::burndown::aggregate_burndown;
use burncharts::services::chart_plot::write_burndown_png;
use burncharts::services::charts_config::ChartsConfig;
use burncharts::services::record_files::{load_burndown_samples, serialize_burndown_series};

use crate::commands::base_commands::Commands;
use crate::commands::output_file::write_output;

pub fn parse_window(start_date: &str, end_date: &str) -> Result<IterationWindow, ChartDataError> {
    IterationWindow::new(parse_calendar_date(start_date)?, parse_calendar_date(end_date)?)
}

pub fn burndown_command(cmd: Commands, config: &ChartsConfig) -> ExitCode {
    if let Commands::Burndown {
        input,
        output,
        start_date,
        end_date,
        plot,
    } = cmd
    {
        let window = match parse_window(&start_date, &end_date) {
            Ok(window) => window,
            Err(e) => {
                eprintln!("Invalid iteration window: {e}");
                return ExitCode::FAILURE;
            }
        };

        let samples = match load_burndown_samples(&input) {
            Ok(samples) => samples,
            Err(e) => {
                eprintln!("Failed to load burndown samples: {e}");
                return ExitCode::FAILURE;
            }
        };
        debug!(count = samples.len(), "loaded burndown samples");

        let series = match aggregate_burndown(&window, &samples, config.duplicate_policy) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("Failed to aggregate burndown: {e}");
                return ExitCode::FAILURE;
            }
        };
        info!(
            kept = series.samples.len(),
            dropped = samples.len() - series.samples.len(),
            "clipped burndown series"
        );

        if let Err(e) = write_output(&output, |buffer, format| {
            serialize_burndown_series(buffer, &series, format)
        }) {
            eprintln!("Failed to write burndown series: {e}");
            return ExitCode::FAILURE;
        }
        println!("Burndown series written to {}", output.display());

        if let Some(plot) = plot {
            if let Err(e) = write_burndown_png(&plot, &series) {
                eprintln!("Failed to plot burndown: {e}");
                return ExitCode::FAILURE;
            }
            println!("Burndown chart written to {}", plot.display());
        }
    }
    ExitCode::SUCCESS
}
