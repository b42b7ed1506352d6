use std::process::ExitCode;

use tracing::{debug, info};

use burncharts::services::burnup::aggregate_burnup;
use burncharts::services::chart_plot::write_burnup_png;
use burncharts::services::charts_config::ChartsConfig;
use burncharts::services::record_files::{load_status_samples, serialize_burnup_series};

use crate::commands::base_commands::Commands;
use crate::commands::output_file::write_output;

pub fn burnup_command(cmd: Commands, config: &ChartsConfig) -> ExitCode {
    if let Commands::Burnup {
        input,
        output,
        plot,
    } = cmd
    {
        let samples = match load_status_samples(&input) {
            Ok(samples) => samples,
            Err(e) => {
                eprintln!("Failed to load burnup samples: {e}");
                return ExitCode::FAILURE;
            }
        };
        debug!(count = samples.len(), "loaded burnup samples");

        let series = match aggregate_burnup(&samples, config.duplicate_policy) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("Failed to aggregate burnup: {e}");
                return ExitCode::FAILURE;
            }
        };
        info!(statuses = series.by_status.len(), "aggregated burnup series");

        if let Err(e) = write_output(&output, |buffer, format| {
            serialize_burnup_series(buffer, &series, format)
        }) {
            eprintln!("Failed to write burnup series: {e}");
            return ExitCode::FAILURE;
        }
        println!("Burnup series written to {}", output.display());

        if let Some(plot) = plot {
            if let Err(e) = write_burnup_png(&plot, &series) {
                eprintln!("Failed to plot burnup: {e}");
                return ExitCode::FAILURE;
            }
            println!("Burnup chart written to {}", plot.display());
        }
    }
    ExitCode::SUCCESS
}
