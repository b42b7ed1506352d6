use std::process::ExitCode;

use tracing::{debug, info};

use burncharts::services::charts_config::ChartsConfig;
use burncharts::services::history_samples::burndown_samples_from_history;
use burncharts::services::record_files::{load_work_item_history, serialize_burndown_samples};

use crate::commands::base_commands::Commands;
use crate::commands::burndown_cmd::parse_window;
use crate::commands::output_file::write_output;

pub fn derive_burndown_command(cmd: Commands, config: &ChartsConfig) -> ExitCode {
    if let Commands::DeriveBurndown {
        input,
        output,
        iteration,
        start_date,
        end_date,
    } = cmd
    {
        let window = match parse_window(&start_date, &end_date) {
            Ok(window) => window,
            Err(e) => {
                eprintln!("Invalid iteration window: {e}");
                return ExitCode::FAILURE;
            }
        };

        let history = match load_work_item_history(&input) {
            Ok(history) => history,
            Err(e) => {
                eprintln!("Failed to load work item history: {e}");
                return ExitCode::FAILURE;
            }
        };
        debug!(rows = history.len(), %iteration, "deriving burndown samples");

        let samples = match burndown_samples_from_history(
            &history,
            &iteration,
            &window,
            &config.calendar,
            &config.done_status,
        ) {
            Ok(samples) => samples,
            Err(e) => {
                eprintln!("Failed to derive burndown samples: {e}");
                return ExitCode::FAILURE;
            }
        };
        info!(samples = samples.len(), "derived burndown samples");

        if let Err(e) = write_output(&output, |buffer, format| {
            serialize_burndown_samples(buffer, &samples, format)
        }) {
            eprintln!("Failed to write burndown samples: {e}");
            return ExitCode::FAILURE;
        }
        println!("Burndown samples written to {}", output.display());
    }
    ExitCode::SUCCESS
}
