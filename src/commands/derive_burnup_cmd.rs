use std::process::ExitCode;

use tracing::{debug, info};

use burncharts::domain::calendar_date::parse_calendar_date;
use burncharts::services::charts_config::ChartsConfig;
use burncharts::services::history_samples::burnup_samples_from_history;
use burncharts::services::record_files::{load_work_item_history, serialize_status_samples};

use crate::commands::base_commands::Commands;
use crate::commands::output_file::write_output;

pub fn derive_burnup_command(cmd: Commands, config: &ChartsConfig) -> ExitCode {
    if let Commands::DeriveBurnup {
        input,
        output,
        as_of,
    } = cmd
    {
        let as_of = match parse_calendar_date(&as_of) {
            Ok(day) => day,
            Err(e) => {
                eprintln!("Invalid as-of date: {e}");
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
        let since = config.burnup_since(as_of);
        debug!(rows = history.len(), %since, "deriving burnup samples");

        let samples = match burnup_samples_from_history(&history, Some(since)) {
            Ok(samples) => samples,
            Err(e) => {
                eprintln!("Failed to derive burnup samples: {e}");
                return ExitCode::FAILURE;
            }
        };
        info!(samples = samples.len(), "derived burnup samples");

        if let Err(e) = write_output(&output, |buffer, format| {
            serialize_status_samples(buffer, &samples, format)
        }) {
            eprintln!("Failed to write burnup samples: {e}");
            return ExitCode::FAILURE;
        }
        println!("Burnup samples written to {}", output.display());
    }
    ExitCode::SUCCESS
}
