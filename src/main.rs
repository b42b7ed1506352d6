mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use burncharts::services::charts_config::load_charts_config;
use burncharts::services::keyed_samples::DuplicatePolicy;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::burndown_cmd::burndown_command;
use crate::commands::burnup_cmd::burnup_command;
use crate::commands::derive_burndown_cmd::derive_burndown_command;
use crate::commands::derive_burnup_cmd::derive_burnup_command;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if let Commands::Completions { shell } = args.command {
        let mut command = CliArgs::command();
        clap_complete::generate(shell, &mut command, "burncharts", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let mut config = match load_charts_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load charts config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.lenient {
        config.duplicate_policy = DuplicatePolicy::LastWriteWins;
    }
    debug!(?config, "resolved charts config");

    match args.command {
        cmd @ Commands::Burnup { .. } => burnup_command(cmd, &config),
        cmd @ Commands::Burndown { .. } => burndown_command(cmd, &config),
        cmd @ Commands::DeriveBurnup { .. } => derive_burnup_command(cmd, &config),
        cmd @ Commands::DeriveBurndown { .. } => derive_burndown_command(cmd, &config),
        Commands::Completions { .. } => ExitCode::SUCCESS,
    }
}
