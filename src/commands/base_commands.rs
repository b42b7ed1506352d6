use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use burncharts::domain::calendar_date::{calendar_day, format_calendar_date};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Optional charts config YAML
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Keep the last sample instead of failing on duplicate keys
    #[arg(long, global = true)]
    pub lenient: bool,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate status samples into a per-status burnup series
    Burnup {
        /// Burnup records (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
        /// Output file for the aggregated series
        #[arg(short, long)]
        output: PathBuf,
        /// Optional PNG chart output
        #[arg(short, long)]
        plot: Option<PathBuf>,
    },
    /// Clip burndown samples to an iteration window
    Burndown {
        /// Burndown records (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
        /// Output file for the clipped series
        #[arg(short, long)]
        output: PathBuf,
        /// First day of the iteration (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: String,
        /// Last day of the iteration (YYYY-MM-DD)
        #[arg(short, long)]
        end_date: String,
        /// Optional PNG chart output
        #[arg(short, long)]
        plot: Option<PathBuf>,
    },
    /// Count work items per status and day from item history
    DeriveBurnup {
        /// Work item history (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
        /// Output file for burnup records
        #[arg(short, long)]
        output: PathBuf,
        /// Reference day for the configured lookback (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_as_of())]
        as_of: String,
    },
    /// Build remaining and ideal work per day of an iteration from item history
    DeriveBurndown {
        /// Work item history (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
        /// Output file for burndown records
        #[arg(short, long)]
        output: PathBuf,
        /// Iteration id the work items are assigned to
        #[arg(long)]
        iteration: String,
        /// First day of the iteration (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: String,
        /// Last day of the iteration (YYYY-MM-DD)
        #[arg(short, long)]
        end_date: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_as_of() -> String {
    format_calendar_date(calendar_day(&Utc::now()))
}
