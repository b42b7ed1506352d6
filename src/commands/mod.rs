pub mod base_commands;
pub mod burndown_cmd;
pub mod burnup_cmd;
pub mod derive_burndown_cmd;
pub mod derive_burnup_cmd;
pub mod output_file;
