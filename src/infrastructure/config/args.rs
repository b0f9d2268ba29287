use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "contactbook",
    version,
    about = "A small terminal address book",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Start with an empty contact list instead of the sample contacts.
    #[arg(long)]
    pub no_seed: bool,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
