use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Filter pipe-separated log files by level and/or service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filter by log level (INFO, WARN, ERROR), case-insensitive
    #[arg(long)]
    pub level: Option<String>,

    /// Filter by exact service name
    #[arg(long)]
    pub service: Option<String>,

    /// Log file to read [default: logs.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output filename [default: filtered_logs.txt]
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// TOML config file providing defaults for the options above
    #[arg(short, long, env = "LOG_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Summary format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to color the summary
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress the summary; only errors are printed
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
