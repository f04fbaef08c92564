pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod summary;

use crate::config::FilterConfig;
use crate::filter::warn_unknown_level;
use crate::summary::{RunSummary, format_summary_json, format_summary_text};
use std::path::PathBuf;
use tracing::debug;

pub use cli::{Cli, ColorMode, OutputFormat, cli_parse};
pub use error::FilterError;
pub use filter::{FilterSpec, matches};
pub use parser::{Level, ParsedLine, Record, is_valid_level, parse_line};
pub use pipeline::{FilterOutcome, filter_lines, run_filter, write_output};

/// Input, output and filters for one run after merging CLI and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: FilterSpec,
}

impl RunSettings {
    /// CLI flags win over the config file, which wins over built-in defaults
    pub fn resolve(cli: &Cli, config: &FilterConfig) -> Self {
        let level = cli.level.as_deref().or(config.filter.level.as_deref());
        let service = cli.service.as_deref().or(config.filter.service.as_deref());

        Self {
            input: cli.input.clone().unwrap_or_else(|| config.input.clone()),
            output: cli.out.clone().unwrap_or_else(|| config.output.clone()),
            filter: FilterSpec::new(level, service),
        }
    }
}

pub fn run(cli: &Cli) -> Result<RunSummary, FilterError> {
    let config = crate::config::load_config(cli.config.as_deref())?;
    let settings = RunSettings::resolve(cli, &config);

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    debug!(
        input = %settings.input.display(),
        output = %settings.output.display(),
        level_filter = ?settings.filter.level(),
        service_filter = ?settings.filter.service(),
        "resolved run settings"
    );
    warn_unknown_level(&settings.filter);

    let outcome = run_filter(&settings.input, &settings.output, &settings.filter)?;
    let summary = RunSummary::new(&outcome, &settings.output);

    if !cli.quiet {
        match cli.format {
            OutputFormat::Text => print!("{}", format_summary_text(&summary)),
            OutputFormat::Json => println!("{}", format_summary_json(&summary)),
        }
    }

    Ok(summary)
}
