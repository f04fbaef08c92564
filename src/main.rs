use anyhow::Result;
use log_filter::cli_parse;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli_parse();

    let default_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    log_filter::run(&cli)?;

    Ok(())
}
