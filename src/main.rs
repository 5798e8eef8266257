use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use meetsum::app::{Args, Command};
use meetsum::commands;
use meetsum::logging::{init_logging, set_log_file_path};
use meetsum::user_config::load_config;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let (mut config, source) =
        load_config(args.config.as_deref()).wrap_err("Failed to load configuration")?;
    if args.trace {
        config.features.trace_mode = true;
    }

    let log_config = config.log_config(config.features.trace_mode)?;
    if log_config.output.writes_file() {
        set_log_file_path(log_config.log_file());
    }
    init_logging(&log_config).wrap_err("Failed to initialize logging")?;
    debug!(config_file = ?source, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.command {
        None => {
            let stdin = std::io::stdin();
            commands::run_summary(&config, &args.run, &mut stdin.lock(), &mut out).await
        }
        Some(Command::Check) => commands::run_check(&config, &mut out),
        Some(Command::Validate { dir }) => {
            commands::run_validate(&config, dir.as_deref(), &mut out).await
        }
        Some(Command::Config { json }) => {
            commands::run_config(&config, source.as_deref(), json, &mut out)
        }
        Some(Command::Version) => commands::run_version(&mut out),
    }
}
