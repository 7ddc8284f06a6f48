use filelog::logger::*;
use filelog::settings::*;
use filelog::{log_debug, log_error, log_info, log_warning};

// $ cargo run --bin logger_demo -- --settings=settings/dev.toml
fn main() -> anyhow::Result<()> {
    let diagnostics = Diagnostics::new_bootstrap();

    let cli = Cli::parse();
    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    diagnostics.reload_from_config(&DiagnosticsConfig {
        filter: project_settings.log.diagnostics.clone(),
    })?;

    let logger = FileLogger::from_settings(&project_settings.log);
    if !logger.is_ready() {
        warn!("log file {:?} is not writable, lines will be dropped", logger.path());
    }

    log_debug!(logger, "Debug message.");
    log_info!(logger, "Info message, level is ", logger.level());
    log_warning!(logger, "Warning message.");
    log_error!(logger, "Error message ", 1, " of ", 1, ".");

    logger.set_level(LogLevel::Debug);
    log_debug!(logger, "Debug message after set_level.");

    Ok(())
}
