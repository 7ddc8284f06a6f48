use filelog::logger::*;
use filelog::settings::*;

// $ cargo run --bin settings_demo -- --settings=settings/release.toml
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let project_settings = parse_settings(cli.settings.as_deref())?;
    println!("[log] table: {:?}", project_settings.log);

    let logger = FileLogger::from_settings(&project_settings.log);
    println!(
        "logger for {:?}: ready={} level={}",
        logger.path(),
        logger.is_ready(),
        logger.level()
    );

    // An unreadable settings path is an error, not a default
    let is_err = parse_settings(Some("")).is_err();
    println!("Error on invalid path: {:?}", is_err);

    Ok(())
}
