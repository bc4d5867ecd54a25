use clap::Parser;
use limitup_runner::{Cli, RunnerConfig, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RunnerConfig::from_cli(&cli)?;
    log::info!("Scanning {}", config.input_path.display());

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Scan failed: {}", e);
            return Err(e.into());
        }
    };

    match report.target_date {
        Some(date) => log::info!("{} limit-up statistics:", date.format("%Y-%m-%d")),
        None => log::info!(
            "Scan complete: {} bars, {} trading days",
            report.bars_loaded,
            report.summary.len()
        ),
    }
    log::info!("Limit-up events: {}", report.counts.total);
    log::info!("Sealed: {}", report.counts.sealed);
    log::info!("Broken: {}", report.counts.broken);
    log::info!(
        "Reports written to {} and {}",
        report.summary_path.display(),
        report.events_path.display()
    );

    Ok(())
}
