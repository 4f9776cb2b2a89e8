//! `versecompare` - compare a scripture reference across the sample translations.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use versecompare::config::{Config, OutputFormat};
use versecompare::constants::driver::DEFAULT_LOG_FILTER;
use versecompare::sample;
use versecompare::services::compare_translations;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "{} {} comparing {:?}",
        config.app_name(),
        config.app_version(),
        config.reference
    );

    let corpus = sample::corpus();
    let comparison = compare_translations(&config.reference, &corpus)
        .with_context(|| format!("Failed to compare {:?}", config.reference))?;

    match config.output {
        OutputFormat::Text => print!("{}", comparison.render()),
        OutputFormat::Json => {
            let json = comparison.to_json().context("Failed to serialize comparison")?;
            println!("{json}");
        }
    }

    Ok(())
}
