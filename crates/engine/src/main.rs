//! Heroforge Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heroforge_engine::config::{load_dotenv_from_repo_root, ForgeConfig};
use heroforge_engine::{forge_roster, render};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    let config = ForgeConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        roster = ?config.roster,
        output = ?config.output,
        "Starting Heroforge"
    );

    let report = forge_roster(&config.roster);
    println!("{}", render::render(&report, config.output)?);

    if !report.unexpected_successes.is_empty() {
        anyhow::bail!(
            "{} safety probe(s) were accepted",
            report.unexpected_successes.len()
        );
    }

    Ok(())
}
