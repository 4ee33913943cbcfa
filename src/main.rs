// Symposium Countdown
// Main entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use symposium_countdown::models::schedule::MilestoneSchedule;
use symposium_countdown::models::settings::CountdownSettings;
use symposium_countdown::services::countdown::{
    CountdownDriver, FrameFormat, SystemClock, TerminalSurface,
};
use symposium_countdown::services::settings::SettingsService;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Countdown to the next Symposium on Earthquake Engineering milestone",
    long_about = None
)]
struct Cli {
    /// Emit one JSON object per frame instead of text.
    #[arg(long)]
    json: bool,

    /// Read settings from this file instead of the platform config directory.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

impl Cli {
    fn frame_format(&self) -> FrameFormat {
        if self.json {
            FrameFormat::Json
        } else {
            FrameFormat::Text
        }
    }

    fn settings_path(&self) -> PathBuf {
        self.settings
            .clone()
            .unwrap_or_else(SettingsService::resolve_path)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::init();

    log::info!("Starting Symposium Countdown");

    let settings_path = cli.settings_path();
    let settings = SettingsService::load_from_path(&settings_path).unwrap_or_else(|err| {
        log::error!("Failed to load settings, using defaults: {err:#}");
        CountdownSettings::default()
    });

    let schedule = MilestoneSchedule::builtin().context("built-in milestone table is invalid")?;
    let details = schedule.details();
    log::info!("{} at {} ({})", details.title, details.venue, details.dates);

    let driver = CountdownDriver::new(settings);
    let session = driver.activate(
        schedule,
        SystemClock,
        TerminalSurface::new(std::io::stdout(), cli.frame_format()),
    );

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;

    session.deactivate().await?;
    log::info!("Countdown stopped");
    Ok(())
}
