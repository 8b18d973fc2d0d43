use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calprint_core::DirectorySink;
use calprint_core::config::CalPrintConfig;
use owo_colors::OwoColorize;

use super::{default_destination, load_calendar};

pub fn run(events_path: &Path, output: Option<String>, dir: Option<PathBuf>) -> Result<()> {
    let config = CalPrintConfig::load()?;

    let destination = match output {
        Some(name) => name,
        None => default_destination(events_path)?,
    };

    let sink = match dir {
        Some(dir) => DirectorySink::new(dir),
        None => config.sink(),
    };

    let calendar = load_calendar(events_path, &destination, &config.product_id)?;

    let path = calendar
        .flush(&sink)
        .with_context(|| format!("Failed to write {}", destination))?;

    println!(
        "{}",
        format!("  Wrote {} events to {}", calendar.len(), path.display()).green()
    );

    Ok(())
}
