use std::path::Path;

use anyhow::Result;
use calprint_core::config::CalPrintConfig;

use super::{default_destination, load_calendar};

pub fn run(events_path: &Path) -> Result<()> {
    let config = CalPrintConfig::load()?;
    let destination = default_destination(events_path)?;
    let calendar = load_calendar(events_path, &destination, &config.product_id)?;

    println!("{}", calendar.render());

    Ok(())
}
