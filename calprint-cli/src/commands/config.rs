use anyhow::Result;
use calprint_core::config::CalPrintConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = CalPrintConfig::config_path()?;
    let config = CalPrintConfig::load()?;

    println!("{}", "Config".bold());
    println!("  {}", config_path.display().dimmed());
    println!();
    println!("  output_dir: {}", config.output_path().display());
    println!("  product_id: {}", config.product_id);

    Ok(())
}
