//! Global calprint configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalPrintError, CalPrintResult};
use crate::ics::DEFAULT_PRODUCT_ID;
use crate::sink::{DEFAULT_OUTPUT_DIR, DirectorySink};

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

/// Configuration at ~/.config/calprint/config.toml
///
/// Every key can also be set through a `CALPRINT_` environment variable,
/// e.g. `CALPRINT_OUTPUT_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalPrintConfig {
    /// Where `.ics` files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// PRODID written into every calendar
    #[serde(default = "default_product_id")]
    pub product_id: String,
}

impl Default for CalPrintConfig {
    fn default() -> Self {
        CalPrintConfig {
            output_dir: default_output_dir(),
            product_id: default_product_id(),
        }
    }
}

impl CalPrintConfig {
    pub fn config_path() -> CalPrintResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalPrintError::Config("Could not determine config directory".into()))?
            .join("calprint");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/calprint/config.toml, creating a commented-out one first if needed.
    pub fn load() -> CalPrintResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CalPrintResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CALPRINT"))
            .build()
            .map_err(|e| CalPrintError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalPrintError::Config(e.to_string()))
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn sink(&self) -> DirectorySink {
        DirectorySink::new(self.output_path())
    }

    /// Save the current config to `path`.
    pub fn save(&self, path: &Path) -> CalPrintResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalPrintError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalPrintError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalPrintResult<()> {
        let contents = format!(
            "\
# calprint configuration

# Where .ics files are written:
# output_dir = \"{}\"

# PRODID written into every calendar:
# product_id = \"{}\"
",
            DEFAULT_OUTPUT_DIR, DEFAULT_PRODUCT_ID
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalPrintError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalPrintError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
