use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "searchkey";
const CONFIG_FILE: &str = "config.json";

/// CLI configuration stored in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Separator used when `--separator` is not given
    #[serde(default = "default_separator")]
    pub default_separator: char,

    /// Case sensitivity used when `--case-sensitive` is not given
    #[serde(default)]
    pub default_case_sensitive: bool,

    /// Colorize decoded records on a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_separator() -> char {
    ','
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_separator: default_separator(),
            default_case_sensitive: false,
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(content).context("Failed to parse config file")?;
        if !config.default_separator.is_ascii() {
            anyhow::bail!(
                "default_separator must be a single ASCII character, got {:?}",
                config.default_separator
            );
        }
        Ok(config)
    }

    /// Separator as the byte stored in tag field metadata
    pub fn separator_byte(&self) -> u8 {
        // from_json rejects non-ASCII separators
        self.default_separator as u8
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
