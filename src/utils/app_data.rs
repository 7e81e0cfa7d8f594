use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "ukkonen";
const CONFIG_FILE: &str = "config.json";

/// Overrides the config file location when set
pub const CONFIG_ENV: &str = "UKKONEN_CONFIG";

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Symbol appended when `--append-sentinel` is given
    #[serde(default = "default_sentinel")]
    pub sentinel: char,

    /// Append the sentinel even without the flag
    #[serde(default)]
    pub append_sentinel: bool,

    /// Directory for `trace` output when `--out` is not given
    #[serde(default = "default_trace_dir")]
    pub trace_dir: PathBuf,

    /// Graphviz styling for DOT traces
    #[serde(default)]
    pub dot: DotStyle,
}

fn default_sentinel() -> char {
    '$'
}

fn default_trace_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            append_sentinel: false,
            trace_dir: default_trace_dir(),
            dot: DotStyle::default(),
        }
    }
}

/// Graph attributes used by the DOT exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub rankdir: String,
    pub nodesep: f64,
    /// Fill color of the active node
    pub active_color: String,
    pub edge_color: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            rankdir: "LR".to_string(),
            nodesep: 0.5,
            active_color: "red".to_string(),
            edge_color: "blue".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            let config: AppConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
            log::debug!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config, creating the parent directory if needed
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
