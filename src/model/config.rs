use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme colors, keyed by theme field name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Cap on candidates shown in the popup (first N in catalog order)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Preferred popup height in rows, borders included
    #[serde(default = "default_max_popup_height")]
    pub max_popup_height: u16,
    /// Chips shown before collapsing into "+N more"
    #[serde(default = "default_chip_limit")]
    pub chip_limit: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            max_results: default_max_results(),
            max_popup_height: default_max_popup_height(),
            chip_limit: default_chip_limit(),
        }
    }
}

/// Optional catalog files replacing the built-in mock catalogs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub routes_file: Option<PathBuf>,
    #[serde(default)]
    pub rail_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Rebase relative catalog paths onto `dir`, the config file's directory.
    pub fn anchor_to(&mut self, dir: &Path) {
        for file in [&mut self.routes_file, &mut self.rail_file] {
            if let Some(path) = file.as_mut() {
                if path.is_relative() {
                    *path = dir.join(&*path);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file; the TUI does not log at all without one
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> usize {
    50
}

fn default_max_popup_height() -> u16 {
    12
}

fn default_chip_limit() -> usize {
    8
}

fn default_log_level() -> String {
    "warn".to_string()
}
