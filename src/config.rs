//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::{CsvHeader, MalformedPolicy, StoreOptions, DEFAULT_EXPORT_FILE, DUE_SOON_DAYS};

pub const APP_NAME: &str = "taskdesk";
pub const TASKS_FILE_NAME: &str = "tarefas.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    #[serde(default)]
    pub on_malformed: MalformedPolicy,

    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tasks_file: None,
            on_malformed: MalformedPolicy::default(),
            backup: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub header: CsvHeader,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            header: CsvHeader::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub on_startup: bool,

    #[serde(default = "default_due_window")]
    pub due_window_days: i64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            on_startup: true,
            due_window_days: DUE_SOON_DAYS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

fn default_due_window() -> i64 {
    DUE_SOON_DAYS
}

/// `$XDG_CONFIG_HOME/taskdesk` on Linux, the platform config dir elsewhere.
pub fn get_app_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Cannot find config directory")?;
    Ok(config_dir.join(APP_NAME))
}

/// Where the task file and TUI log live by default.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Cannot find data directory")?;
    Ok(data_dir.join(APP_NAME))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Task file location: explicit override, then config, then the data dir.
    pub fn tasks_file(&self, file_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = file_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage.tasks_file {
            return Ok(expand_home(path));
        }
        Ok(get_data_dir()?.join(TASKS_FILE_NAME))
    }

    pub fn store_options(&self, file_override: Option<&Path>) -> Result<StoreOptions> {
        Ok(StoreOptions {
            path: self.tasks_file(file_override)?,
            on_malformed: self.storage.on_malformed,
            backup: self.storage.backup,
        })
    }

    pub fn export_path(&self, output_override: Option<&Path>) -> PathBuf {
        output_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| expand_home(&self.export.path))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
