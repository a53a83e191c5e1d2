use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_PREVIEW_CHARS: usize = 40;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MoodlogConfig {
    #[serde(default)]
    pub journal: JournalSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub preview_chars: Option<usize>,
}

impl MoodlogConfig {
    pub fn preview_chars(&self) -> usize {
        self.ui.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_db_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("moodlog.db"))
}

/// Read the config file; a missing file yields the defaults.
pub fn read_config(path: &Path) -> anyhow::Result<MoodlogConfig> {
    if !path.exists() {
        return Ok(MoodlogConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Load the config named on the command line, or the default one.
pub fn load(cli: &Cli) -> anyhow::Result<MoodlogConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    read_config(&path)
}

/// Database path: `--db` / `MOODLOG_DB`, then the config file, then the default.
pub fn resolve_db_path(cli: &Cli, config: &MoodlogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.db {
        return Ok(path.clone());
    }
    if let Some(path) = &config.journal.path {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_db_path()
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("moodlog"));
        }
    }
    Ok(home_dir()?.join(".config").join("moodlog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("moodlog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("moodlog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
