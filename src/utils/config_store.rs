//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;

use crate::domain::config::AppConfig;

const CONFIG_FILE: &str = "rosterview.toml";

/// Get the platform config directory for the application
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "cyenx", "rosterview")
        .context("could not determine platform config directory")?;
    let dir = dirs.config_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load the application config. A missing file means defaults (persisted so
/// the user has a file to edit); a malformed file is an error the caller
/// surfaces at startup.
pub fn load_config() -> Result<AppConfig> {
    let path = config_dir()?.join(CONFIG_FILE);

    if !path.exists() {
        let config = AppConfig::default();
        if let Err(e) = save_config(&config) {
            tracing::warn!("could not write default config: {e:#}");
        }
        return Ok(config);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Save the application config
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_dir()?.join(CONFIG_FILE);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
