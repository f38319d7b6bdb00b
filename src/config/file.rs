use super::CliConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .context("Could not determine the user config directory")?;
    Ok(base.join("appctl").join("config.yml"))
}

/// Load configuration from the default location
pub async fn load_config() -> Result<CliConfig> {
    load_config_from_path(&default_config_path()?).await
}

/// Load configuration from a specific path
pub async fn load_config_from_path(path: &Path) -> Result<CliConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    Ok(config)
}

/// Save configuration to the default location
pub async fn save_config(config: &CliConfig) -> Result<()> {
    save_config_to_path(config, &default_config_path()?).await
}

/// Save configuration to a specific path
pub async fn save_config_to_path(config: &CliConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create config directory {}", parent.display())
        })?;
    }
    let content = serde_yaml::to_string(config)?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write config at {}", path.display()))?;
    Ok(())
}
