mod context;
mod file;

pub use context::*;
pub use file::*;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main CLI configuration structure
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CliConfig {
    pub contexts: HashMap<String, ContextConfig>,
    pub current_context: String,
}

/// Configuration for a specific context
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ContextConfig {
    pub server_url: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let mut contexts = HashMap::new();
        contexts.insert(
            "default".to_string(),
            ContextConfig {
                server_url: Some("http://localhost:8080".to_string()),
            },
        );

        Self {
            contexts,
            current_context: "default".to_string(),
        }
    }
}

impl CliConfig {
    /// Get the current context configuration
    pub fn current_context(&self) -> Option<&ContextConfig> {
        self.contexts.get(&self.current_context)
    }

    /// Get a specific context configuration
    pub fn get_context(&self, name: &str) -> Option<&ContextConfig> {
        self.contexts.get(name)
    }

    /// Set the current context
    pub fn set_current_context(&mut self, name: String) -> Result<()> {
        if !self.contexts.contains_key(&name) {
            return Err(anyhow::anyhow!("Context '{}' does not exist", name));
        }
        self.current_context = name;
        Ok(())
    }

    /// Update or create a context
    pub fn set_context(&mut self, name: String, config: ContextConfig) {
        self.contexts.insert(name, config);
    }
}

/// Load or create default configuration
pub async fn load_or_create_config() -> Result<CliConfig> {
    match load_config().await {
        Ok(config) => Ok(config),
        Err(_) => {
            let config = CliConfig::default();
            save_config(&config).await?;
            Ok(config)
        }
    }
}

/// Load or create configuration from a specific path
pub async fn load_or_create_config_from_path(
    config_path: &std::path::Path,
) -> Result<CliConfig> {
    match file::load_config_from_path(config_path).await {
        Ok(config) => Ok(config),
        Err(_) => {
            let config = CliConfig::default();
            file::save_config_to_path(&config, config_path).await?;
            Ok(config)
        }
    }
}
