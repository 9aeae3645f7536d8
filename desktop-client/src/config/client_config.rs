use serde::{Deserialize, Serialize};
use snake_common::GameSettings;
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::WindowConfig;

pub const CONFIG_FILE: &str = "snake_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    pub game: GameSettings,
    pub window: WindowConfig,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
