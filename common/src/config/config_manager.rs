use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. The first successful read is cached;
/// `set_config` validates, persists and replaces the cached value.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        cells: u32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { cells: 25 }
        }
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.cells == 0 {
                return Err("cells must be positive".to_string());
            }
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, Sample> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_yields_default() {
        assert_eq!(manager(None).get_config(), Ok(Sample::default()));
    }

    #[test]
    fn test_stored_content_is_loaded() {
        assert_eq!(manager(Some("cells: 10")).get_config(), Ok(Sample { cells: 10 }));
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        assert!(manager(Some("cells: 0")).get_config().is_err());
        assert!(manager(Some("cells: [")).get_config().is_err());
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let manager = manager(None);
        assert!(manager.set_config(&Sample { cells: 0 }).is_err());
        assert_eq!(manager.get_config(), Ok(Sample::default()));
    }

    #[test]
    fn test_set_config_updates_cache() {
        let manager = manager(Some("cells: 10"));
        assert_eq!(manager.get_config(), Ok(Sample { cells: 10 }));
        manager.set_config(&Sample { cells: 40 }).unwrap();
        assert_eq!(manager.get_config(), Ok(Sample { cells: 40 }));
    }
}
