use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path.display(), e))
    }
}

/// Keeps the serialized config in memory. Used by tests and by the client
/// when it runs without a writable config location.
#[derive(Default)]
pub struct MemoryContentConfigProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentConfigProvider {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            content: Mutex::new(initial),
        }
    }
}

impl ConfigContentProvider for MemoryContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        let content = self
            .content
            .lock()
            .map_err(|_| "Config content lock poisoned".to_string())?;
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        let mut current = self
            .content
            .lock()
            .map_err(|_| "Config content lock poisoned".to_string())?;
        *current = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("snake_config_provider_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_file_round_trip() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("speed: 5\n").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("speed: 5\n".to_string())));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_memory_provider_starts_empty() {
        let provider = MemoryContentConfigProvider::default();
        assert_eq!(provider.get_config_content(), Ok(None));
        provider.set_config_content("a: 1").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("a: 1".to_string())));
    }
}
