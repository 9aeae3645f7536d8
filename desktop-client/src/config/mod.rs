mod client_config;
mod window_config;

pub use client_config::{get_config_manager, ClientConfig, ClientConfigManager, CONFIG_FILE};
pub use window_config::WindowConfig;
