use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

const MIN_SIDE: f32 = 200.0;
const MAX_SIDE: f32 = 4000.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_SIDE..=MAX_SIDE).contains(&value) {
                return Err(format!(
                    "window {} must be between {} and {}, got {}",
                    name, MIN_SIDE, MAX_SIDE, value
                ));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 700.0,
        }
    }
}
