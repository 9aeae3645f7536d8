use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 10;
pub const MIN_GRID_LEVEL: u32 = 1;
pub const MAX_GRID_LEVEL: u32 = 10;

const CELLS_PER_GRID_LEVEL: u32 = 5;
const SPEED_SCALE_MS: u64 = 2500;

/// Player-adjustable rules and pacing, handed to the session at construction
/// and replaced through `GameSession::apply_settings`.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct GameSettings {
    pub allow_self_collision: bool,
    pub allow_border_collision: bool,
    pub speed: u32,
    pub grid_level: u32,
}

impl GameSettings {
    /// Speed 5 gives the classic half-second tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(SPEED_SCALE_MS / self.speed.max(1) as u64)
    }

    /// Cells along each side of the square board.
    pub fn cells_per_side(&self) -> usize {
        (self.grid_level * CELLS_PER_GRID_LEVEL) as usize
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            allow_self_collision: true,
            allow_border_collision: true,
            speed: 5,
            grid_level: 5,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(format!(
                "speed must be between {} and {}, got {}",
                MIN_SPEED, MAX_SPEED, self.speed
            ));
        }
        if !(MIN_GRID_LEVEL..=MAX_GRID_LEVEL).contains(&self.grid_level) {
            return Err(format!(
                "grid_level must be between {} and {}, got {}",
                MIN_GRID_LEVEL, MAX_GRID_LEVEL, self.grid_level
            ));
        }
        Ok(())
    }
}
