//! Game logic shared by the Snake front-ends: the grid engine, the touch
//! gesture classifier, input mapping, settings and the config/logging
//! plumbing. Nothing here depends on a UI toolkit.

pub mod config;
pub mod gesture;
pub mod input;
pub mod logger;
pub mod observable;
pub mod render;
pub mod rng;
pub mod settings;
pub mod snake;

pub use input::{Command, InputKey};
pub use render::Renderer;
pub use rng::GameRng;
pub use settings::GameSettings;
