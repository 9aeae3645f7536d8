mod keys;
mod touch;

pub use keys::pressed_commands;
pub use touch::TouchTracker;
