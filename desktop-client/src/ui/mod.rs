mod board_painter;
mod game_over;
mod settings_panel;

pub use board_painter::BoardPainter;
pub use game_over::{show_game_over, GameOverAction};
pub use settings_panel::SettingsPanel;
