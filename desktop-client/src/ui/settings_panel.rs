use eframe::egui;
use snake_common::GameSettings;
use snake_common::settings::{MAX_GRID_LEVEL, MAX_SPEED, MIN_GRID_LEVEL, MIN_SPEED};

/// Settings overlay. Edits a draft copy and hands it back whenever a control
/// changed during the frame.
pub struct SettingsPanel {
    open: bool,
    draft: GameSettings,
}

impl SettingsPanel {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            open: false,
            draft: settings,
        }
    }

    pub fn toggle(&mut self, current: &GameSettings) {
        self.open = !self.open;
        self.draft = *current;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<GameSettings> {
        if !self.open {
            return None;
        }

        let mut open = self.open;
        let mut changed = false;
        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                changed |= ui
                    .checkbox(&mut self.draft.allow_self_collision, "Allow self collision")
                    .changed();
                changed |= ui
                    .checkbox(&mut self.draft.allow_border_collision, "Allow border collision")
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut self.draft.speed, MIN_SPEED..=MAX_SPEED).text("Speed"))
                    .changed();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.draft.grid_level, MIN_GRID_LEVEL..=MAX_GRID_LEVEL)
                            .text("Grid level"),
                    )
                    .changed();
                ui.label("Changing the grid level starts a new game.");
            });
        self.open = open;

        changed.then_some(self.draft)
    }
}
