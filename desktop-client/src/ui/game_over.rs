use eframe::egui;
use egui::{Align, Layout};
use snake_common::snake::Lifecycle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverAction {
    None,
    Restart,
}

pub fn show_game_over(ctx: &egui::Context, lifecycle: Lifecycle, length: usize) -> GameOverAction {
    let (title, message) = match lifecycle {
        Lifecycle::Playing => return GameOverAction::None,
        Lifecycle::Lost => ("Game over", "Better luck next time."),
        Lifecycle::Won => ("Board cleared", "Every cell is taken. Well played!"),
    };

    let mut action = GameOverAction::None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.label(format!("Length: {}", length));
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = GameOverAction::Restart;
                }
            });
        });
    action
}
