use eframe::egui;
use snake_common::{Command, InputKey};

const KEY_BINDINGS: [(egui::Key, InputKey); 13] = [
    (egui::Key::Space, InputKey::Space),
    (egui::Key::ArrowLeft, InputKey::ArrowLeft),
    (egui::Key::ArrowUp, InputKey::ArrowUp),
    (egui::Key::ArrowRight, InputKey::ArrowRight),
    (egui::Key::ArrowDown, InputKey::ArrowDown),
    (egui::Key::A, InputKey::A),
    (egui::Key::W, InputKey::W),
    (egui::Key::D, InputKey::D),
    (egui::Key::S, InputKey::S),
    (egui::Key::Num4, InputKey::Num4),
    (egui::Key::Num8, InputKey::Num8),
    (egui::Key::Num6, InputKey::Num6),
    (egui::Key::Num5, InputKey::Num5),
];

pub fn pressed_commands(input: &egui::InputState) -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| input.key_pressed(*key))
        .map(|(_, input_key)| input_key.command())
        .collect()
}
