use std::time::Instant;

use eframe::egui;
use snake_common::gesture::GestureClassifier;
use snake_common::snake::{GameSession, StepOutcome};
use snake_common::{log, warn, Command, GameRng, GameSettings};

use crate::config::{ClientConfig, ClientConfigManager};
use crate::input::{pressed_commands, TouchTracker};
use crate::ui::{show_game_over, BoardPainter, GameOverAction, SettingsPanel};

pub struct SnakeApp {
    session: GameSession,
    classifier: GestureClassifier,
    touches: TouchTracker,
    settings_panel: SettingsPanel,
    config: ClientConfig,
    config_manager: ClientConfigManager,
}

impl SnakeApp {
    pub fn new(config: ClientConfig, config_manager: ClientConfigManager, rng: GameRng) -> Self {
        let mut session = GameSession::new(config.game, rng, Instant::now());
        session.subscribe_pause(|_, paused| {
            if *paused {
                log!("Paused");
            } else {
                log!("Resumed");
            }
        });
        session.subscribe_direction(|old, new| log!("Turn {:?} -> {:?}", old, new));

        Self {
            session,
            classifier: GestureClassifier::default(),
            touches: TouchTracker::default(),
            settings_panel: SettingsPanel::new(config.game),
            config,
            config_manager,
        }
    }

    fn collect_commands(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let keyboard_free = !ctx.wants_keyboard_input();
        let touches = &mut self.touches;
        let classifier = &mut self.classifier;

        ctx.input(|input| {
            let mut commands = if keyboard_free {
                pressed_commands(input)
            } else {
                Vec::new()
            };

            for event in &input.events {
                if let Some(touch) = touches.translate(event)
                    && let Some(gesture) = classifier.handle(&touch)
                    && let Some(command) = Command::from_gesture(gesture)
                {
                    commands.push(command);
                }
            }
            commands
        })
    }

    fn apply_settings(&mut self, settings: GameSettings) {
        match self.session.apply_settings(settings) {
            Ok(restarted) => {
                if restarted {
                    log!("Grid level changed to {}, new game", settings.grid_level);
                }
                self.config.game = settings;
                if let Err(e) = self.config_manager.set_config(&self.config) {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Err(e) => warn!("Rejected settings: {}", e),
        }
    }

    fn report(outcome: StepOutcome) {
        match outcome {
            StepOutcome::Lost(reason) => log!("Game lost: {:?}", reason),
            StepOutcome::Won => log!("Game won"),
            StepOutcome::Idle | StepOutcome::Moved | StepOutcome::Grew => {}
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            if ui.button("⚙ Settings").clicked() {
                self.settings_panel.toggle(self.session.settings());
            }

            let pause_label = if self.session.is_paused() { "▶ Resume" } else { "⏸ Pause" };
            if ui.button(pause_label).clicked() {
                self.session.handle_command(Command::TogglePause, now);
            }

            ui.separator();
            ui.label(format!("Length: {}", self.session.engine().len()));
            if self.session.is_paused() {
                ui.label("Paused (Space or tap to resume)");
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui, now: Instant) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        self.session.resize_viewport(rect.width(), rect.height());
        Self::report(self.session.tick(now));

        let mut board = BoardPainter::new(&painter, rect.min);
        self.session.render(&mut board);
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        for command in self.collect_commands(ctx) {
            Self::report(self.session.handle_command(command, now));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui, now);
        });

        if let Some(settings) = self.settings_panel.show(ctx) {
            self.apply_settings(settings);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.render_board(ui, now);
            });

        let length = self.session.engine().len();
        if show_game_over(ctx, self.session.lifecycle(), length) == GameOverAction::Restart {
            self.session.restart(now);
        }

        ctx.request_repaint();
    }
}
