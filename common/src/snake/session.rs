use std::time::Instant;

use crate::config::Validate;
use crate::input::Command;
use crate::log;
use crate::observable::{ListenerId, Listeners, Observable};
use crate::render::Renderer;
use crate::rng::GameRng;
use crate::settings::GameSettings;
use super::engine::{CollisionRules, SnakeEngine};
use super::grid::GridGeometry;
use super::types::{Direction, Lifecycle, StepOutcome};

/// Drives one engine from a frame loop: tick pacing, pause, input commands
/// and settings changes all go through here.
pub struct GameSession {
    engine: SnakeEngine,
    settings: GameSettings,
    paused: Observable<bool>,
    direction_listeners: Listeners<Direction>,
    last_tick: Instant,
    viewport: Option<(f32, f32)>,
}

impl GameSession {
    pub fn new(settings: GameSettings, rng: GameRng, now: Instant) -> Self {
        let side = settings.cells_per_side();
        let engine = SnakeEngine::new(
            GridGeometry::new(1.0, 1.0, side, side),
            CollisionRules::from(&settings),
            rng,
        );
        log!(
            "New {}x{} game, tick every {} ms",
            side,
            side,
            settings.tick_interval().as_millis()
        );

        Self {
            engine,
            settings,
            paused: Observable::new(false),
            direction_listeners: Listeners::new(),
            last_tick: now,
            viewport: None,
        }
    }

    pub fn engine(&self) -> &SnakeEngine {
        &self.engine
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.engine.lifecycle()
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.get()
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.is_paused() {
            self.paused.set(paused);
        }
    }

    /// Steps once when more than one tick interval has passed since the last
    /// step.
    pub fn tick(&mut self, now: Instant) -> StepOutcome {
        if self.is_paused() {
            return StepOutcome::Idle;
        }
        if now.saturating_duration_since(self.last_tick) <= self.settings.tick_interval() {
            return StepOutcome::Idle;
        }
        self.last_tick = now;
        self.engine.step()
    }

    /// An accepted turn moves the snake right away and restarts the tick
    /// clock, so pressing a key is never slower than waiting.
    pub fn handle_command(&mut self, command: Command, now: Instant) -> StepOutcome {
        match command {
            Command::TogglePause => {
                let paused = !self.is_paused();
                self.paused.set(paused);
                StepOutcome::Idle
            }
            Command::Turn(direction) => {
                if self.is_paused() || self.engine.lifecycle() != Lifecycle::Playing {
                    return StepOutcome::Idle;
                }
                let previous = self.engine.direction();
                if !self.engine.turn(direction) {
                    return StepOutcome::Idle;
                }
                if previous != direction {
                    self.direction_listeners.notify(&previous, &direction);
                }
                self.last_tick = now;
                self.engine.step()
            }
        }
    }

    /// Collision rules apply immediately; a new grid level restarts the game.
    /// Returns whether the game was restarted.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Result<bool, String> {
        settings.validate()?;
        self.engine.set_rules(CollisionRules::from(&settings));
        let regrid = settings.grid_level != self.settings.grid_level;
        self.settings = settings;
        if regrid {
            return Ok(self.relayout());
        }
        Ok(false)
    }

    /// Fit the board into a pixel area. Returns whether the game restarted.
    pub fn resize_viewport(&mut self, width: f32, height: f32) -> bool {
        self.viewport = Some((width, height));
        self.relayout()
    }

    pub fn restart(&mut self, now: Instant) {
        self.engine.reinit();
        self.last_tick = now;
    }

    pub fn subscribe_direction(&mut self, handler: impl FnMut(&Direction, &Direction) + 'static) -> ListenerId {
        self.direction_listeners.subscribe(handler)
    }

    pub fn unsubscribe_direction(&mut self, id: ListenerId) -> bool {
        self.direction_listeners.unsubscribe(id)
    }

    pub fn subscribe_pause(&mut self, handler: impl FnMut(&bool, &bool) + 'static) -> ListenerId {
        self.paused.subscribe(handler)
    }

    pub fn unsubscribe_pause(&mut self, id: ListenerId) -> bool {
        self.paused.unsubscribe(id)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.paint(self.engine.geometry(), self.engine.cells());
    }

    fn relayout(&mut self) -> bool {
        let side = self.settings.cells_per_side();
        let (width, height) = self.viewport.unwrap_or((side as f32, side as f32));
        self.engine
            .resize(width / side as f32, height / side as f32, side, side)
    }
}
