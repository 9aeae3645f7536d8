use std::collections::VecDeque;

use crate::rng::GameRng;
use crate::settings::GameSettings;
use crate::{log, warn};
use super::grid::{CellGrid, GridCell, GridGeometry};
use super::types::{Coordinate, Direction, Lifecycle, LossReason, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionRules {
    pub allow_self_collision: bool,
    pub allow_border_collision: bool,
}

impl From<&GameSettings> for CollisionRules {
    fn from(settings: &GameSettings) -> Self {
        Self {
            allow_self_collision: settings.allow_self_collision,
            allow_border_collision: settings.allow_border_collision,
        }
    }
}

impl Default for CollisionRules {
    fn default() -> Self {
        Self::from(&GameSettings::default())
    }
}

/// Single-snake grid simulation. The board is rebuilt from the body and the
/// food after every mutation; an inconsistent state restarts the game.
pub struct SnakeEngine {
    grid: CellGrid,
    body: VecDeque<Coordinate>,
    direction: Direction,
    lifecycle: Lifecycle,
    food: Option<Coordinate>,
    rules: CollisionRules,
    rng: GameRng,
}

impl SnakeEngine {
    pub fn new(geometry: GridGeometry, rules: CollisionRules, rng: GameRng) -> Self {
        let mut engine = Self {
            grid: CellGrid::new(geometry),
            body: VecDeque::new(),
            direction: Direction::None,
            lifecycle: Lifecycle::Playing,
            food: None,
            rules,
            rng,
        };
        engine.reinit();
        engine
    }

    /// Start from an existing body (head first). Falls back to a fresh game
    /// when the body does not fit the grid.
    pub fn from_body(
        geometry: GridGeometry,
        rules: CollisionRules,
        rng: GameRng,
        body: Vec<Coordinate>,
        direction: Direction,
    ) -> Self {
        let mut engine = Self::new(geometry, rules, rng);
        if body.is_empty() {
            return engine;
        }
        engine.body = body.into();
        engine.direction = direction;
        engine.food = None;
        if engine.refresh_cells() {
            engine.place_food();
        }
        engine
    }

    pub fn body(&self) -> &VecDeque<Coordinate> {
        &self.body
    }

    pub fn head(&self) -> Coordinate {
        self.body.front().copied().unwrap_or(Coordinate::ORIGIN)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Option<Coordinate> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn rules(&self) -> CollisionRules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: CollisionRules) {
        self.rules = rules;
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.grid.geometry()
    }

    pub fn cells(&self) -> &[GridCell] {
        self.grid.cells()
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<GridCell> {
        self.grid.get(Coordinate::new(x, y))
    }

    /// A turn is rejected only when it would reverse straight into the neck.
    pub fn validate_turn(&self, direction: Direction) -> bool {
        !direction.is_opposite(&self.direction)
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == Direction::None || !self.validate_turn(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn step(&mut self) -> StepOutcome {
        self.move_one_step(self.direction)
    }

    pub fn move_one_step(&mut self, direction: Direction) -> StepOutcome {
        if self.lifecycle != Lifecycle::Playing {
            return StepOutcome::Idle;
        }
        let Some((dx, dy)) = direction.delta() else {
            return StepOutcome::Idle;
        };

        let new_head = self.head().offset(dx, dy);
        self.body.push_front(new_head);

        let mut loss = None;
        if self.wrap_correct() && !self.rules.allow_border_collision {
            log!("Hit the border at ({}, {})", new_head.x, new_head.y);
            self.lifecycle = Lifecycle::Lost;
            loss = Some(LossReason::BorderCollision);
        }

        let tail = self.body.pop_back();
        let head = self.head();
        let mut grew = false;

        if self.body.iter().skip(1).any(|segment| *segment == head) {
            log!("Snake ran into itself at ({}, {})", head.x, head.y);
            if !self.rules.allow_self_collision {
                self.lifecycle = Lifecycle::Lost;
                loss = loss.or(Some(LossReason::SelfCollision));
            }
        } else if self.food == Some(head) {
            if let Some(tail) = tail {
                self.body.push_back(tail);
            }
            grew = true;
            if !self.refresh_cells() {
                return StepOutcome::Idle;
            }
            if self.body.len() == self.geometry().cell_count() {
                if self.lifecycle == Lifecycle::Playing {
                    log!("Board filled with {} segments", self.body.len());
                    self.lifecycle = Lifecycle::Won;
                }
            } else {
                self.place_food();
            }
        }

        if !self.refresh_cells() {
            return StepOutcome::Idle;
        }

        match (self.lifecycle, loss) {
            (Lifecycle::Lost, Some(reason)) => StepOutcome::Lost(reason),
            (Lifecycle::Won, _) => StepOutcome::Won,
            _ if grew => StepOutcome::Grew,
            _ => StepOutcome::Moved,
        }
    }

    /// Pixel-only changes keep the game; new cell counts start a new one.
    /// Returns true when the game was restarted.
    pub fn resize(&mut self, unit_width: f32, unit_height: f32, xn: usize, yn: usize) -> bool {
        let geometry = GridGeometry::new(unit_width, unit_height, xn, yn);
        let current = self.grid.geometry();
        if geometry.xn == current.xn && geometry.yn == current.yn {
            self.grid.set_unit_size(unit_width, unit_height);
            return false;
        }

        log!("Grid resized to {}x{}, starting over", geometry.xn, geometry.yn);
        self.grid = CellGrid::new(geometry);
        self.reinit();
        true
    }

    pub fn reinit(&mut self) {
        self.lifecycle = Lifecycle::Playing;
        self.direction = Direction::None;
        self.body.clear();
        self.body.push_back(Coordinate::ORIGIN);
        self.food = None;
        // The origin always exists: geometry keeps at least one cell per axis.
        if let Err(error) = self.grid.classify(&self.body, None) {
            warn!("Cannot classify a fresh board: {}", error);
        }
        self.place_food();
    }

    /// Out-of-range coordinates jump to the opposite edge, one axis at a time.
    /// Returns whether any coordinate had to be corrected.
    fn wrap_correct(&mut self) -> bool {
        let xn = self.grid.geometry().xn as i32;
        let yn = self.grid.geometry().yn as i32;
        let mut corrected = false;

        for segment in self.body.iter_mut() {
            if segment.x < 0 {
                segment.x = xn - 1;
                corrected = true;
            } else if segment.x > xn - 1 {
                segment.x = 0;
                corrected = true;
            }

            if segment.y < 0 {
                segment.y = yn - 1;
                corrected = true;
            } else if segment.y > yn - 1 {
                segment.y = 0;
                corrected = true;
            }
        }

        corrected
    }

    /// Drops the food on a uniformly chosen empty cell. Leaves no food when
    /// the board has no empty cell.
    fn place_food(&mut self) {
        let empty = self.grid.empty_indices();
        if empty.is_empty() {
            self.food = None;
            return;
        }

        let index = empty[self.rng.index(empty.len())];
        let food = self.grid.geometry().coordinate_of(index);
        self.grid.mark(index, GridCell::Food);
        self.food = Some(food);
        log!("Food placed at ({}, {})", food.x, food.y);
    }

    /// Returns false when the state was inconsistent and the game restarted.
    fn refresh_cells(&mut self) -> bool {
        match self.grid.classify(&self.body, self.food) {
            Ok(()) => true,
            Err(error) => {
                warn!("Board state is inconsistent ({}), starting a new game", error);
                self.reinit();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERMISSIVE: CollisionRules = CollisionRules {
        allow_self_collision: true,
        allow_border_collision: true,
    };

    const STRICT: CollisionRules = CollisionRules {
        allow_self_collision: false,
        allow_border_collision: false,
    };

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn engine(xn: usize, yn: usize, rules: CollisionRules, body: &[(i32, i32)], direction: Direction) -> SnakeEngine {
        SnakeEngine::from_body(
            GridGeometry::new(10.0, 10.0, xn, yn),
            rules,
            GameRng::new(42),
            body.iter().map(|&(x, y)| c(x, y)).collect(),
            direction,
        )
    }

    fn place_food(engine: &mut SnakeEngine, food: Coordinate) {
        engine.food = Some(food);
        assert!(engine.refresh_cells());
    }

    #[test]
    fn test_new_game_state() {
        let engine = SnakeEngine::new(GridGeometry::new(10.0, 10.0, 5, 5), PERMISSIVE, GameRng::new(1));
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
        assert_eq!(engine.direction(), Direction::None);
        assert_eq!(engine.body().iter().copied().collect::<Vec<_>>(), vec![c(0, 0)]);
        let food = engine.food().unwrap();
        assert_ne!(food, c(0, 0));
        assert_eq!(engine.cells().len(), 25);
        assert_eq!(engine.cell_at(food.x, food.y), Some(GridCell::Food));
        assert_eq!(engine.cell_at(0, 0), Some(GridCell::Head));
    }

    #[test]
    fn test_validate_turn_rejects_only_reverse() {
        let all = [
            Direction::None,
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        for current in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let engine = engine(5, 5, PERMISSIVE, &[(2, 2)], current);
            for candidate in all {
                assert_eq!(
                    engine.validate_turn(candidate),
                    candidate != current.reversed(),
                    "{:?} -> {:?}",
                    current,
                    candidate
                );
            }
        }
    }

    #[test]
    fn test_turn_ignores_none_and_reverse() {
        let mut engine = engine(5, 5, PERMISSIVE, &[(2, 2)], Direction::Right);
        assert!(!engine.turn(Direction::Left));
        assert!(!engine.turn(Direction::None));
        assert_eq!(engine.direction(), Direction::Right);
        assert!(engine.turn(Direction::Up));
        assert_eq!(engine.direction(), Direction::Up);
    }

    #[test]
    fn test_none_direction_is_noop() {
        let mut engine = engine(5, 5, STRICT, &[(2, 2)], Direction::None);
        let food = engine.food();
        assert_eq!(engine.move_one_step(Direction::None), StepOutcome::Idle);
        assert_eq!(engine.head(), c(2, 2));
        assert_eq!(engine.food(), food);
    }

    #[test]
    fn test_single_step_without_food() {
        let mut engine = engine(5, 5, PERMISSIVE, &[(2, 2)], Direction::Right);
        place_food(&mut engine, c(0, 4));

        assert_eq!(engine.step(), StepOutcome::Moved);
        assert_eq!(engine.head(), c(3, 2));
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.cell_at(2, 2), Some(GridCell::Empty));
        assert_eq!(engine.cell_at(3, 2), Some(GridCell::Head));
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        let mut engine = engine(5, 5, PERMISSIVE, &[(2, 2)], Direction::Right);
        place_food(&mut engine, c(3, 2));

        assert_eq!(engine.step(), StepOutcome::Grew);
        assert_eq!(engine.body().iter().copied().collect::<Vec<_>>(), vec![c(3, 2), c(2, 2)]);
        let food = engine.food().unwrap();
        assert!(!engine.body().contains(&food));
        assert_eq!(engine.cell_at(food.x, food.y), Some(GridCell::Food));
        assert_eq!(engine.cell_at(2, 2), Some(GridCell::Body));
    }

    #[test]
    fn test_food_never_lands_on_body_or_previous_food() {
        for seed in 0..50 {
            let mut engine = SnakeEngine::from_body(
                GridGeometry::new(1.0, 1.0, 3, 3),
                PERMISSIVE,
                GameRng::new(seed),
                vec![c(1, 1), c(0, 1), c(0, 0)],
                Direction::Right,
            );
            place_food(&mut engine, c(2, 1));
            assert_eq!(engine.step(), StepOutcome::Grew);

            let food = engine.food().unwrap();
            assert!(!engine.body().contains(&food));
            assert_ne!(food, c(2, 1));
        }
    }

    #[test]
    fn test_wraps_when_border_collision_allowed() {
        let mut engine = engine(5, 5, PERMISSIVE, &[(4, 2)], Direction::Right);
        place_food(&mut engine, c(2, 0));

        assert_eq!(engine.step(), StepOutcome::Moved);
        assert_eq!(engine.head(), c(0, 2));
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
    }

    #[test]
    fn test_wraps_every_edge() {
        let cases = [
            ((0, 2), Direction::Left, (4, 2)),
            ((2, 0), Direction::Up, (2, 4)),
            ((2, 4), Direction::Down, (2, 0)),
        ];
        for (start, direction, expected) in cases {
            let mut engine = engine(5, 5, PERMISSIVE, &[start], direction);
            place_food(&mut engine, c(1, 1));
            engine.step();
            assert_eq!(engine.head(), c(expected.0, expected.1));
        }
    }

    #[test]
    fn test_border_collision_loses_and_keeps_wrapped_body() {
        let mut engine = engine(5, 5, STRICT, &[(4, 2), (3, 2)], Direction::Right);
        place_food(&mut engine, c(1, 1));

        assert_eq!(engine.step(), StepOutcome::Lost(LossReason::BorderCollision));
        assert_eq!(engine.lifecycle(), Lifecycle::Lost);
        assert_eq!(engine.body().iter().copied().collect::<Vec<_>>(), vec![c(0, 2), c(4, 2)]);
        assert_eq!(engine.cell_at(0, 2), Some(GridCell::Head));
    }

    #[test]
    fn test_self_collision_loses_when_disallowed() {
        // Square loop: head at (1,1) moving down into (1,2).
        let body = [(1, 1), (2, 1), (2, 2), (1, 2), (0, 2)];
        let mut engine = engine(5, 5, STRICT, &body, Direction::Down);
        place_food(&mut engine, c(4, 4));

        assert_eq!(engine.step(), StepOutcome::Lost(LossReason::SelfCollision));
        assert_eq!(engine.lifecycle(), Lifecycle::Lost);
    }

    #[test]
    fn test_self_collision_is_tolerated_when_allowed() {
        let body = [(1, 1), (2, 1), (2, 2), (1, 2), (0, 2)];
        let mut engine = engine(5, 5, PERMISSIVE, &body, Direction::Down);
        place_food(&mut engine, c(4, 4));

        assert_eq!(engine.step(), StepOutcome::Moved);
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
        assert_eq!(engine.head(), c(1, 2));
        assert_eq!(engine.len(), 5);
    }

    #[test]
    fn test_moving_into_vacated_tail_is_not_a_collision() {
        let body = [(1, 1), (2, 1), (2, 2), (1, 2)];
        let mut engine = engine(5, 5, STRICT, &body, Direction::Down);
        place_food(&mut engine, c(4, 4));

        assert_eq!(engine.step(), StepOutcome::Moved);
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
    }

    #[test]
    fn test_filling_the_board_wins() {
        let mut engine = engine(2, 2, STRICT, &[(0, 0), (0, 1), (1, 1)], Direction::Right);
        assert_eq!(engine.food(), Some(c(1, 0)));

        assert_eq!(engine.step(), StepOutcome::Won);
        assert_eq!(engine.lifecycle(), Lifecycle::Won);
        assert_eq!(engine.len(), 4);
    }

    #[test]
    fn test_terminal_states_ignore_steps_until_reinit() {
        let mut engine = engine(5, 5, STRICT, &[(4, 2)], Direction::Right);
        place_food(&mut engine, c(1, 1));
        engine.step();
        assert_eq!(engine.lifecycle(), Lifecycle::Lost);

        let head = engine.head();
        assert_eq!(engine.step(), StepOutcome::Idle);
        assert_eq!(engine.head(), head);

        engine.reinit();
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
        assert_eq!(engine.direction(), Direction::None);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_out_of_range_body_forces_reinit() {
        let engine = engine(5, 5, PERMISSIVE, &[(7, 7), (6, 7)], Direction::Left);
        assert_eq!(engine.body().iter().copied().collect::<Vec<_>>(), vec![c(0, 0)]);
        assert_eq!(engine.direction(), Direction::None);
        assert_eq!(engine.lifecycle(), Lifecycle::Playing);
        assert!(engine.food().is_some());
    }

    #[test]
    fn test_pixel_resize_keeps_game() {
        let mut engine = engine(5, 5, PERMISSIVE, &[(2, 2), (1, 2)], Direction::Right);
        let food = engine.food();

        assert!(!engine.resize(32.0, 16.0, 5, 5));
        assert_eq!(engine.geometry().unit_width, 32.0);
        assert_eq!(engine.geometry().unit_height, 16.0);
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.food(), food);
        assert_eq!(engine.direction(), Direction::Right);
    }

    #[test]
    fn test_cell_count_resize_restarts() {
        let mut engine = engine(5, 5, PERMISSIVE, &[(4, 4), (3, 4), (2, 4)], Direction::Right);

        assert!(engine.resize(10.0, 10.0, 3, 2));
        assert_eq!(engine.cells().len(), 6);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.head(), c(0, 0));
        assert_eq!(engine.direction(), Direction::None);
        let food = engine.food().unwrap();
        assert!(engine.geometry().contains(food));
    }

    #[test]
    fn test_single_cell_board_has_no_food() {
        let engine = SnakeEngine::new(GridGeometry::new(1.0, 1.0, 1, 1), PERMISSIVE, GameRng::new(3));
        assert_eq!(engine.food(), None);
        assert_eq!(engine.cells(), &[GridCell::Head]);
    }
}
