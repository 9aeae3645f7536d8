mod engine;
mod grid;
mod session;
mod types;

pub use engine::{CollisionRules, SnakeEngine};
pub use grid::{CellGrid, GridCell, GridError, GridGeometry};
pub use session::GameSession;
pub use types::{Coordinate, Direction, Lifecycle, LossReason, StepOutcome};
