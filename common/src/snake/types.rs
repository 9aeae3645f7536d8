use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Signed encoding: a direction and its reverse are negatives of each other,
/// `None` is its own reverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn code(&self) -> i8 {
        match self {
            Direction::None => 0,
            Direction::Left => 2,
            Direction::Right => -2,
            Direction::Up => 3,
            Direction::Down => -3,
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Direction::None),
            2 => Some(Direction::Left),
            -2 => Some(Direction::Right),
            3 => Some(Direction::Up),
            -3 => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.code() == -other.code()
    }

    /// Grid offset of one step; `None` does not move.
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Direction::None => None,
            Direction::Left => Some((-1, 0)),
            Direction::Right => Some((1, 0)),
            Direction::Up => Some((0, -1)),
            Direction::Down => Some((0, 1)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Lost,
    Playing,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    BorderCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing moved: no direction, or the game is already over.
    Idle,
    Moved,
    Grew,
    Lost(LossReason),
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 5] = [
        Direction::None,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    #[test]
    fn test_reverse_is_negated_code() {
        for direction in ALL {
            assert_eq!(direction.reversed().code(), -direction.code());
            assert_eq!(Direction::from_code(direction.code()), Some(direction));
        }
        assert_eq!(Direction::from_code(1), None);
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
        assert!(Direction::None.is_opposite(&Direction::None));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::None.delta(), None);
        assert_eq!(Direction::Up.delta(), Some((0, -1)));
        assert_eq!(Direction::Down.delta(), Some((0, 1)));
        assert_eq!(Direction::Left.delta(), Some((-1, 0)));
        assert_eq!(Direction::Right.delta(), Some((1, 0)));
    }
}
