use crate::gesture::{Compass, Gesture};
use crate::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
}

impl Command {
    /// Diagonal swipes carry no turn and are dropped.
    pub fn from_gesture(gesture: Gesture) -> Option<Self> {
        match gesture {
            Gesture::Tap => Some(Command::TogglePause),
            Gesture::Swipe { direction, .. } => match direction {
                Compass::Left => Some(Command::Turn(Direction::Left)),
                Compass::Right => Some(Command::Turn(Direction::Right)),
                Compass::Top => Some(Command::Turn(Direction::Up)),
                Compass::Bottom => Some(Command::Turn(Direction::Down)),
                Compass::TopLeft | Compass::TopRight | Compass::BottomLeft | Compass::BottomRight => None,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKey {
    Space,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    A,
    W,
    D,
    S,
    Num4,
    Num8,
    Num6,
    Num5,
}

impl InputKey {
    /// Browser key codes (keypress codes for the letters).
    pub fn from_key_code(code: u32) -> Option<Self> {
        let key = match code {
            32 => InputKey::Space,
            37 => InputKey::ArrowLeft,
            38 => InputKey::ArrowUp,
            39 => InputKey::ArrowRight,
            40 => InputKey::ArrowDown,
            97 => InputKey::A,
            119 => InputKey::W,
            100 => InputKey::D,
            115 => InputKey::S,
            52 => InputKey::Num4,
            56 => InputKey::Num8,
            54 => InputKey::Num6,
            53 => InputKey::Num5,
            _ => return None,
        };
        Some(key)
    }

    pub fn command(&self) -> Command {
        match self {
            InputKey::Space => Command::TogglePause,
            InputKey::ArrowLeft | InputKey::A | InputKey::Num4 => Command::Turn(Direction::Left),
            InputKey::ArrowUp | InputKey::W | InputKey::Num8 => Command::Turn(Direction::Up),
            InputKey::ArrowRight | InputKey::D | InputKey::Num6 => Command::Turn(Direction::Right),
            InputKey::ArrowDown | InputKey::S | InputKey::Num5 => Command::Turn(Direction::Down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(InputKey::from_key_code(37), Some(InputKey::ArrowLeft));
        assert_eq!(InputKey::from_key_code(119), Some(InputKey::W));
        assert_eq!(InputKey::from_key_code(53), Some(InputKey::Num5));
        assert_eq!(InputKey::from_key_code(13), None);
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(InputKey::Space.command(), Command::TogglePause);
        assert_eq!(InputKey::A.command(), Command::Turn(Direction::Left));
        assert_eq!(InputKey::Num8.command(), Command::Turn(Direction::Up));
        assert_eq!(InputKey::D.command(), Command::Turn(Direction::Right));
        assert_eq!(InputKey::Num5.command(), Command::Turn(Direction::Down));
    }

    #[test]
    fn test_gesture_commands() {
        assert_eq!(Command::from_gesture(Gesture::Tap), Some(Command::TogglePause));
        let swipe = |direction| Gesture::Swipe { direction, angle: 0.0 };
        assert_eq!(
            Command::from_gesture(swipe(Compass::Top)),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            Command::from_gesture(swipe(Compass::Bottom)),
            Some(Command::Turn(Direction::Down))
        );
        assert_eq!(Command::from_gesture(swipe(Compass::TopLeft)), None);
    }
}
