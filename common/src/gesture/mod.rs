//! Single-finger touch gesture recognition.
//!
//! Raw touch events go in, `Gesture::Tap` and `Gesture::Swipe` come out.

mod classifier;
mod point;

pub use classifier::{Gesture, GestureClassifier, TouchEvent, TouchPhase, DEFAULT_MIN_SWIPE_LENGTH, DEFAULT_TAP_TOLERANCE};
pub use point::{Compass, Point, EPS};
