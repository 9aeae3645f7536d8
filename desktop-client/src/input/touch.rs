use std::collections::BTreeMap;

use eframe::egui;
use snake_common::gesture::{Point, TouchEvent, TouchPhase};

/// Rebuilds DOM-style touch events (all active contacts plus the changed
/// one) from egui's per-finger touch events.
#[derive(Default)]
pub struct TouchTracker {
    active: BTreeMap<u64, Point>,
}

impl TouchTracker {
    pub fn translate(&mut self, event: &egui::Event) -> Option<TouchEvent> {
        let egui::Event::Touch { id, phase, pos, .. } = event else {
            return None;
        };
        let phase = match phase {
            egui::TouchPhase::Start => TouchPhase::Start,
            egui::TouchPhase::Move => TouchPhase::Move,
            egui::TouchPhase::End => TouchPhase::End,
            egui::TouchPhase::Cancel => TouchPhase::Cancel,
        };
        Some(self.apply(id.0, phase, Point::new(pos.x, pos.y)))
    }

    fn apply(&mut self, id: u64, phase: TouchPhase, point: Point) -> TouchEvent {
        match phase {
            TouchPhase::Start | TouchPhase::Move => {
                self.active.insert(id, point);
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.active.remove(&id);
            }
        }

        TouchEvent {
            phase,
            touches: self.active.values().copied().collect(),
            changed_touches: vec![point],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::gesture::{Gesture, GestureClassifier};

    #[test]
    fn test_single_finger_tracks_one_contact() {
        let mut tracker = TouchTracker::default();
        let start = tracker.apply(1, TouchPhase::Start, Point::new(5.0, 5.0));
        assert_eq!(start.touches.len(), 1);

        let end = tracker.apply(1, TouchPhase::End, Point::new(6.0, 5.0));
        assert!(end.touches.is_empty());
        assert_eq!(end.changed_touches, vec![Point::new(6.0, 5.0)]);
    }

    #[test]
    fn test_second_finger_is_reported_as_multi_touch() {
        let mut tracker = TouchTracker::default();
        tracker.apply(1, TouchPhase::Start, Point::new(0.0, 0.0));
        let second = tracker.apply(2, TouchPhase::Start, Point::new(40.0, 0.0));
        assert_eq!(second.touches.len(), 2);

        let moved = tracker.apply(1, TouchPhase::Move, Point::new(80.0, 0.0));
        assert_eq!(moved.touches.len(), 2);
    }

    #[test]
    fn test_tracker_feeds_classifier() {
        let mut tracker = TouchTracker::default();
        let mut classifier = GestureClassifier::default();
        let events = [
            tracker.apply(7, TouchPhase::Start, Point::new(100.0, 100.0)),
            tracker.apply(7, TouchPhase::Move, Point::new(100.0, 40.0)),
            tracker.apply(7, TouchPhase::End, Point::new(100.0, 38.0)),
        ];
        let gestures: Vec<Gesture> = events.iter().filter_map(|e| classifier.handle(e)).collect();
        assert_eq!(gestures.len(), 1);
        assert!(matches!(
            gestures[0],
            Gesture::Swipe { direction: snake_common::gesture::Compass::Top, .. }
        ));
    }
}
