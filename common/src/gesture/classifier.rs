use super::point::{Compass, EPS, Point};

pub const DEFAULT_MIN_SWIPE_LENGTH: f32 = 30.0;
pub const DEFAULT_TAP_TOLERANCE: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One touch event in the DOM model: `touches` are the contacts still on the
/// surface, `changed_touches` the ones this event is about.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<Point>,
    pub changed_touches: Vec<Point>,
}

impl TouchEvent {
    pub fn start(at: Point) -> Self {
        Self {
            phase: TouchPhase::Start,
            touches: vec![at],
            changed_touches: vec![at],
        }
    }

    pub fn moved(to: Point) -> Self {
        Self {
            phase: TouchPhase::Move,
            touches: vec![to],
            changed_touches: vec![to],
        }
    }

    pub fn end(at: Point) -> Self {
        Self {
            phase: TouchPhase::End,
            touches: Vec::new(),
            changed_touches: vec![at],
        }
    }

    pub fn cancel() -> Self {
        Self {
            phase: TouchPhase::Cancel,
            touches: Vec::new(),
            changed_touches: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Tap,
    Swipe { direction: Compass, angle: f32 },
}

impl Gesture {
    fn swipe(displacement: &Point) -> Self {
        Gesture::Swipe {
            direction: displacement.direction(),
            angle: displacement.angle(),
        }
    }
}

pub struct GestureClassifier {
    /// Reference point of the current segment. `None` while idle.
    start: Option<Point>,
    current: Option<Point>,
    tap_able: bool,
    min_swipe_length: f32,
    tap_tolerance: f32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE_LENGTH, DEFAULT_TAP_TOLERANCE)
    }
}

impl GestureClassifier {
    pub fn new(min_swipe_length: f32, tap_tolerance: f32) -> Self {
        let mut classifier = Self {
            start: None,
            current: None,
            tap_able: true,
            min_swipe_length,
            tap_tolerance: DEFAULT_TAP_TOLERANCE,
        };
        classifier.set_tap_tolerance(tap_tolerance);
        classifier
    }

    pub fn tap_tolerance(&self) -> f32 {
        self.tap_tolerance
    }

    /// Squared distance. Non-positive values collapse to `EPS`.
    pub fn set_tap_tolerance(&mut self, tolerance: f32) {
        self.tap_tolerance = if tolerance <= 0.0 { EPS } else { tolerance };
    }

    pub fn min_swipe_length(&self) -> f32 {
        self.min_swipe_length
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Last contact position seen during the current gesture.
    pub fn last_point(&self) -> Option<Point> {
        self.current
    }

    pub fn handle(&mut self, event: &TouchEvent) -> Option<Gesture> {
        match event.phase {
            TouchPhase::Start => {
                self.on_start(event);
                None
            }
            TouchPhase::Move => self.on_move(event),
            TouchPhase::End => self.on_end(event),
            TouchPhase::Cancel => {
                self.clear();
                None
            }
        }
    }

    fn on_start(&mut self, event: &TouchEvent) {
        if let [point] = event.touches.as_slice() {
            self.tap_able = true;
            self.start = Some(*point);
            self.current = None;
        }
    }

    fn on_move(&mut self, event: &TouchEvent) -> Option<Gesture> {
        let [point] = event.touches.as_slice() else {
            return None;
        };
        let start = self.start?;

        self.tap_able = false;
        self.current = Some(*point);
        let displacement = point.sub(&start);
        if displacement.length() > self.min_swipe_length {
            self.start = Some(*point);
            return Some(Gesture::swipe(&displacement));
        }
        None
    }

    fn on_end(&mut self, event: &TouchEvent) -> Option<Gesture> {
        let [point] = event.changed_touches.as_slice() else {
            return None;
        };
        let start = self.start?;

        self.current = Some(*point);
        let displacement = point.sub(&start);
        let gesture = if displacement.length() > self.min_swipe_length {
            Some(Gesture::swipe(&displacement))
        } else if self.tap_able && start.approx_eq(point, self.tap_tolerance) {
            Some(Gesture::Tap)
        } else {
            None
        };
        self.clear();
        gesture
    }

    fn clear(&mut self) {
        self.start = None;
        self.current = None;
    }
}
