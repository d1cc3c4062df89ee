// Pointer / wheel / touch gesture state machine for the image viewer.
// Transitions are pure: (mode, event, current transform) -> (next mode, optional mutation).

use super::transform::{Mutation, Point, Transform};

pub const WHEEL_ZOOM_FACTOR: f64 = 0.001;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    Wheel { delta_y: f64 },
    DoubleActivate,
    /// Touch contacts still on the surface after the change.
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd(Vec<Point>),
}

/// Drag and pinch never overlap: the live contact count picks the mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureMode {
    #[default]
    Idle,
    /// `origin` is the pointer position minus the translation at press time.
    Dragging { origin: Point },
    Pinching { baseline: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct GestureController {
    mode: GestureMode,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, GestureMode::Dragging { .. })
    }

    /// Feeds one event through the machine and applies the resulting mutation.
    /// Returns true when the transform changed.
    pub fn handle(&mut self, event: &InputEvent, transform: &mut Transform) -> bool {
        let (mode, mutation) = step(self.mode, event, transform);
        self.mode = mode;
        match mutation {
            Some(m) => {
                transform.apply(m);
                true
            }
            None => false,
        }
    }
}

fn drag_origin(pointer: Point, transform: &Transform) -> GestureMode {
    let t = transform.translation();
    GestureMode::Dragging {
        origin: Point::new(pointer.x - t.x, pointer.y - t.y),
    }
}

/// Mode implied by a fresh set of contacts; nothing is applied on a count change.
fn seed_touch(contacts: &[Point], transform: &Transform) -> GestureMode {
    match contacts {
        [only] => drag_origin(*only, transform),
        [a, b] => GestureMode::Pinching {
            baseline: a.distance_to(*b),
        },
        _ => GestureMode::Idle,
    }
}

pub fn step(
    mode: GestureMode,
    event: &InputEvent,
    transform: &Transform,
) -> (GestureMode, Option<Mutation>) {
    use GestureMode::*;
    match event {
        InputEvent::Wheel { delta_y } => (mode, Some(Mutation::ZoomDelta(-delta_y * WHEEL_ZOOM_FACTOR))),
        InputEvent::DoubleActivate => (Idle, Some(Mutation::Reset)),
        InputEvent::PointerDown(p) => (drag_origin(*p, transform), None),
        InputEvent::PointerMove(p) => match mode {
            Dragging { origin } => (
                mode,
                Some(Mutation::TranslateTo(Point::new(p.x - origin.x, p.y - origin.y))),
            ),
            _ => (mode, None),
        },
        InputEvent::PointerUp | InputEvent::PointerLeave => (Idle, None),
        InputEvent::TouchStart(contacts) | InputEvent::TouchEnd(contacts) => {
            (seed_touch(contacts, transform), None)
        }
        InputEvent::TouchMove(contacts) => match (contacts.as_slice(), mode) {
            ([only], Dragging { origin }) => (
                mode,
                Some(Mutation::TranslateTo(Point::new(
                    only.x - origin.x,
                    only.y - origin.y,
                ))),
            ),
            ([a, b], Pinching { baseline }) => {
                let current = a.distance_to(*b);
                let mutation = (baseline > 0.0).then(|| Mutation::ZoomFactor(current / baseline));
                (Pinching { baseline: current }, mutation)
            }
            // count changed without a start/end event: reseed, apply nothing this frame
            ([_], _) | ([_, _], _) => (seed_touch(contacts, transform), None),
            _ => (mode, None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::transform::Size;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn transform() -> Transform {
        Transform::new(Size::new(1000.0, 500.0), Size::new(500.0, 500.0))
    }

    fn pair(distance: f64) -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(distance, 0.0)]
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::PointerDown(Point::new(100.0, 100.0)), &mut t);
        assert!(g.is_dragging());
        assert!(g.handle(&InputEvent::PointerMove(Point::new(150.0, 120.0)), &mut t));
        assert_eq!(t.translation(), Point::new(50.0, 20.0));
    }

    #[test]
    fn drag_resumes_from_current_translation() {
        let mut t = transform();
        t.set_translation(30.0, -10.0);
        let mut g = GestureController::new();
        g.handle(&InputEvent::PointerDown(Point::new(0.0, 0.0)), &mut t);
        g.handle(&InputEvent::PointerMove(Point::new(5.0, 5.0)), &mut t);
        assert_eq!(t.translation(), Point::new(35.0, -5.0));
    }

    #[test]
    fn release_and_leave_stop_dragging() {
        let mut t = transform();
        let mut g = GestureController::new();
        for end in [InputEvent::PointerUp, InputEvent::PointerLeave] {
            g.handle(&InputEvent::PointerDown(Point::new(10.0, 10.0)), &mut t);
            g.handle(&end, &mut t);
            assert_eq!(g.mode(), GestureMode::Idle);
            assert!(!g.handle(&InputEvent::PointerMove(Point::new(90.0, 90.0)), &mut t));
        }
        assert_eq!(t.translation(), Point::default());
    }

    #[test]
    fn wheel_up_zooms_in() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::Wheel { delta_y: -100.0 }, &mut t);
        assert!(approx_eq(t.scale(), 1.1));
        g.handle(&InputEvent::Wheel { delta_y: 300.0 }, &mut t);
        assert!(approx_eq(t.scale(), 0.8));
    }

    #[test]
    fn wheel_clamps_at_max() {
        let mut t = transform();
        t.apply_zoom_delta(4.95);
        let mut g = GestureController::new();
        g.handle(&InputEvent::Wheel { delta_y: -100.0 }, &mut t);
        assert_eq!(t.scale(), 6.0);
    }

    #[test]
    fn double_activate_resets() {
        let mut t = transform();
        t.apply_zoom_delta(2.0);
        t.set_translation(40.0, 40.0);
        let mut g = GestureController::new();
        g.handle(&InputEvent::DoubleActivate, &mut t);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Point::default());
    }

    #[test]
    fn pinch_is_incremental() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(pair(100.0)), &mut t);
        g.handle(&InputEvent::TouchMove(pair(150.0)), &mut t);
        g.handle(&InputEvent::TouchMove(pair(150.0)), &mut t);
        assert!(approx_eq(t.scale(), 1.5));
        assert_eq!(g.mode(), GestureMode::Pinching { baseline: 150.0 });
    }

    #[test]
    fn pinch_zoom_is_clamped() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(pair(10.0)), &mut t);
        g.handle(&InputEvent::TouchMove(pair(1000.0)), &mut t);
        assert_eq!(t.scale(), 6.0);
    }

    #[test]
    fn single_finger_pans() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(vec![Point::new(20.0, 20.0)]), &mut t);
        g.handle(&InputEvent::TouchMove(vec![Point::new(35.0, 5.0)]), &mut t);
        assert_eq!(t.translation(), Point::new(15.0, -15.0));
    }

    #[test]
    fn lifting_a_finger_switches_to_fresh_pan() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(pair(100.0)), &mut t);
        g.handle(&InputEvent::TouchMove(pair(200.0)), &mut t);
        assert!(approx_eq(t.scale(), 2.0));

        g.handle(&InputEvent::TouchEnd(vec![Point::new(200.0, 0.0)]), &mut t);
        g.handle(&InputEvent::TouchMove(vec![Point::new(210.0, 30.0)]), &mut t);
        assert!(approx_eq(t.scale(), 2.0));
        assert_eq!(t.translation(), Point::new(10.0, 30.0));
    }

    #[test]
    fn count_change_inside_move_reseeds_without_jump() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(pair(100.0)), &mut t);
        assert!(!g.handle(&InputEvent::TouchMove(vec![Point::new(80.0, 80.0)]), &mut t));
        assert_eq!(t.translation(), Point::default());
        g.handle(&InputEvent::TouchMove(vec![Point::new(90.0, 70.0)]), &mut t);
        assert_eq!(t.translation(), Point::new(10.0, -10.0));

        // second finger lands mid-move: new baseline, no zoom yet
        assert!(!g.handle(&InputEvent::TouchMove(pair(50.0)), &mut t));
        assert_eq!(t.scale(), 1.0);
        g.handle(&InputEvent::TouchMove(pair(100.0)), &mut t);
        assert!(approx_eq(t.scale(), 2.0));
    }

    #[test]
    fn all_fingers_up_goes_idle() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(pair(100.0)), &mut t);
        g.handle(&InputEvent::TouchEnd(Vec::new()), &mut t);
        assert_eq!(g.mode(), GestureMode::Idle);
    }

    #[test]
    fn zero_baseline_never_divides() {
        let mut t = transform();
        let mut g = GestureController::new();
        g.handle(&InputEvent::TouchStart(pair(0.0)), &mut t);
        assert!(!g.handle(&InputEvent::TouchMove(pair(40.0)), &mut t));
        assert_eq!(t.scale(), 1.0);
        g.handle(&InputEvent::TouchMove(pair(80.0)), &mut t);
        assert!(approx_eq(t.scale(), 2.0));
    }
}
