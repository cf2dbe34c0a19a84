//! Gesture-to-progress bridge: turns a continuous pan into percent-driven
//! dismissal progress, with the commit-or-cancel decision at release.

use std::rc::Rc;

use crate::config::Direction;
use crate::coordinator::InteractionRelay;
use crate::geometry::{Point, Size};
use crate::transition::InteractiveTransition;

/// Recognizer-level lifecycle of a pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One pan recognizer callback from the host toolkit.
#[derive(Debug, Clone, Copy)]
pub struct PanGesture {
    pub phase: PanPhase,
    /// Total translation since the pan began, in the tracked view's
    /// coordinates.
    pub translation: Point,
    /// Current velocity in points per second.
    pub velocity: Point,
}

/// Bridge state for the lifetime of one drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Tracking {
        percent: f32,
        /// Axis velocity component when tracking started.
        start_velocity: f32,
    },
    Finishing,
    Cancelling,
}

/// Converts pan gestures on the presented screen into an interactive
/// dismissal.
///
/// On `Began` it creates a fresh [`InteractiveTransition`], announces it
/// through the [`InteractionRelay`] (so the coordinator can hand it to the
/// toolkit's dismissal hook) and invokes the host's dismissal request. From
/// then on translation is converted to percent per direction and forwarded.
/// The handle is dropped the moment the gesture concludes, so a stale
/// transition can never be reused by a later dismissal.
pub struct DismissalPanBridge {
    direction: Direction,
    relay: InteractionRelay,
    request_dismissal: Rc<dyn Fn()>,
    transition: Option<InteractiveTransition>,
    state: GestureState,
}

impl DismissalPanBridge {
    pub fn new(direction: Direction, relay: InteractionRelay, request_dismissal: Rc<dyn Fn()>) -> Self {
        Self {
            direction,
            relay,
            request_dismissal,
            transition: None,
            state: GestureState::Idle,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Drag progress toward dismissal, computed against the tracked view's
    /// size. Positive when moving toward the exit edge.
    fn percent(&self, translation: Point, tracked: Size) -> f32 {
        match self.direction {
            Direction::Left => -translation.x / tracked.width,
            Direction::Right => translation.x / tracked.width,
            Direction::Top => -translation.y / tracked.height,
            Direction::Bottom => translation.y / tracked.height,
        }
    }

    fn axis_velocity(&self, velocity: Point) -> f32 {
        if self.direction.is_horizontal() {
            velocity.x
        } else {
            velocity.y
        }
    }

    /// Feed one gesture callback. `tracked` is the current size of the
    /// presented screen the pan is attached to.
    pub fn handle(&mut self, gesture: &PanGesture, tracked: Size) {
        match gesture.phase {
            PanPhase::Began => {
                let transition = InteractiveTransition::new();
                self.relay.transition_started(transition.clone());
                self.transition = Some(transition);
                self.state = GestureState::Tracking {
                    percent: 0.0,
                    start_velocity: self.axis_velocity(gesture.velocity),
                };
                // The toolkit will come back through the coordinator for the
                // interactive transitioner we just registered.
                (self.request_dismissal)();
            }
            PanPhase::Changed => {
                let Some(transition) = &self.transition else {
                    return;
                };
                let percent = self.percent(gesture.translation, tracked);
                transition.update(percent);
                if let GestureState::Tracking { percent: p, .. } = &mut self.state {
                    *p = percent;
                }
            }
            PanPhase::Ended => {
                let Some(transition) = self.transition.take() else {
                    return;
                };
                let percent = self.percent(gesture.translation, tracked);
                if should_commit(self.direction, percent, gesture.velocity) {
                    log::debug!("pan dismissal committed at {:.2}", percent);
                    transition.finish();
                    self.state = GestureState::Finishing;
                } else {
                    log::debug!("pan dismissal cancelled at {:.2}", percent);
                    transition.cancel();
                    self.state = GestureState::Cancelling;
                }
                self.relay.transition_ended();
            }
            PanPhase::Cancelled => {
                let Some(transition) = self.transition.take() else {
                    return;
                };
                transition.cancel();
                self.state = GestureState::Cancelling;
                self.relay.transition_ended();
            }
        }
    }
}

/// Commit law: commit when past the halfway point on a plain release, or
/// whenever the release velocity points toward the exit edge (negative for
/// left/top, positive for right/bottom) regardless of distance.
pub fn should_commit(direction: Direction, percent: f32, velocity: Point) -> bool {
    let axis = if direction.is_horizontal() {
        velocity.x
    } else {
        velocity.y
    };
    let forward = match direction {
        Direction::Left | Direction::Top => axis < 0.0,
        Direction::Right | Direction::Bottom => axis > 0.0,
    };
    (percent > 0.5 && axis == 0.0) || forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::InteractivePhase;

    fn bridge(direction: Direction) -> (DismissalPanBridge, InteractionRelay, Rc<std::cell::Cell<u32>>) {
        let relay = InteractionRelay::default();
        let dismissals = Rc::new(std::cell::Cell::new(0));
        let counter = dismissals.clone();
        let bridge = DismissalPanBridge::new(
            direction,
            relay.clone(),
            Rc::new(move || counter.set(counter.get() + 1)),
        );
        (bridge, relay, dismissals)
    }

    fn pan(phase: PanPhase, translation: Point, velocity: Point) -> PanGesture {
        PanGesture {
            phase,
            translation,
            velocity,
        }
    }

    const TRACKED: Size = Size::new(400.0, 560.0);

    #[test]
    fn test_began_registers_and_requests_dismissal() {
        let (mut bridge, relay, dismissals) = bridge(Direction::Bottom);
        bridge.handle(&pan(PanPhase::Began, Point::zero(), Point::zero()), TRACKED);
        assert!(relay.current().is_some());
        assert_eq!(dismissals.get(), 1);
        assert!(matches!(bridge.state(), GestureState::Tracking { .. }));
    }

    #[test]
    fn test_changed_forwards_percent_per_direction() {
        let (mut bridge, relay, _) = bridge(Direction::Bottom);
        bridge.handle(&pan(PanPhase::Began, Point::zero(), Point::zero()), TRACKED);
        bridge.handle(
            &pan(PanPhase::Changed, Point::new(0.0, 280.0), Point::zero()),
            TRACKED,
        );
        let transition = relay.current().unwrap();
        assert!((transition.fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_left_direction_negates_translation() {
        let (mut bridge, relay, _) = bridge(Direction::Left);
        bridge.handle(&pan(PanPhase::Began, Point::zero(), Point::zero()), TRACKED);
        bridge.handle(
            &pan(PanPhase::Changed, Point::new(-100.0, 0.0), Point::zero()),
            TRACKED,
        );
        let transition = relay.current().unwrap();
        assert!((transition.fraction() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_commit_law_distance() {
        // Past halfway with a dead stop: commit.
        assert!(should_commit(Direction::Bottom, 0.6, Point::zero()));
        // Short of halfway with a dead stop: cancel.
        assert!(!should_commit(Direction::Bottom, 0.3, Point::zero()));
    }

    #[test]
    fn test_commit_law_velocity_override() {
        // Barely moved but flung toward the right edge: commit.
        assert!(should_commit(Direction::Right, 0.2, Point::new(120.0, 0.0)));
        // Flung back toward presented: cancel even past halfway.
        assert!(!should_commit(Direction::Right, 0.8, Point::new(-120.0, 0.0)));
        assert!(should_commit(Direction::Top, 0.1, Point::new(0.0, -50.0)));
        assert!(!should_commit(Direction::Left, 0.7, Point::new(30.0, 0.0)));
    }

    #[test]
    fn test_ended_commits_and_clears_handle() {
        let (mut bridge, relay, _) = bridge(Direction::Bottom);
        bridge.handle(&pan(PanPhase::Began, Point::zero(), Point::zero()), TRACKED);
        bridge.handle(
            &pan(PanPhase::Changed, Point::new(0.0, 340.0), Point::zero()),
            TRACKED,
        );
        let transition = relay.current().unwrap();
        bridge.handle(
            &pan(PanPhase::Ended, Point::new(0.0, 340.0), Point::zero()),
            TRACKED,
        );
        assert_eq!(transition.phase(), InteractivePhase::Finishing);
        assert_eq!(bridge.state(), GestureState::Finishing);
        // Relay slot is cleared so a later dismissal cannot reuse the handle.
        assert!(relay.current().is_none());
    }

    #[test]
    fn test_recognizer_cancel_cancels_transition() {
        let (mut bridge, relay, _) = bridge(Direction::Bottom);
        bridge.handle(&pan(PanPhase::Began, Point::zero(), Point::zero()), TRACKED);
        let transition = relay.current().unwrap();
        bridge.handle(&pan(PanPhase::Cancelled, Point::zero(), Point::zero()), TRACKED);
        assert_eq!(transition.phase(), InteractivePhase::Cancelling);
        assert!(relay.current().is_none());
    }

    #[test]
    fn test_events_without_began_are_ignored() {
        let (mut bridge, relay, dismissals) = bridge(Direction::Bottom);
        bridge.handle(
            &pan(PanPhase::Changed, Point::new(0.0, 100.0), Point::zero()),
            TRACKED,
        );
        bridge.handle(&pan(PanPhase::Ended, Point::zero(), Point::zero()), TRACKED);
        assert!(relay.current().is_none());
        assert_eq!(dismissals.get(), 0);
        assert_eq!(bridge.state(), GestureState::Idle);
    }
}
