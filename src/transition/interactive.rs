use std::cell::RefCell;
use std::rc::Rc;

/// Lifecycle of a percent-driven transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractivePhase {
    /// Progress follows gesture updates.
    Updating,
    /// The gesture committed; progress animates to completion.
    Finishing,
    /// The gesture bailed out; progress animates back to the start.
    Cancelling,
}

#[derive(Debug)]
struct PercentDriven {
    fraction: f32,
    phase: InteractivePhase,
}

/// A percent-driven interactive transition.
///
/// Created by the gesture bridge when a drag begins and handed to the
/// dismissal animator through the coordinator. The gesture side calls
/// [`update`](Self::update) / [`finish`](Self::finish) /
/// [`cancel`](Self::cancel); the animator reads [`fraction`](Self::fraction)
/// and [`phase`](Self::phase) each tick. Handles are cheap clones of the same
/// underlying state; everything runs on the UI thread.
#[derive(Clone, Debug)]
pub struct InteractiveTransition {
    inner: Rc<RefCell<PercentDriven>>,
}

impl InteractiveTransition {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(PercentDriven {
                fraction: 0.0,
                phase: InteractivePhase::Updating,
            })),
        }
    }

    /// Forward gesture progress. Clamped to `[0, 1]`; ignored once the
    /// transition is finishing or cancelling.
    pub fn update(&self, percent: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == InteractivePhase::Updating {
            inner.fraction = percent.clamp(0.0, 1.0);
        }
    }

    /// Commit: animate the remaining distance to completion.
    pub fn finish(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == InteractivePhase::Updating {
            inner.phase = InteractivePhase::Finishing;
        }
    }

    /// Bail out: animate back to the starting state.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == InteractivePhase::Updating {
            inner.phase = InteractivePhase::Cancelling;
        }
    }

    pub fn fraction(&self) -> f32 {
        self.inner.borrow().fraction
    }

    pub fn phase(&self) -> InteractivePhase {
        self.inner.borrow().phase
    }

    /// Used by the animator while finishing or cancelling.
    pub(crate) fn set_fraction(&self, fraction: f32) {
        self.inner.borrow_mut().fraction = fraction.clamp(0.0, 1.0);
    }
}

impl Default for InteractiveTransition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_clamps() {
        let transition = InteractiveTransition::new();
        transition.update(1.7);
        assert_eq!(transition.fraction(), 1.0);
        transition.update(-0.3);
        assert_eq!(transition.fraction(), 0.0);
    }

    #[test]
    fn test_updates_ignored_after_finish() {
        let transition = InteractiveTransition::new();
        transition.update(0.6);
        transition.finish();
        transition.update(0.1);
        assert_eq!(transition.fraction(), 0.6);
        assert_eq!(transition.phase(), InteractivePhase::Finishing);
    }

    #[test]
    fn test_terminal_phase_is_sticky() {
        let transition = InteractiveTransition::new();
        transition.cancel();
        transition.finish();
        assert_eq!(transition.phase(), InteractivePhase::Cancelling);
    }

    #[test]
    fn test_clones_share_state() {
        let a = InteractiveTransition::new();
        let b = a.clone();
        a.update(0.4);
        assert_eq!(b.fraction(), 0.4);
    }
}
