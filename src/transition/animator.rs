use std::time::Duration;

use super::{
    FrameBehavior, HostTransitionContext, InteractivePhase, InteractiveTransition, TransitionPhase,
};
use crate::animation::{Animatable, AnimationConfig, SpringState, TimingFunction};
use crate::frame;
use crate::geometry::Rect;

enum State {
    Inactive,
    Running {
        /// Real time since `begin`, seconds.
        elapsed: f32,
        /// Current progress from initial (0.0) toward final (1.0) frame.
        fraction: f32,
        initial: Rect,
        target: Rect,
        spring: Option<SpringState>,
    },
    Completed {
        finished: bool,
    },
}

/// One-shot transition animator.
///
/// Runs a single move between the dismissed and presented frames, in the
/// direction given by its [`TransitionPhase`]. The state machine is
/// `Inactive -> Running -> Completed{finished}`; an instance is discarded
/// after its run.
///
/// The host starts the run with [`begin`](Self::begin) and then ticks it with
/// [`advance`](Self::advance) until it reports completion. When an
/// [`InteractiveTransition`] is attached, progress follows the gesture
/// instead of the clock: raw fraction while the gesture updates, then a
/// constant-rate run-out to 1.0 on commit or back to 0.0 on cancel. A
/// cancelled run rolls the screen back to its starting frame and skips the
/// dismissal's removal side effect.
pub struct TransitionAnimator {
    phase: TransitionPhase,
    behavior: FrameBehavior,
    config: AnimationConfig,
    interactive: Option<InteractiveTransition>,
    state: State,
}

impl TransitionAnimator {
    pub fn new(phase: TransitionPhase, behavior: FrameBehavior, config: AnimationConfig) -> Self {
        Self {
            phase,
            behavior,
            config,
            interactive: None,
            state: State::Inactive,
        }
    }

    /// Total duration of the timed portion of this transition.
    pub fn duration(&self) -> Duration {
        self.config.duration
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Let a percent-driven transition drive progress instead of the clock.
    /// Supported for dismissal only; must be attached before [`begin`].
    pub fn drive_interactively(&mut self, handle: InteractiveTransition) {
        debug_assert!(matches!(self.state, State::Inactive));
        self.interactive = Some(handle);
    }

    /// Start the run: insert the presented screen on presentation, derive the
    /// initial and final frames for this phase, and apply the initial state.
    ///
    /// Each animator runs exactly once; repeated calls are ignored.
    pub fn begin(&mut self, ctx: &mut dyn HostTransitionContext) {
        if !matches!(self.state, State::Inactive) {
            log::warn!("transition animator started twice; ignoring");
            return;
        }

        if self.phase == TransitionPhase::Presentation {
            ctx.add_to_container();
        }

        let presented = ctx.presented_frame();
        let dismissed = match self.behavior {
            FrameBehavior::SlideFrom(direction) => {
                frame::dismissed_frame(presented, ctx.container_size(), direction)
            }
            // Fade-style reveals keep the frame fixed and animate opacity.
            FrameBehavior::Fade => presented,
        };

        let (initial, target) = match self.phase {
            TransitionPhase::Presentation => (dismissed, presented),
            TransitionPhase::Dismissal => (presented, dismissed),
        };

        let spring = match &self.config.timing {
            TimingFunction::Spring(config) if self.interactive.is_none() => {
                Some(SpringState::new(config))
            }
            _ => None,
        };

        log::debug!(
            "transition begin: {:?} {:?} {:?} -> {:?}",
            self.phase,
            self.behavior,
            initial,
            target
        );

        self.state = State::Running {
            elapsed: 0.0,
            fraction: 0.0,
            initial,
            target,
            spring,
        };
        self.apply(0.0, ctx);
    }

    /// Advance the run by `dt`. Returns `true` while still running.
    pub fn advance(&mut self, dt: Duration, ctx: &mut dyn HostTransitionContext) -> bool {
        if !matches!(self.state, State::Running { .. }) {
            return false;
        }

        if let Some(handle) = self.interactive.clone() {
            return self.advance_interactive(&handle, dt, ctx);
        }

        let delay = self.config.delay.as_secs_f32();
        let active = match &mut self.state {
            State::Running { elapsed, .. } => {
                *elapsed += dt.as_secs_f32();
                *elapsed - delay
            }
            _ => return false,
        };
        if active <= 0.0 {
            return true;
        }

        // Springs run on real elapsed time until they settle; everything else
        // maps normalized time through the easing curve.
        let spring_step = match &mut self.state {
            State::Running {
                spring: Some(spring),
                ..
            } => match &self.config.timing {
                TimingFunction::Spring(config) => {
                    let position = spring.step(active, config);
                    Some((position, spring.is_settled(0.001)))
                }
                _ => None,
            },
            _ => None,
        };

        let (fraction, done) = match spring_step {
            Some((position, settled)) => (position, settled),
            None => {
                let duration = self.config.duration.as_secs_f32().max(f32::EPSILON);
                let t = (active / duration).min(1.0);
                (self.config.timing.evaluate(t), t >= 1.0)
            }
        };

        self.store_fraction(fraction);
        if done {
            self.apply(1.0, ctx);
            self.complete(true, ctx);
            false
        } else {
            self.apply(fraction, ctx);
            true
        }
    }

    fn advance_interactive(
        &mut self,
        handle: &InteractiveTransition,
        dt: Duration,
        ctx: &mut dyn HostTransitionContext,
    ) -> bool {
        let duration = self.config.duration.as_secs_f32().max(f32::EPSILON);
        let step = dt.as_secs_f32() / duration;

        match handle.phase() {
            InteractivePhase::Updating => {
                // Gesture progress maps to the frame directly, no easing.
                let fraction = handle.fraction();
                self.store_fraction(fraction);
                self.apply(fraction, ctx);
                true
            }
            InteractivePhase::Finishing => {
                let fraction = (handle.fraction() + step).min(1.0);
                handle.set_fraction(fraction);
                self.store_fraction(fraction);
                if fraction >= 1.0 {
                    self.apply(1.0, ctx);
                    self.complete(true, ctx);
                    false
                } else {
                    self.apply(fraction, ctx);
                    true
                }
            }
            InteractivePhase::Cancelling => {
                let fraction = (handle.fraction() - step).max(0.0);
                handle.set_fraction(fraction);
                self.store_fraction(fraction);
                if fraction <= 0.0 {
                    // Roll back to the starting frame; no removal side
                    // effects for a cancelled dismissal.
                    self.apply(0.0, ctx);
                    self.complete(false, ctx);
                    false
                } else {
                    self.apply(fraction, ctx);
                    true
                }
            }
        }
    }

    fn store_fraction(&mut self, fraction: f32) {
        if let State::Running { fraction: f, .. } = &mut self.state {
            *f = fraction;
        }
    }

    fn apply(&self, fraction: f32, ctx: &mut dyn HostTransitionContext) {
        let State::Running { initial, target, .. } = &self.state else {
            return;
        };
        ctx.set_frame(Rect::lerp(initial, target, fraction));

        if self.behavior == FrameBehavior::Fade {
            let (from, to) = match self.phase {
                TransitionPhase::Presentation => (0.0, 1.0),
                TransitionPhase::Dismissal => (1.0, 0.0),
            };
            ctx.set_opacity(f32::lerp(&from, &to, fraction.clamp(0.0, 1.0)));
        }
    }

    fn complete(&mut self, finished: bool, ctx: &mut dyn HostTransitionContext) {
        if self.phase == TransitionPhase::Dismissal && finished {
            ctx.remove_from_container();
        }
        ctx.complete_transition(finished);
        log::debug!("transition complete: {:?} finished={}", self.phase, finished);
        self.state = State::Completed { finished };
    }

    /// Current progress toward the final frame.
    pub fn fraction(&self) -> f32 {
        match &self.state {
            State::Inactive => 0.0,
            State::Running { fraction, .. } => *fraction,
            State::Completed { finished } => {
                if *finished {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, State::Completed { .. })
    }

    /// Whether the run completed without being cancelled. `None` while the
    /// run is still pending.
    pub fn did_finish(&self) -> Option<bool> {
        match self.state {
            State::Completed { finished } => Some(finished),
            _ => None,
        }
    }
}
