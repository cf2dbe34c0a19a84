//! Transition execution: the one-shot frame animator and the percent-driven
//! interactive transition it can be handed over to.

mod animator;
mod interactive;

pub use animator::TransitionAnimator;
pub use interactive::{InteractivePhase, InteractiveTransition};

use crate::config::Direction;
use crate::geometry::{Rect, Size};

/// Which of the two participating screens the animator repositions, and what
/// the initial/final frame roles mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The "to" screen moves from its dismissed frame to its presented frame.
    Presentation,
    /// The "from" screen moves from its presented frame to its dismissed
    /// frame.
    Dismissal,
}

/// How the transitioning screen's geometry changes between the dismissed and
/// presented states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBehavior {
    /// Slide between the presented frame and a frame pushed fully past the
    /// given edge.
    SlideFrom(Direction),
    /// Keep the presented frame fixed and fade opacity between 0 and 1
    /// instead.
    Fade,
}

/// Per-transition view of the host toolkit.
///
/// One context instance accompanies one animator run. The host implements
/// this over its view hierarchy; tests implement it over plain structs. The
/// animator calls [`complete_transition`](Self::complete_transition) exactly
/// once, after which it never touches the context again.
pub trait HostTransitionContext {
    /// Size of the presentation container.
    fn container_size(&self) -> Size;

    /// Target frame of the presented screen, as computed by the presentation
    /// controller for the current container size.
    fn presented_frame(&self) -> Rect;

    /// Move the transitioning screen.
    fn set_frame(&mut self, frame: Rect);

    /// Set the transitioning screen's opacity (used by fade-style reveals).
    fn set_opacity(&mut self, opacity: f32);

    /// Insert the presented screen into the container. Called at the start of
    /// a presentation run.
    fn add_to_container(&mut self);

    /// Remove the presented screen's visual representation. Called only when
    /// a dismissal finishes uncancelled.
    fn remove_from_container(&mut self);

    /// Finalize or roll back host view-hierarchy state.
    fn complete_transition(&mut self, finished: bool);
}
