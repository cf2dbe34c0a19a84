//! Headless modal-presentation coordination: slide-in panels and pop-up
//! cards over a host GUI toolkit, with dimming/blur backdrops and
//! gesture-driven interactive dismissal.
//!
//! The crate does not render anything and does not own an event loop. The
//! host toolkit implements [`transition::HostTransitionContext`] over its
//! view hierarchy, forwards layout passes, tap/pan gestures and transition
//! lifecycle calls, and ticks the active animator each frame. In return it
//! gets frame geometry, backdrop state, and a transition state machine that
//! stays consistent through mid-gesture cancellation.
//!
//! ## Typical flow
//!
//! ```ignore
//! let mut coordinator = PresentationCoordinator::slide_in();
//! coordinator.disable_compact_vertical = true;
//!
//! // Host requests presentation:
//! let mut controller = coordinator.presentation_controller(request_dismissal);
//! let mut animator = coordinator.presentation_animator();
//! controller.presentation_will_begin(true);
//! animator.begin(&mut ctx);
//! // each frame until completion:
//! animator.advance(dt, &mut ctx);
//! controller.set_transition_progress(animator.fraction());
//! ```
//!
//! Everything runs on the UI thread; there is no internal threading.

pub mod animation;
pub mod backdrop;
pub mod config;
pub mod controller;
pub mod coordinator;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod transition;

pub mod prelude {
    pub use crate::animation::{AnimationConfig, SpringConfig, TimingFunction};
    pub use crate::backdrop::{Backdrop, BackdropKind};
    pub use crate::config::{
        AdaptationStyle, BlurStyle, Direction, Position, RelativeSize, SizeClass, UnitInterval,
        VisualEffect,
    };
    pub use crate::controller::PresentationController;
    pub use crate::coordinator::{
        InteractionRelay, PopUpAnimation, PresentationCoordinator, PresentationStyle,
    };
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::gesture::{GestureState, PanGesture, PanPhase};
    pub use crate::transition::{
        FrameBehavior, HostTransitionContext, InteractivePhase, InteractiveTransition,
        TransitionAnimator, TransitionPhase,
    };
}
