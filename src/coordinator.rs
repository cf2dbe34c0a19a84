//! The public-facing coordinator an application configures and hands to the
//! host toolkit's transitioning hooks.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AdaptationStyle, Direction, Position, RelativeSize, SizeClass, VisualEffect};
use crate::controller::PresentationController;
use crate::geometry::{Point, Rect};
use crate::transition::{
    FrameBehavior, InteractiveTransition, TransitionAnimator, TransitionPhase,
};
use crate::animation::AnimationConfig;

/// Which of the two pop-up animator revisions drives the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopUpAnimation {
    /// Keep the presented frame fixed and fade opacity over half a second.
    #[default]
    Fade,
    /// Slide up from the bottom edge over a quarter second.
    Move,
}

/// The presentation flavor and its geometry configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationStyle {
    /// Edge-attached panel sliding in from `direction`.
    SlideIn {
        direction: Direction,
        relative_size: RelativeSize,
    },
    /// Card floating over the parent at `position`.
    PopUp {
        position: Position,
        animation: PopUpAnimation,
    },
}

/// Relay carrying the live interactive transition from the presentation
/// controller to the coordinator.
///
/// The controller reports `transition_started` when a drag begins and
/// `transition_ended` when it concludes; the coordinator only ever reads the
/// slot when the toolkit asks for a dismissal transitioner. Everything runs
/// on the UI thread, so a plain shared cell suffices.
#[derive(Clone, Default)]
pub struct InteractionRelay {
    slot: Rc<RefCell<Option<InteractiveTransition>>>,
}

impl InteractionRelay {
    pub fn transition_started(&self, transition: InteractiveTransition) {
        *self.slot.borrow_mut() = Some(transition);
    }

    pub fn transition_ended(&self) {
        *self.slot.borrow_mut() = None;
    }

    pub fn current(&self) -> Option<InteractiveTransition> {
        self.slot.borrow().clone()
    }
}

/// Factory and policy object for one presentation configuration.
///
/// The host configures `style`, `visual_effect` and the adaptation flag, then
/// asks for the pieces of a presentation request: a presentation controller,
/// a presentation- and a dismissal-phase animator, and (only while a drag is
/// in flight) the interactive transitioner for dismissal. Animators are
/// created fresh per request and discarded after their single run; the
/// coordinator owns neither them nor the controller.
pub struct PresentationCoordinator {
    pub style: PresentationStyle,
    pub visual_effect: VisualEffect,
    /// Slide-in only: fall back to a full-screen presentation when the
    /// vertical size class is compact.
    pub disable_compact_vertical: bool,
    relay: InteractionRelay,
}

impl PresentationCoordinator {
    pub fn new(style: PresentationStyle, visual_effect: VisualEffect) -> Self {
        Self {
            style,
            visual_effect,
            disable_compact_vertical: false,
            relay: InteractionRelay::default(),
        }
    }

    /// Slide-in defaults: full-width bottom sheet at 70% height behind a
    /// half-dimmed backdrop.
    pub fn slide_in() -> Self {
        Self::new(
            PresentationStyle::SlideIn {
                direction: Direction::Bottom,
                relative_size: RelativeSize::default(),
            },
            VisualEffect::Dimming {
                alpha: crate::config::UnitInterval::HALF,
            },
        )
    }

    /// Pop-up defaults: a small explicit frame behind a light blur.
    pub fn pop_up() -> Self {
        Self::new(
            PresentationStyle::PopUp {
                position: Position::Frame(Rect::new(50.0, 20.0, 50.0, 50.0)),
                animation: PopUpAnimation::default(),
            },
            VisualEffect::blur(crate::config::BlurStyle::Light),
        )
    }

    /// Build the presentation controller for one presentation request.
    /// `request_dismissal` is invoked when the backdrop is tapped or a
    /// dismissal drag begins; the host should start its dismissal flow in
    /// response.
    pub fn presentation_controller(
        &self,
        request_dismissal: impl Fn() + 'static,
    ) -> PresentationController {
        PresentationController::new(
            self.style.clone(),
            self.visual_effect,
            self.relay.clone(),
            Rc::new(request_dismissal),
        )
    }

    pub fn presentation_animator(&self) -> TransitionAnimator {
        self.animator(TransitionPhase::Presentation)
    }

    pub fn dismissal_animator(&self) -> TransitionAnimator {
        self.animator(TransitionPhase::Dismissal)
    }

    fn animator(&self, phase: TransitionPhase) -> TransitionAnimator {
        let (behavior, config) = match &self.style {
            PresentationStyle::SlideIn { direction, .. } => {
                (FrameBehavior::SlideFrom(*direction), AnimationConfig::slide())
            }
            PresentationStyle::PopUp { animation, .. } => match animation {
                PopUpAnimation::Fade => (FrameBehavior::Fade, AnimationConfig::fade()),
                PopUpAnimation::Move => (
                    FrameBehavior::SlideFrom(Direction::Bottom),
                    AnimationConfig::slide(),
                ),
            },
        };
        TransitionAnimator::new(phase, behavior, config)
    }

    /// The interactive transitioner for the dismissal currently being driven
    /// by a gesture, if any. Presentation is never interactive.
    pub fn interaction_controller_for_dismissal(&self) -> Option<InteractiveTransition> {
        self.relay.current()
    }

    /// Adaptation decision for the current traits: slide-in presentations
    /// opt into full-screen under a compact vertical size class when the
    /// flag is set; everything else keeps the custom presentation.
    pub fn adaptive_style(&self, vertical: SizeClass) -> AdaptationStyle {
        let slide_in = matches!(self.style, PresentationStyle::SlideIn { .. });
        if slide_in && vertical == SizeClass::Compact && self.disable_compact_vertical {
            log::trace!("adapting to full screen for compact vertical size class");
            AdaptationStyle::OverFullScreen
        } else {
            AdaptationStyle::None
        }
    }
}

impl PresentationStyle {
    /// Convenience for an explicitly positioned pop-up card.
    pub fn pop_up_at(center: Point, aspect_ratio: f32, relative_size: crate::config::UnitInterval) -> Self {
        PresentationStyle::PopUp {
            position: Position::At {
                center,
                aspect_ratio,
                relative_size,
            },
            animation: PopUpAnimation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animators_match_style() {
        let coordinator = PresentationCoordinator::slide_in();
        let presentation = coordinator.presentation_animator();
        let dismissal = coordinator.dismissal_animator();
        assert_eq!(presentation.phase(), TransitionPhase::Presentation);
        assert_eq!(dismissal.phase(), TransitionPhase::Dismissal);
        assert_eq!(presentation.duration(), AnimationConfig::SLIDE_DURATION);
    }

    #[test]
    fn test_pop_up_fade_is_default_policy() {
        let coordinator = PresentationCoordinator::pop_up();
        let animator = coordinator.presentation_animator();
        assert_eq!(animator.duration(), AnimationConfig::FADE_DURATION);
    }

    #[test]
    fn test_pop_up_move_policy_uses_slide_duration() {
        let mut coordinator = PresentationCoordinator::pop_up();
        if let PresentationStyle::PopUp { animation, .. } = &mut coordinator.style {
            *animation = PopUpAnimation::Move;
        }
        let animator = coordinator.dismissal_animator();
        assert_eq!(animator.duration(), AnimationConfig::SLIDE_DURATION);
    }

    #[test]
    fn test_no_interactive_transitioner_without_gesture() {
        let coordinator = PresentationCoordinator::slide_in();
        assert!(coordinator.interaction_controller_for_dismissal().is_none());
    }

    #[test]
    fn test_relay_round_trip() {
        let relay = InteractionRelay::default();
        let transition = InteractiveTransition::new();
        relay.transition_started(transition);
        assert!(relay.current().is_some());
        relay.transition_ended();
        assert!(relay.current().is_none());
    }

    #[test]
    fn test_adaptive_style_compact_opt_out() {
        let mut coordinator = PresentationCoordinator::slide_in();
        assert_eq!(
            coordinator.adaptive_style(SizeClass::Compact),
            AdaptationStyle::None
        );
        coordinator.disable_compact_vertical = true;
        assert_eq!(
            coordinator.adaptive_style(SizeClass::Compact),
            AdaptationStyle::OverFullScreen
        );
        assert_eq!(
            coordinator.adaptive_style(SizeClass::Regular),
            AdaptationStyle::None
        );
    }

    #[test]
    fn test_pop_up_never_adapts() {
        let mut coordinator = PresentationCoordinator::pop_up();
        coordinator.disable_compact_vertical = true;
        assert_eq!(
            coordinator.adaptive_style(SizeClass::Compact),
            AdaptationStyle::None
        );
    }
}
