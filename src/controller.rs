//! Presentation controller: owns the backdrop and gesture handling for one
//! live presentation.

use std::rc::Rc;

use crate::backdrop::Backdrop;
use crate::config::VisualEffect;
use crate::coordinator::{InteractionRelay, PresentationStyle};
use crate::frame;
use crate::geometry::{Rect, Size};
use crate::gesture::{DismissalPanBridge, PanGesture};

/// Controller for a single presented screen.
///
/// Constructed by the coordinator per presentation request. It materializes
/// the configured backdrop variant, wires tap-to-dismiss, and for slide-in
/// presentations carries the pan bridge for interactive dismissal. The host
/// drives it with layout passes and the `will_begin` / `did_end` lifecycle
/// calls of both transition phases.
pub struct PresentationController {
    style: PresentationStyle,
    backdrop: Backdrop,
    pan: Option<DismissalPanBridge>,
    request_dismissal: Rc<dyn Fn()>,
    /// Size of the presented screen from the last layout pass; the pan
    /// bridge measures drag percent against it.
    presented_size: Size,
}

impl PresentationController {
    pub(crate) fn new(
        style: PresentationStyle,
        visual_effect: VisualEffect,
        relay: InteractionRelay,
        request_dismissal: Rc<dyn Fn()>,
    ) -> Self {
        // Pop-ups are tap-to-dismiss only; slide-ins also get the pan bridge.
        let pan = match &style {
            PresentationStyle::SlideIn { direction, .. } => Some(DismissalPanBridge::new(
                *direction,
                relay,
                request_dismissal.clone(),
            )),
            PresentationStyle::PopUp { .. } => None,
        };

        Self {
            style,
            backdrop: Backdrop::new(&visual_effect),
            pan,
            request_dismissal,
            presented_size: Size::zero(),
        }
    }

    /// Target frame for the presented screen in a container of the given
    /// size. Pure; derived fresh from configuration on every call.
    pub fn target_frame(&self, container: Size) -> Rect {
        match &self.style {
            PresentationStyle::SlideIn {
                direction,
                relative_size,
            } => frame::presented_frame(container, *direction, *relative_size),
            PresentationStyle::PopUp { position, .. } => frame::pop_up_frame(container, position),
        }
    }

    /// Called whenever the container re-lays-out (rotation, resize). Returns
    /// the frame the host should apply to the presented screen.
    pub fn container_did_layout(&mut self, container: Size) -> Rect {
        let frame = self.target_frame(container);
        self.presented_size = frame.size();
        frame
    }

    /// Single tap on the backdrop requests dismissal.
    pub fn handle_tap(&self) {
        (self.request_dismissal)();
    }

    /// Pan on the presented screen drives interactive dismissal. No-op for
    /// pop-up presentations.
    pub fn handle_pan(&mut self, gesture: &PanGesture) {
        let tracked = self.presented_size;
        if tracked.is_empty() {
            log::warn!("pan before first layout pass; ignoring");
            return;
        }
        if let Some(pan) = &mut self.pan {
            pan.handle(gesture, tracked);
        }
    }

    /// Presentation is about to run. Attaches the backdrop behind the
    /// presented content; `coordinated` says whether a transition is
    /// animating alongside (when not, the shown state applies instantly).
    pub fn presentation_will_begin(&mut self, coordinated: bool) {
        self.backdrop.attach();
        if coordinated {
            self.backdrop.show_alongside();
        } else {
            self.backdrop.show();
        }
    }

    /// Presentation finished or was interrupted. An incomplete presentation
    /// takes the backdrop down with it.
    pub fn presentation_did_end(&mut self, completed: bool) {
        self.backdrop.end_fade(completed);
        if !completed {
            self.backdrop.detach();
        }
    }

    /// Dismissal is about to run.
    pub fn dismissal_will_begin(&mut self, coordinated: bool) {
        if coordinated {
            self.backdrop.hide_alongside();
        } else {
            self.backdrop.hide();
        }
    }

    /// Dismissal finished or was cancelled. The backdrop leaves only on a
    /// completed dismissal; a cancelled one keeps it in place.
    pub fn dismissal_did_end(&mut self, completed: bool) {
        self.backdrop.end_fade(completed);
        if completed {
            self.backdrop.detach();
        }
    }

    /// Feed the owning transition's progress to the coordinated backdrop
    /// fade.
    pub fn set_transition_progress(&mut self, progress: f32) {
        self.backdrop.set_transition_progress(progress);
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }
}
