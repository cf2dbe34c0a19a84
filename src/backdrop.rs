//! Backdrop rendered behind presented content: a dimming overlay or a blur
//! overlay.
//!
//! Exactly one variant is materialized per presentation, chosen by the
//! configured [`VisualEffect`] at construction time. There is no accessor for
//! the other variant, so asking for the wrong backdrop kind is impossible by
//! construction rather than a runtime fault.
//!
//! The dimming variant fades its opacity between 0 and the configured alpha.
//! When a coordinated transition is running, the fade is driven by the same
//! progress value as the frame animation (see
//! [`Backdrop::set_transition_progress`]); without coordination the terminal
//! opacity is applied instantly. Blur intensity is never animated.

use crate::config::{BlurStyle, VisualEffect};

/// Dimming overlay state.
#[derive(Debug, Clone)]
pub struct DimmingBackdrop {
    /// Opacity when fully shown.
    alpha: f32,
    /// Current opacity.
    opacity: f32,
    /// Fade endpoints while a coordinated transition is in flight.
    fade: Option<(f32, f32)>,
}

impl DimmingBackdrop {
    fn new(alpha: f32) -> Self {
        Self {
            alpha,
            opacity: 0.0,
            fade: None,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Blur overlay state. The blur material is fixed; nothing animates.
#[derive(Debug, Clone)]
pub struct BlurBackdrop {
    style: BlurStyle,
}

impl BlurBackdrop {
    pub fn style(&self) -> BlurStyle {
        self.style
    }
}

/// Which overlay variant a backdrop renders.
#[derive(Debug, Clone)]
pub enum BackdropKind {
    Dimming(DimmingBackdrop),
    Blur(BlurBackdrop),
}

/// The single backdrop owned by one live presentation.
#[derive(Debug, Clone)]
pub struct Backdrop {
    kind: BackdropKind,
    attached: bool,
}

impl Backdrop {
    /// Materialize the backdrop variant selected by the visual effect.
    pub fn new(effect: &VisualEffect) -> Self {
        let kind = match effect {
            VisualEffect::Dimming { alpha } => {
                BackdropKind::Dimming(DimmingBackdrop::new(alpha.value()))
            }
            VisualEffect::Blur { style } => BackdropKind::Blur(BlurBackdrop { style: *style }),
        };
        Self {
            kind,
            attached: false,
        }
    }

    pub fn kind(&self) -> &BackdropKind {
        &self.kind
    }

    /// Insert the backdrop into the presentation container, behind the
    /// presented content.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Remove the backdrop from its container.
    pub fn detach(&mut self) {
        self.attached = false;
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            dimming.opacity = 0.0;
            dimming.fade = None;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Apply the shown state instantly (no coordinated transition available).
    pub fn show(&mut self) {
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            dimming.fade = None;
            dimming.opacity = dimming.alpha;
        }
    }

    /// Apply the hidden state instantly. Idempotent.
    pub fn hide(&mut self) {
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            dimming.fade = None;
            dimming.opacity = 0.0;
        }
    }

    /// Arm a fade toward the shown state, to be driven by transition
    /// progress.
    pub fn show_alongside(&mut self) {
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            dimming.fade = Some((dimming.opacity, dimming.alpha));
        }
    }

    /// Arm a fade toward the hidden state, to be driven by transition
    /// progress.
    pub fn hide_alongside(&mut self) {
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            dimming.fade = Some((dimming.opacity, 0.0));
        }
    }

    /// Drive an armed fade with the owning transition's progress in `[0, 1]`.
    /// No-op when no fade is armed or for the blur variant.
    pub fn set_transition_progress(&mut self, progress: f32) {
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            if let Some((from, to)) = dimming.fade {
                dimming.opacity = from + (to - from) * progress.clamp(0.0, 1.0);
            }
        }
    }

    /// Settle an armed fade at its destination (`completed`) or roll it back
    /// to where it started (`!completed`).
    pub fn end_fade(&mut self, completed: bool) {
        if let BackdropKind::Dimming(dimming) = &mut self.kind {
            if let Some((from, to)) = dimming.fade.take() {
                dimming.opacity = if completed { to } else { from };
            }
        }
    }

    /// Current opacity. The blur variant reports 1.0 while attached since its
    /// material is always fully applied.
    pub fn opacity(&self) -> f32 {
        match &self.kind {
            BackdropKind::Dimming(dimming) => dimming.opacity,
            BackdropKind::Blur(_) => {
                if self.attached {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
