//! Presentation configuration values.
//!
//! All fractional values (size proportions, dimming alpha) go through
//! [`UnitInterval`], which rejects out-of-range input at construction instead
//! of clamping it somewhere downstream. A configuration that exists is a
//! configuration that is valid.

use crate::geometry::{Point, Rect};

/// Edge the slide-in content enters from and exits to.
///
/// Fixed for the lifetime of one coordinator configuration; it may be changed
/// between presentations but never mid-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// True when the slide axis is horizontal (left/right edges).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A value validated to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInterval(f32);

impl UnitInterval {
    pub const ZERO: UnitInterval = UnitInterval(0.0);
    pub const HALF: UnitInterval = UnitInterval(0.5);
    pub const ONE: UnitInterval = UnitInterval(1.0);

    /// Returns `None` when `value` is outside `[0, 1]` or not finite.
    pub fn new(value: f32) -> Option<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// The complementary fraction `1 - value`.
    pub fn reversed(&self) -> f32 {
        1.0 - self.0
    }
}

/// Relative size of slide-in content.
///
/// `proportion` is the cross-axis fraction of the container, `length` the
/// along-axis fraction. A bottom sheet with `proportion = 1.0` and
/// `length = 0.7` spans the full width and 70% of the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeSize {
    pub proportion: UnitInterval,
    pub length: UnitInterval,
}

impl RelativeSize {
    /// Along-axis fraction used when only a proportion is given.
    const DEFAULT_LENGTH: f32 = 0.7;

    /// Validates both fractions; `None` when either is outside `[0, 1]`.
    pub fn new(proportion: f32, length: f32) -> Option<Self> {
        Some(Self {
            proportion: UnitInterval::new(proportion)?,
            length: UnitInterval::new(length)?,
        })
    }

    /// A modest panel taking 45% of the cross axis.
    pub fn normal() -> Self {
        Self {
            proportion: UnitInterval(0.45),
            length: UnitInterval(Self::DEFAULT_LENGTH),
        }
    }

    /// A near-full panel taking 90% of the cross axis.
    pub fn full() -> Self {
        Self {
            proportion: UnitInterval(0.9),
            length: UnitInterval(Self::DEFAULT_LENGTH),
        }
    }
}

impl Default for RelativeSize {
    /// Full cross-axis width, 70% along-axis length (bottom-sheet shape).
    fn default() -> Self {
        Self {
            proportion: UnitInterval::ONE,
            length: UnitInterval(Self::DEFAULT_LENGTH),
        }
    }
}

/// Placement of pop-up content. Exactly one variant is active per
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Centered in the container; width is `relative_size` of the container
    /// width, height follows `aspect_ratio` (width / height).
    Middle {
        aspect_ratio: f32,
        relative_size: UnitInterval,
    },
    /// Same sizing as `Middle`, placed around an explicit center point.
    At {
        center: Point,
        aspect_ratio: f32,
        relative_size: UnitInterval,
    },
    /// An absolute rectangle, used verbatim regardless of container size.
    Frame(Rect),
}

/// Blur material for the blur backdrop variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurStyle {
    ExtraLight,
    Light,
    Dark,
}

/// Which backdrop is rendered behind the presented content.
///
/// The backdrop is materialized from this value exactly once per
/// presentation; the other variant is never instantiated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualEffect {
    Dimming { alpha: UnitInterval },
    Blur { style: BlurStyle },
}

impl VisualEffect {
    /// Dimming backdrop; `None` when `alpha` is outside `[0, 1]`.
    pub fn dimming(alpha: f32) -> Option<Self> {
        Some(VisualEffect::Dimming {
            alpha: UnitInterval::new(alpha)?,
        })
    }

    pub fn blur(style: BlurStyle) -> Self {
        VisualEffect::Blur { style }
    }
}

/// Host toolkit trait describing available space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Regular,
    Compact,
}

/// How a presentation adapts to the current size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptationStyle {
    /// Keep the custom presentation as configured.
    None,
    /// Cover the full container instead.
    OverFullScreen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_bounds() {
        assert!(UnitInterval::new(0.0).is_some());
        assert!(UnitInterval::new(1.0).is_some());
        assert!(UnitInterval::new(0.5).is_some());
        assert!(UnitInterval::new(-0.01).is_none());
        assert!(UnitInterval::new(1.01).is_none());
        assert!(UnitInterval::new(f32::NAN).is_none());
        assert!(UnitInterval::new(f32::INFINITY).is_none());
    }

    #[test]
    fn test_unit_interval_reversed() {
        let v = UnitInterval::new(0.3).unwrap();
        assert!((v.reversed() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_relative_size_rejects_out_of_range() {
        assert!(RelativeSize::new(1.0, 0.7).is_some());
        assert!(RelativeSize::new(1.5, 0.7).is_none());
        assert!(RelativeSize::new(0.5, -0.1).is_none());
    }

    #[test]
    fn test_relative_size_presets() {
        assert_eq!(RelativeSize::normal().proportion.value(), 0.45);
        assert_eq!(RelativeSize::full().proportion.value(), 0.9);
        let default = RelativeSize::default();
        assert_eq!(default.proportion.value(), 1.0);
        assert_eq!(default.length.value(), 0.7);
    }

    #[test]
    fn test_visual_effect_dimming_validation() {
        assert!(VisualEffect::dimming(0.5).is_some());
        assert!(VisualEffect::dimming(2.0).is_none());
    }

    #[test]
    fn test_direction_axis() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Top.is_horizontal());
        assert!(!Direction::Bottom.is_horizontal());
    }
}
