//! Frame policy: where presented content sits, and where it goes when
//! dismissed.
//!
//! These functions are pure and deterministic. Callers re-evaluate them on
//! every layout pass so container resizes and rotations are picked up live.

use crate::config::{Direction, Position, RelativeSize};
use crate::geometry::{Rect, Size};

/// Frame of slide-in content while presented.
///
/// The along-axis dimension is `container × length`, the cross-axis dimension
/// `container × proportion`. Content sits flush against the entry edge and is
/// centered on the cross axis.
pub fn presented_frame(container: Size, direction: Direction, size: RelativeSize) -> Rect {
    let (width, height) = if direction.is_horizontal() {
        (
            container.width * size.length.value(),
            container.height * size.proportion.value(),
        )
    } else {
        (
            container.width * size.proportion.value(),
            container.height * size.length.value(),
        )
    };

    let (x, y) = match direction {
        Direction::Left => (0.0, (container.height - height) / 2.0),
        Direction::Right => (container.width - width, (container.height - height) / 2.0),
        Direction::Top => ((container.width - width) / 2.0, 0.0),
        Direction::Bottom => ((container.width - width) / 2.0, container.height - height),
    };

    Rect::new(x, y, width, height)
}

/// Frame of slide-in content while dismissed: the presented frame pushed
/// fully past the entry edge.
pub fn dismissed_frame(presented: Rect, container: Size, direction: Direction) -> Rect {
    let mut frame = presented;
    match direction {
        Direction::Left => frame.x = -presented.width,
        Direction::Right => frame.x = container.width,
        Direction::Top => frame.y = -presented.height,
        Direction::Bottom => frame.y = container.height,
    }
    frame
}

/// Frame of pop-up content for a given placement.
pub fn pop_up_frame(container: Size, position: &Position) -> Rect {
    match position {
        Position::Middle {
            aspect_ratio,
            relative_size,
        } => {
            let width = container.width * relative_size.value();
            let height = width / aspect_ratio;
            Rect::new(
                (container.width - width) / 2.0,
                (container.height - height) / 2.0,
                width,
                height,
            )
        }
        Position::At {
            center,
            aspect_ratio,
            relative_size,
        } => {
            let width = container.width * relative_size.value();
            let height = width / aspect_ratio;
            Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
        }
        Position::Frame(rect) => *rect,
    }
}
