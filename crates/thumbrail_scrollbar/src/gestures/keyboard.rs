//! Keyboard scrolling

use thumbrail_core::{Axis, AxisPair, KeyCode, Size, Vec2};

use crate::host::FocusTarget;
use crate::offset::OffsetRequest;

/// Whether a keystroke should scroll at all
///
/// The scrollbar must be hovered or one of its thumbs focused, and focus must
/// not sit in an editable element (looking through focused frames).
pub fn accepts(focus: &FocusTarget, hovered: bool) -> bool {
    if !hovered && !focus.is_thumb() {
        return false;
    }
    !focus.is_editable()
}

/// Map a key to `(dx, dy)`, with "content moves up" positive on Y
pub fn key_delta(key: KeyCode, container: Size, content: Size, arrow_step: f64) -> Option<Vec2> {
    let delta = match key {
        KeyCode::LEFT => Vec2::new(-arrow_step, 0.0),
        KeyCode::RIGHT => Vec2::new(arrow_step, 0.0),
        KeyCode::UP => Vec2::new(0.0, arrow_step),
        KeyCode::DOWN => Vec2::new(0.0, -arrow_step),
        KeyCode::PAGE_UP => Vec2::new(0.0, container.height),
        KeyCode::PAGE_DOWN => Vec2::new(0.0, -container.height),
        KeyCode::HOME => Vec2::new(0.0, content.height),
        KeyCode::END => Vec2::new(0.0, -content.height),
        _ => return None,
    };
    Some(delta)
}

/// Pick the axis a key delta scrolls
///
/// Vertical handles every key whenever it is active, even horizontal arrows
/// (which then request no change).
pub fn request(delta: Vec2, targets: AxisPair<f64>, active: AxisPair<bool>) -> Option<OffsetRequest> {
    if active.vertical {
        Some(OffsetRequest::new(Axis::Vertical, targets.vertical - delta.y))
    } else if active.horizontal {
        Some(OffsetRequest::new(Axis::Horizontal, targets.horizontal + delta.x))
    } else {
        None
    }
}
