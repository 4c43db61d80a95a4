//! Wheel scrolling

use thumbrail_core::{Axis, AxisPair, Vec2};

use crate::input::{DeltaMode, WheelEvent};
use crate::offset::OffsetRequest;

/// Normalize a wheel event to `(dx, dy)` with "content moves up" positive on Y
///
/// Legacy fields are read first in the order `detail`, `wheel_delta`,
/// `wheel_delta_y`, `wheel_delta_x`; standard `delta_y`/`delta_x` override
/// them when present. Line-mode deltas are scaled by `line_multiplier`;
/// page-mode deltas pass through unchanged.
pub fn normalize(event: &WheelEvent, line_multiplier: f64) -> Vec2 {
    let mut dx = 0.0;
    let mut dy = 0.0;

    if let Some(detail) = event.detail {
        dy = -detail;
    }
    if let Some(wheel_delta) = event.wheel_delta {
        dy = wheel_delta;
    }
    if let Some(wheel_delta_y) = event.wheel_delta_y {
        dy = wheel_delta_y;
    }
    if let Some(wheel_delta_x) = event.wheel_delta_x {
        dx = -wheel_delta_x;
    }
    if let Some(delta_y) = event.delta_y {
        dy = -delta_y;
    }
    if let Some(delta_x) = event.delta_x {
        dx = delta_x;
    }

    let delta = Vec2::new(dx, dy);
    match event.delta_mode {
        DeltaMode::Line => delta.scale(line_multiplier),
        DeltaMode::Pixel | DeltaMode::Page => delta,
    }
}

/// Pick the axis a wheel delta scrolls
///
/// Vertical wins whenever it is active and has a nonzero delta; otherwise
/// horizontal if active with a nonzero delta.
pub fn request(delta: Vec2, targets: AxisPair<f64>, active: AxisPair<bool>) -> Option<OffsetRequest> {
    if active.vertical && delta.y != 0.0 {
        Some(OffsetRequest::new(Axis::Vertical, targets.vertical - delta.y))
    } else if active.horizontal && delta.x != 0.0 {
        Some(OffsetRequest::new(Axis::Horizontal, targets.horizontal + delta.x))
    } else {
        None
    }
}
