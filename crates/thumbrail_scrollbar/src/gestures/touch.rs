//! Touch drag and fling

use smallvec::SmallVec;
use thumbrail_animation::VelocityTracker;
use thumbrail_core::fsm::{interaction_events::*, EventId, StateTransitions};
use thumbrail_core::{Axis, AxisPair, Point, Vec2};

use crate::input::{PointerType, TouchEvent};
use crate::offset::OffsetRequest;

/// Touch interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TouchPhase {
    #[default]
    Idle,
    /// A finger is down and being tracked
    Tracking,
    /// Released with momentum
    Flinging,
}

impl StateTransitions for TouchPhase {
    fn on_event(&self, event: EventId) -> Option<Self> {
        match (self, event) {
            (TouchPhase::Idle, TOUCH_START) | (TouchPhase::Flinging, TOUCH_START) => {
                Some(TouchPhase::Tracking)
            }
            (TouchPhase::Tracking, TOUCH_END) => Some(TouchPhase::Flinging),
            (TouchPhase::Flinging, FLING_SETTLED) => Some(TouchPhase::Idle),
            (TouchPhase::Tracking, DISPOSE) | (TouchPhase::Flinging, DISPOSE) => {
                Some(TouchPhase::Idle)
            }
            _ => None,
        }
    }
}

/// Whether a touch-family event should drive scrolling
///
/// Rejects a pen hovering without contact; accepts exactly one target touch,
/// or any pointer that is not a mouse.
pub fn accepts(event: &TouchEvent) -> bool {
    if event.pointer_type == Some(PointerType::Pen) && event.buttons == 0 {
        return false;
    }
    if event.target_touches == Some(1) {
        return true;
    }
    matches!(
        event.pointer_type,
        Some(PointerType::Pen) | Some(PointerType::Touch)
    )
}

/// A tracked finger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchDrag {
    tracker: VelocityTracker,
}

impl TouchDrag {
    pub fn begin(position: Point, timestamp: f64) -> Self {
        Self {
            tracker: VelocityTracker::begin(position, timestamp),
        }
    }

    /// Feed a move; returns the finger movement since the last sample
    pub fn track(&mut self, position: Point, timestamp: f64) -> Vec2 {
        self.tracker.track(position, timestamp)
    }

    /// Release velocity in px/ms
    pub fn velocity(&self) -> Vec2 {
        self.tracker.velocity()
    }
}

/// Content follows the finger on every active axis
pub fn drag_requests(
    delta: Vec2,
    targets: AxisPair<f64>,
    active: AxisPair<bool>,
) -> SmallVec<[OffsetRequest; 2]> {
    Axis::ALL
        .into_iter()
        .filter(|axis| *active.get(*axis))
        .map(|axis| OffsetRequest::new(axis, targets.get(axis) - delta.along(axis)))
        .collect()
}

/// One fling tick's request
///
/// Vertical wins when it is active with nonzero velocity; horizontal only
/// moves otherwise.
pub fn fling_request(
    displacement: Vec2,
    velocity: Vec2,
    targets: AxisPair<f64>,
    active: AxisPair<bool>,
) -> Option<OffsetRequest> {
    if active.vertical && velocity.y != 0.0 {
        Some(OffsetRequest::new(Axis::Vertical, targets.vertical - displacement.y))
    } else if active.horizontal && velocity.x != 0.0 {
        Some(OffsetRequest::new(Axis::Horizontal, targets.horizontal - displacement.x))
    } else {
        None
    }
}
