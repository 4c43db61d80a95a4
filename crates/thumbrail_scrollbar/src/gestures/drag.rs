//! Thumb dragging

use thumbrail_core::fsm::{interaction_events::*, EventId, StateTransitions};
use thumbrail_core::Axis;

/// Thumb press state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Released,
    Dragging(Axis),
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: EventId) -> Option<Self> {
        match (self, event) {
            (DragPhase::Released, THUMB_PRESS_X) => Some(DragPhase::Dragging(Axis::Horizontal)),
            (DragPhase::Released, THUMB_PRESS_Y) => Some(DragPhase::Dragging(Axis::Vertical)),
            (DragPhase::Dragging(_), POINTER_RELEASE) | (DragPhase::Dragging(_), DISPOSE) => {
                Some(DragPhase::Released)
            }
            _ => None,
        }
    }
}

impl DragPhase {
    pub fn press_event(axis: Axis) -> EventId {
        match axis {
            Axis::Horizontal => THUMB_PRESS_X,
            Axis::Vertical => THUMB_PRESS_Y,
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            DragPhase::Released => None,
            DragPhase::Dragging(axis) => Some(*axis),
        }
    }
}

/// An in-progress thumb drag
///
/// Offsets are computed from the press point, not accumulated per move, so a
/// drag never drifts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbDrag {
    pub axis: Axis,
    start_offset: f64,
    start_pointer: f64,
    ratio: f64,
}

impl ThumbDrag {
    /// `ratio` is content pixels per thumb pixel
    pub fn begin(axis: Axis, start_offset: f64, start_pointer: f64, ratio: f64) -> Self {
        Self {
            axis,
            start_offset,
            start_pointer,
            ratio,
        }
    }

    /// Offset requested for a pointer position along the drag axis
    pub fn target(&self, pointer: f64) -> f64 {
        self.start_offset + self.ratio * (pointer - self.start_pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_scales_pointer_travel() {
        let drag = ThumbDrag::begin(Axis::Vertical, 100.0, 40.0, 4.0);
        assert_eq!(drag.target(40.0), 100.0);
        assert_eq!(drag.target(50.0), 140.0);
        assert_eq!(drag.target(20.0), 20.0);
    }

    #[test]
    fn test_phase_transitions() {
        let mut phase = DragPhase::default();
        assert!(phase.send(DragPhase::press_event(Axis::Horizontal)));
        assert_eq!(phase.axis(), Some(Axis::Horizontal));

        // A second press while dragging is ignored
        assert!(!phase.send(THUMB_PRESS_Y));
        assert_eq!(phase, DragPhase::Dragging(Axis::Horizontal));

        assert!(phase.send(POINTER_RELEASE));
        assert_eq!(phase, DragPhase::Released);
        assert!(!phase.send(POINTER_RELEASE));
    }
}
