//! State machine support for widget interaction states
//!
//! Interaction states are plain enums that map an event id to the next state.
//! Unknown (state, event) pairs leave the state untouched.

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier for an interaction event
pub type EventId = u32;

/// Interaction events shared by scroll widgets
pub mod interaction_events {
    use super::EventId;

    /// Primary button pressed on the horizontal thumb
    pub const THUMB_PRESS_X: EventId = 1;
    /// Primary button pressed on the vertical thumb
    pub const THUMB_PRESS_Y: EventId = 2;
    /// Pointer button released anywhere in the document
    pub const POINTER_RELEASE: EventId = 3;
    /// Single contact touch began inside the scroll area
    pub const TOUCH_START: EventId = 10;
    /// Touch contact lifted
    pub const TOUCH_END: EventId = 11;
    /// Momentum decayed below the stop threshold
    pub const FLING_SETTLED: EventId = 12;
    /// Widget torn down
    pub const DISPOSE: EventId = 20;
}

/// Trait for interaction state enums
///
/// # Example
///
/// ```rust
/// use thumbrail_core::fsm::{interaction_events::*, EventId, StateTransitions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Touch {
///     #[default]
///     Idle,
///     Tracking,
/// }
///
/// impl StateTransitions for Touch {
///     fn on_event(&self, event: EventId) -> Option<Self> {
///         match (self, event) {
///             (Touch::Idle, TOUCH_START) => Some(Touch::Tracking),
///             (Touch::Tracking, TOUCH_END) => Some(Touch::Idle),
///             _ => None,
///         }
///     }
/// }
///
/// let mut state = Touch::Idle;
/// assert!(state.send(TOUCH_START));
/// assert_eq!(state, Touch::Tracking);
/// assert!(!state.send(TOUCH_START));
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventId) -> Option<Self>;

    /// Apply an event in place. Returns true if the state changed.
    fn send(&mut self, event: EventId) -> bool {
        match self.on_event(event) {
            Some(next) => {
                tracing::trace!(from = ?self, to = ?next, event, "state transition");
                *self = next;
                true
            }
            None => false,
        }
    }
}
