//! Gesture handlers
//!
//! One module per input modality. Each turns raw input into
//! [`OffsetRequest`](crate::offset::OffsetRequest)s against the current target
//! offsets; none of them commits anything itself.

pub mod drag;
pub mod keyboard;
pub mod touch;
pub mod track;
pub mod wheel;

pub use drag::{DragPhase, ThumbDrag};
pub use touch::TouchPhase;
