//! Thumbrail Scrollbar
//!
//! An overlay scrollbar engine: geometry, a single authoritative scroll offset
//! per axis, and gesture handling for wheel, track click, thumb drag, keyboard
//! and touch with momentum.
//!
//! The engine is headless. A [`Host`] implementation adapts it to a concrete
//! element (reading sizes and focus, writing scroll offsets, drawing the
//! [`ScrollbarFrame`]), and the embedder forwards input through
//! [`Scrollbar::handle`] and time through [`Scrollbar::advance`].
//!
//! # Offsets
//!
//! Gestures submit requests; requests are clamped to `[0, content - container]`
//! and committed after a short per-axis debounce, the last request winning.
//! Each commit writes the host's native offset (unless a [`ScrollRange`] is
//! configured) and emits [`ScrollbarEvent::Scrolled`].
//!
//! # Example
//!
//! ```rust
//! use thumbrail_core::{Axis, Point, Size};
//! use thumbrail_scrollbar::{
//!     Capabilities, EventSource, FocusTarget, Host, InputEvent, Scrollbar, ScrollbarFrame,
//!     ScrollbarOptions, TrackStyle, WheelEvent,
//! };
//!
//! struct Panel {
//!     scroll: Point,
//! }
//!
//! impl Host for Panel {
//!     fn client_size(&self) -> Size { Size::new(200.0, 100.0) }
//!     fn scroll_size(&self) -> Size { Size::new(200.0, 500.0) }
//!     fn scroll_position(&self) -> Point { self.scroll }
//!     fn set_scroll_position(&mut self, axis: Axis, value: f64) {
//!         match axis {
//!             Axis::Horizontal => self.scroll.x = value,
//!             Axis::Vertical => self.scroll.y = value,
//!         }
//!     }
//!     fn track_style(&self, _axis: Axis) -> TrackStyle { TrackStyle::new(0.0, 0.0, 8.0) }
//!     fn active_element(&self) -> FocusTarget { FocusTarget::Nothing }
//!     fn render(&mut self, _frame: &ScrollbarFrame) {}
//! }
//!
//! let mut scrollbar = Scrollbar::new(
//!     Panel { scroll: Point::ZERO },
//!     ScrollbarOptions::default(),
//!     Capabilities::full(),
//! );
//!
//! let wheel = WheelEvent::pixels(Point::new(50.0, 50.0), 0.0, 120.0, 0.0);
//! assert!(scrollbar.handle(EventSource::Host, InputEvent::Wheel(wheel)).is_captured());
//!
//! scrollbar.advance(10.0);
//! assert_eq!(scrollbar.scroll_top(), 120.0);
//! assert_eq!(scrollbar.host().scroll.y, 120.0);
//! ```

pub mod error;
pub mod frame;
pub mod geometry;
pub mod gestures;
pub mod host;
pub mod input;
pub mod offset;
pub mod options;
pub mod scrollbar;
pub mod subscriptions;

pub use error::{OptionsError, Result};
pub use frame::{ScrollbarFrame, StateMarkers};
pub use geometry::{AxisGeometry, Geometry, GeometryInput, TrackStyle};
pub use gestures::{DragPhase, TouchPhase};
pub use host::{ElementKind, FocusTarget, Host};
pub use input::{
    Capabilities, DeltaMode, EventName, EventSource, EventStatus, InputEvent, KeyEvent,
    PointerEvent, PointerType, TouchEvent, TouchEventNames, TouchModel, WheelEvent,
};
pub use offset::{OffsetRequest, ScrollChanged};
pub use options::{OptionsPatch, ScrollRange, ScrollbarOptions, Tuning};
pub use scrollbar::{Scrollbar, ScrollbarEvent};
pub use subscriptions::Subscriptions;
