//! Input events
//!
//! Embedders translate native events into [`InputEvent`]s and deliver each one
//! once, tagged with the innermost [`EventSource`] it hit. Coordinates are
//! host-local viewport pixels; timestamps are milliseconds on the same clock
//! passed to `Scrollbar::advance`.

use thumbrail_core::{KeyCode, Point};

/// Where an event was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    Window,
    Document,
    Host,
    TrackX,
    ThumbX,
    TrackY,
    ThumbY,
}

/// Event kinds the scrollbar subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    Resize,
    KeyDown,
    Mutation,
    Scroll,
    Wheel,
    TouchStart,
    TouchMove,
    TouchEnd,
    MouseEnter,
    MouseLeave,
    MouseMove,
    MouseDown,
    MouseUp,
}

/// Which touch event family the platform provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TouchModel {
    Touch,
    Pointer,
    MsPointer,
    #[default]
    Unsupported,
}

/// Native event names for one touch model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEventNames {
    pub start: &'static str,
    pub moved: &'static str,
    pub end: &'static str,
}

impl TouchModel {
    /// Native names the embedder should listen for
    pub fn event_names(self) -> Option<TouchEventNames> {
        match self {
            TouchModel::Touch => Some(TouchEventNames {
                start: "touchstart",
                moved: "touchmove",
                end: "touchend",
            }),
            TouchModel::Pointer => Some(TouchEventNames {
                start: "pointerdown",
                moved: "pointermove",
                end: "pointerup",
            }),
            TouchModel::MsPointer => Some(TouchEventNames {
                start: "MSPointerDown",
                moved: "MSPointerMove",
                end: "MSPointerUp",
            }),
            TouchModel::Unsupported => None,
        }
    }

    pub fn is_supported(self) -> bool {
        self != TouchModel::Unsupported
    }
}

/// Platform capabilities, detected once by the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    pub touch: TouchModel,
    /// Whether content mutations can be observed
    pub mutation_observer: bool,
}

impl Capabilities {
    pub fn new(touch: TouchModel, mutation_observer: bool) -> Self {
        Self {
            touch,
            mutation_observer,
        }
    }

    /// A fully featured desktop/touch platform
    pub fn full() -> Self {
        Self::new(TouchModel::Touch, true)
    }
}

/// Wheel delta unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// A wheel event
///
/// Fields are optional because older event shapes only carry the legacy
/// `detail`/`wheel_delta*` values. When `delta_x`/`delta_y` are present they
/// override the legacy values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    pub position: Point,
    pub delta_x: Option<f64>,
    pub delta_y: Option<f64>,
    pub delta_mode: DeltaMode,
    pub detail: Option<f64>,
    pub wheel_delta: Option<f64>,
    pub wheel_delta_x: Option<f64>,
    pub wheel_delta_y: Option<f64>,
    pub timestamp: f64,
}

impl WheelEvent {
    /// A standard pixel-mode wheel event
    pub fn pixels(position: Point, delta_x: f64, delta_y: f64, timestamp: f64) -> Self {
        Self {
            position,
            delta_x: Some(delta_x),
            delta_y: Some(delta_y),
            timestamp,
            ..Default::default()
        }
    }
}

/// Kind of pointer behind a touch-family event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub position: Point,
    pub timestamp: f64,
}

impl PointerEvent {
    pub fn new(position: Point, timestamp: f64) -> Self {
        Self {
            position,
            timestamp,
        }
    }
}

/// A touch-family event (touch, pointer or MS pointer)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchEvent {
    /// Position of the first contact
    pub position: Point,
    /// Contacts on the target, for touch events
    pub target_touches: Option<usize>,
    /// Pointer type, for pointer events
    pub pointer_type: Option<PointerType>,
    /// Pressed buttons bitmask
    pub buttons: u16,
    pub timestamp: f64,
}

impl TouchEvent {
    /// A single-finger touch event
    pub fn finger(position: Point, timestamp: f64) -> Self {
        Self {
            position,
            target_touches: Some(1),
            timestamp,
            ..Default::default()
        }
    }

    /// A pointer event of the given type
    pub fn pointer(position: Point, pointer_type: PointerType, buttons: u16, timestamp: f64) -> Self {
        Self {
            position,
            pointer_type: Some(pointer_type),
            buttons,
            timestamp,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyCode,
    /// Another handler already consumed the event
    pub default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }
}

/// An input event delivered to the scrollbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Resize,
    Mutation,
    Scroll,
    KeyDown(KeyEvent),
    Wheel(WheelEvent),
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    MouseEnter(PointerEvent),
    MouseLeave(PointerEvent),
    MouseMove(PointerEvent),
    MouseDown(PointerEvent),
    MouseUp(PointerEvent),
}

impl InputEvent {
    pub fn name(&self) -> EventName {
        match self {
            InputEvent::Resize => EventName::Resize,
            InputEvent::Mutation => EventName::Mutation,
            InputEvent::Scroll => EventName::Scroll,
            InputEvent::KeyDown(_) => EventName::KeyDown,
            InputEvent::Wheel(_) => EventName::Wheel,
            InputEvent::TouchStart(_) => EventName::TouchStart,
            InputEvent::TouchMove(_) => EventName::TouchMove,
            InputEvent::TouchEnd(_) => EventName::TouchEnd,
            InputEvent::MouseEnter(_) => EventName::MouseEnter,
            InputEvent::MouseLeave(_) => EventName::MouseLeave,
            InputEvent::MouseMove(_) => EventName::MouseMove,
            InputEvent::MouseDown(_) => EventName::MouseDown,
            InputEvent::MouseUp(_) => EventName::MouseUp,
        }
    }

    /// Event time, for events that carry one
    pub fn timestamp(&self) -> Option<f64> {
        match self {
            InputEvent::Resize
            | InputEvent::Mutation
            | InputEvent::Scroll
            | InputEvent::KeyDown(_) => None,
            InputEvent::Wheel(wheel) => Some(wheel.timestamp),
            InputEvent::TouchStart(touch)
            | InputEvent::TouchMove(touch)
            | InputEvent::TouchEnd(touch) => Some(touch.timestamp),
            InputEvent::MouseEnter(pointer)
            | InputEvent::MouseLeave(pointer)
            | InputEvent::MouseMove(pointer)
            | InputEvent::MouseDown(pointer)
            | InputEvent::MouseUp(pointer) => Some(pointer.timestamp),
        }
    }
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    /// The scrollbar consumed the event; suppress the native default action
    Captured,
    /// Let the event continue normally
    Ignored,
}

impl EventStatus {
    pub fn is_captured(self) -> bool {
        self == EventStatus::Captured
    }
}
