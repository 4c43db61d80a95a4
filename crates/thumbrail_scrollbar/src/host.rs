//! Host environment abstraction
//!
//! The scrollbar never touches a real UI toolkit. Everything it reads (sizes,
//! native scroll offsets, focus) and writes (scroll offsets, rendered frames)
//! goes through [`Host`], so embedders can back it with a DOM, a native view,
//! or a test double.

use thumbrail_core::{Axis, Point, Size};

use crate::frame::ScrollbarFrame;
use crate::geometry::TrackStyle;

/// Kind of a focused element, as far as keyboard handling cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Input,
    TextArea,
    Select,
    Button,
    Other,
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// Nothing focused (or the document body)
    Nothing,
    /// One of this scrollbar's thumbs
    Thumb(Axis),
    /// Some other element
    Element {
        kind: ElementKind,
        content_editable: bool,
    },
    /// An embedded frame; holds the frame's own focused element when it can
    /// be read
    Frame(Option<Box<FocusTarget>>),
}

impl FocusTarget {
    pub fn element(kind: ElementKind) -> Self {
        FocusTarget::Element {
            kind,
            content_editable: false,
        }
    }

    /// Follow focused frames down to the innermost focused element
    pub fn resolve(&self) -> &FocusTarget {
        match self {
            FocusTarget::Frame(Some(inner)) => inner.resolve(),
            other => other,
        }
    }

    /// Whether keystrokes belong to this target rather than to scrolling
    pub fn is_editable(&self) -> bool {
        match self.resolve() {
            FocusTarget::Element {
                kind,
                content_editable,
            } => *content_editable || *kind != ElementKind::Other,
            _ => false,
        }
    }

    pub fn is_thumb(&self) -> bool {
        matches!(self, FocusTarget::Thumb(_))
    }
}

/// The scrollable element a scrollbar is attached to
pub trait Host {
    /// Visible size of the scroll box
    fn client_size(&self) -> Size;

    /// Full size of the scrollable content
    fn scroll_size(&self) -> Size;

    /// Native scroll offsets (scroll left, scroll top)
    fn scroll_position(&self) -> Point;

    /// Write a native scroll offset. Never called in range-scroll mode.
    fn set_scroll_position(&mut self, axis: Axis, value: f64);

    /// Computed style of the track for an axis
    fn track_style(&self, axis: Axis) -> TrackStyle;

    /// Element holding keyboard focus in the host's document
    fn active_element(&self) -> FocusTarget;

    /// Insert the scrollbar elements into the host
    fn mount(&mut self) {}

    /// Remove the scrollbar elements from the host
    fn unmount(&mut self) {}

    /// Apply a freshly derived frame
    fn render(&mut self, frame: &ScrollbarFrame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_controls_are_editable() {
        for kind in [
            ElementKind::Input,
            ElementKind::TextArea,
            ElementKind::Select,
            ElementKind::Button,
        ] {
            assert!(FocusTarget::element(kind).is_editable(), "{kind:?}");
        }
        assert!(!FocusTarget::element(ElementKind::Other).is_editable());
        assert!(FocusTarget::Element {
            kind: ElementKind::Other,
            content_editable: true,
        }
        .is_editable());
    }

    #[test]
    fn test_frames_resolve_to_inner_focus() {
        let nested = FocusTarget::Frame(Some(Box::new(FocusTarget::Frame(Some(Box::new(
            FocusTarget::element(ElementKind::TextArea),
        ))))));
        assert!(nested.is_editable());

        let unreadable = FocusTarget::Frame(None);
        assert!(!unreadable.is_editable());
        assert_eq!(unreadable.resolve(), &FocusTarget::Frame(None));
    }

    #[test]
    fn test_thumb_focus_is_not_editable() {
        let focus = FocusTarget::Thumb(Axis::Vertical);
        assert!(focus.is_thumb());
        assert!(!focus.is_editable());
        assert!(!FocusTarget::Nothing.is_editable());
    }
}
