//! Shared fixtures for scrollbar integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use thumbrail_core::{Axis, AxisPair, Point, Size};
use thumbrail_scrollbar::{
    Capabilities, FocusTarget, Host, Scrollbar, ScrollbarEvent, ScrollbarFrame, ScrollbarOptions,
    ScrollChanged, TrackStyle,
};

/// A host that records everything the scrollbar does to it
pub struct MockHost {
    pub client: Size,
    pub content: Size,
    pub scroll: Point,
    pub styles: AxisPair<TrackStyle>,
    pub focus: FocusTarget,
    pub writes: Vec<(Axis, f64)>,
    pub mounted: bool,
    pub renders: usize,
    pub last_frame: Option<ScrollbarFrame>,
}

impl MockHost {
    pub fn new(client: Size, content: Size) -> Self {
        Self {
            client,
            content,
            scroll: Point::ZERO,
            styles: AxisPair::splat(TrackStyle::new(0.0, 0.0, 8.0)),
            focus: FocusTarget::Nothing,
            writes: Vec::new(),
            mounted: false,
            renders: 0,
            last_frame: None,
        }
    }

    pub fn with_styles(mut self, styles: AxisPair<TrackStyle>) -> Self {
        self.styles = styles;
        self
    }
}

impl Host for MockHost {
    fn client_size(&self) -> Size {
        self.client
    }

    fn scroll_size(&self) -> Size {
        self.content
    }

    fn scroll_position(&self) -> Point {
        self.scroll
    }

    fn set_scroll_position(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.scroll.x = value,
            Axis::Vertical => self.scroll.y = value,
        }
        self.writes.push((axis, value));
    }

    fn track_style(&self, axis: Axis) -> TrackStyle {
        *self.styles.get(axis)
    }

    fn active_element(&self) -> FocusTarget {
        self.focus.clone()
    }

    fn mount(&mut self) {
        self.mounted = true;
    }

    fn unmount(&mut self) {
        self.mounted = false;
    }

    fn render(&mut self, frame: &ScrollbarFrame) {
        self.renders += 1;
        self.last_frame = Some(*frame);
    }
}

/// Native-mode scrollbar over a mock host with every capability
pub fn native(client: Size, content: Size) -> Scrollbar<MockHost> {
    Scrollbar::new(
        MockHost::new(client, content),
        ScrollbarOptions::default(),
        Capabilities::full(),
    )
}

/// Record every change notification
pub fn record(scrollbar: &mut Scrollbar<MockHost>) -> Rc<RefCell<Vec<ScrollChanged>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    scrollbar.on(move |event| match event {
        ScrollbarEvent::Scrolled(change) => sink.borrow_mut().push(*change),
    });
    changes
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
