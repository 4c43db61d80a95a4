//! Headless Scrollbar Demo
//!
//! This example drives a scrollbar over an in-memory host:
//! - Options parsed from JSON
//! - A wheel burst coalesced into one commit
//! - A thumb drag
//! - A touch flick with momentum
//!
//! Run with: RUST_LOG=thumbrail_scrollbar=debug cargo run -p thumbrail_scrollbar --example headless

use thumbrail_core::{Axis, Point, Size};
use thumbrail_scrollbar::{
    Capabilities, EventSource, FocusTarget, Host, InputEvent, PointerEvent, Result, Scrollbar,
    ScrollbarEvent, ScrollbarFrame, ScrollbarOptions, TouchEvent, TrackStyle, WheelEvent,
};
use tracing_subscriber::EnvFilter;

struct Document {
    viewport: Size,
    content: Size,
    scroll: Point,
}

impl Host for Document {
    fn client_size(&self) -> Size {
        self.viewport
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
    }

    fn track_style(&self, _axis: Axis) -> TrackStyle {
        TrackStyle::new(2.0, 2.0, 8.0)
    }

    fn active_element(&self) -> FocusTarget {
        FocusTarget::Nothing
    }

    fn render(&mut self, frame: &ScrollbarFrame) {
        tracing::trace!(
            thumb_top = frame.thumb_y.top,
            thumb_height = frame.thumb_y.height,
            "render"
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = ScrollbarOptions::from_json(r#"{"xscroll": false, "tuning": {"arrowStep": 60}}"#)?;
    let document = Document {
        viewport: Size::new(320.0, 480.0),
        content: Size::new(320.0, 4000.0),
        scroll: Point::ZERO,
    };
    let mut scrollbar = Scrollbar::new(document, options, Capabilities::full());

    // A real embedder attaches one native listener per pair
    for (source, name) in scrollbar.subscriptions().iter() {
        tracing::info!(?source, ?name, "listening");
    }

    scrollbar.on(|event| match event {
        ScrollbarEvent::Scrolled(change) => tracing::info!(
            axis = ?change.axis,
            from = change.old_value,
            to = change.new_value,
            "scrolled"
        ),
    });

    // Wheel burst: three notches inside the debounce window, one commit
    for (i, time) in [0.0, 4.0, 8.0].into_iter().enumerate() {
        let wheel = WheelEvent::pixels(Point::new(100.0, 100.0), 0.0, 100.0, time);
        let status = scrollbar.handle(EventSource::Host, InputEvent::Wheel(wheel));
        tracing::info!(notch = i, ?status, "wheel");
    }
    scrollbar.advance(50.0);

    // Drag the thumb down by 40px
    let thumb = scrollbar.frame().thumb_y;
    let grab = Point::new(315.0, thumb.top + thumb.height / 2.0);
    scrollbar.handle(
        EventSource::ThumbY,
        InputEvent::MouseDown(PointerEvent::new(grab, 60.0)),
    );
    scrollbar.handle(
        EventSource::Document,
        InputEvent::MouseMove(PointerEvent::new(Point::new(grab.x, grab.y + 40.0), 70.0)),
    );
    scrollbar.handle(
        EventSource::Document,
        InputEvent::MouseUp(PointerEvent::new(Point::new(grab.x, grab.y + 40.0), 80.0)),
    );
    scrollbar.advance(100.0);

    // Flick upward and let momentum run out
    let mut time = 200.0;
    scrollbar.handle(
        EventSource::Host,
        InputEvent::TouchStart(TouchEvent::finger(Point::new(160.0, 400.0), time)),
    );
    for y in [360.0, 300.0, 220.0] {
        time += 16.0;
        scrollbar.handle(
            EventSource::Host,
            InputEvent::TouchMove(TouchEvent::finger(Point::new(160.0, y), time)),
        );
    }
    scrollbar.handle(
        EventSource::Host,
        InputEvent::TouchEnd(TouchEvent::finger(Point::new(160.0, 220.0), time)),
    );
    while let Some(deadline) = scrollbar.next_deadline() {
        scrollbar.advance(deadline);
    }

    tracing::info!(
        scroll_top = scrollbar.scroll_top(),
        host_scroll = scrollbar.host().scroll.y,
        "settled"
    );

    scrollbar.dispose();
    Ok(())
}
