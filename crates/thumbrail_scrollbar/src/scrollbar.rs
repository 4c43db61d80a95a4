//! Scrollbar widget
//!
//! [`Scrollbar`] wires the geometry model, the offset authority and the
//! gesture handlers to a [`Host`]. It is driven entirely from outside:
//!
//! - [`Scrollbar::handle`] delivers input events;
//! - [`Scrollbar::advance`] moves time forward and runs due commits and fling
//!   ticks;
//! - [`Scrollbar::update`] re-reads geometry after the embedder changed layout
//!   or options.
//!
//! Every event carrying a timestamp first advances time to that timestamp, so
//! anything that would have fired before the event did.

use thumbrail_animation::{Fling, TimerId, TimerScheduler};
use thumbrail_core::fsm::{interaction_events::*, StateTransitions};
use thumbrail_core::{Axis, AxisPair, EventBus, Point, Rect, SubscriptionId, Vec2};

use crate::frame::{ScrollbarFrame, StateMarkers};
use crate::geometry::{Geometry, GeometryInput, TrackStyle};
use crate::gestures::touch::TouchDrag;
use crate::gestures::{keyboard, touch, track, wheel, DragPhase, ThumbDrag, TouchPhase};
use crate::host::Host;
use crate::input::{
    Capabilities, EventName, EventSource, EventStatus, InputEvent, KeyEvent, PointerEvent,
    TouchEvent, WheelEvent,
};
use crate::offset::{Delay, OffsetAuthority, OffsetRequest, RequestOutcome, ScrollChanged};
use crate::options::{OptionsPatch, ScrollbarOptions};
use crate::subscriptions::Subscriptions;

/// Notifications emitted by a scrollbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollbarEvent {
    /// A committed offset changed
    Scrolled(ScrollChanged),
}

/// Scheduled work
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Task {
    Commit(OffsetRequest),
    FlingTick,
}

#[derive(Debug, Clone, Copy)]
struct ActiveFling {
    timer: TimerId,
    fling: Fling,
}

/// An overlay scrollbar attached to a host
pub struct Scrollbar<H: Host> {
    host: H,
    options: ScrollbarOptions,
    capabilities: Capabilities,
    track_styles: AxisPair<TrackStyle>,
    geometry: Geometry,
    authority: OffsetAuthority,
    timers: TimerScheduler<Task>,
    subscriptions: Subscriptions,
    events: EventBus<ScrollbarEvent>,
    markers: StateMarkers,
    frame: ScrollbarFrame,
    drag_phase: DragPhase,
    thumb_drag: Option<ThumbDrag>,
    touch_phase: TouchPhase,
    touch_drag: Option<TouchDrag>,
    fling: Option<ActiveFling>,
    disposed: bool,
}

impl<H: Host> Scrollbar<H> {
    /// Attach a scrollbar to `host`
    ///
    /// Mounts the scrollbar elements, derives the initial geometry (committing
    /// offsets synchronously) and subscribes to input.
    pub fn new(mut host: H, options: ScrollbarOptions, capabilities: Capabilities) -> Self {
        host.mount();

        let options = options.sanitized();
        let tuning = options.tuning;
        let mut scrollbar = Self {
            host,
            options,
            capabilities,
            track_styles: AxisPair::default(),
            geometry: Geometry::default(),
            authority: OffsetAuthority::new(options.is_range_scroll(), tuning.debounce_ms),
            timers: TimerScheduler::new(),
            subscriptions: Subscriptions::new(),
            events: EventBus::new(),
            markers: StateMarkers::default(),
            frame: ScrollbarFrame::default(),
            drag_phase: DragPhase::default(),
            thumb_drag: None,
            touch_phase: TouchPhase::default(),
            touch_drag: None,
            fling: None,
            disposed: false,
        };

        scrollbar.update(None);
        scrollbar.bind_events();

        tracing::debug!(
            range_scroll = options.is_range_scroll(),
            active_x = scrollbar.geometry.is_active(Axis::Horizontal),
            active_y = scrollbar.geometry.is_active(Axis::Vertical),
            "scrollbar attached"
        );
        scrollbar
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Committed horizontal offset
    pub fn scroll_left(&self) -> f64 {
        self.authority.offset(Axis::Horizontal)
    }

    /// Committed vertical offset
    pub fn scroll_top(&self) -> f64 {
        self.authority.offset(Axis::Vertical)
    }

    /// Committed offset for an axis
    pub fn offset(&self, axis: Axis) -> f64 {
        self.authority.offset(axis)
    }

    /// Pending target for an axis, or the committed offset if nothing is
    /// pending
    pub fn target(&self, axis: Axis) -> f64 {
        self.authority.target(axis)
    }

    /// Geometry from the last layout pass
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Last frame handed to the host
    pub fn frame(&self) -> &ScrollbarFrame {
        &self.frame
    }

    /// Current options, with any applied patches
    pub fn options(&self) -> &ScrollbarOptions {
        &self.options
    }

    /// Input capabilities resolved at construction
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Listeners the scrollbar currently holds
    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// The host this scrollbar is attached to
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for embedders that change layout before calling
    /// [`Scrollbar::update`]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether the pointer is over the container
    pub fn is_hovered(&self) -> bool {
        self.markers.hover
    }

    /// Thumb drag state
    pub fn drag_phase(&self) -> DragPhase {
        self.drag_phase
    }

    /// Touch and fling state
    pub fn touch_phase(&self) -> TouchPhase {
        self.touch_phase
    }

    /// Velocity of the running fling, if any
    pub fn fling_velocity(&self) -> Option<Vec2> {
        self.fling.map(|active| active.fling.velocity())
    }

    /// Whether a fling is running
    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    /// Earliest time [`Scrollbar::advance`] has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Current scheduler time in milliseconds
    pub fn now(&self) -> f64 {
        self.timers.now()
    }

    /// Whether [`Scrollbar::dispose`] has run
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Register a handler for scroll notifications
    pub fn on<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&ScrollbarEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Register a handler that runs for the next notification only
    pub fn once<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&ScrollbarEvent) + 'static,
    {
        self.events.once(handler)
    }

    /// Remove a handler
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Remove every handler
    pub fn off_all(&mut self) {
        self.events.clear();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Re-read geometry and re-assert offsets
    ///
    /// Applies `patch` first. Active axes re-commit their target offset
    /// (clamped to the new range) and inactive axes snap back to 0, both
    /// synchronously.
    pub fn update(&mut self, patch: Option<OptionsPatch>) {
        if !self.check_alive("update") {
            return;
        }

        if let Some(patch) = patch {
            self.options.apply(patch);
        }
        self.authority
            .configure(self.options.is_range_scroll(), self.options.tuning.debounce_ms);

        self.track_styles = AxisPair::new(
            self.host.track_style(Axis::Horizontal),
            self.host.track_style(Axis::Vertical),
        );

        let previous = self.geometry.active();
        self.geometry = Geometry::compute(&self.geometry_input());
        let active = self.geometry.active();
        if active != previous {
            tracing::debug!(
                active_x = active.horizontal,
                active_y = active.vertical,
                "axis activation changed"
            );
        }

        for axis in Axis::ALL {
            let value = if *active.get(axis) {
                self.authority.target(axis)
            } else {
                0.0
            };
            self.request(OffsetRequest::new(axis, value), Delay::Immediate);
        }

        self.refresh();
    }

    /// Detach from the host
    ///
    /// Cancels pending commits and any fling, drops every subscription and
    /// handler, and unmounts. The scrollbar must not be used afterwards.
    pub fn dispose(&mut self) {
        if !self.check_alive("dispose") {
            return;
        }

        self.authority.cancel_pending(&mut self.timers);
        self.timers.cancel_all();
        self.fling = None;
        self.thumb_drag = None;
        self.touch_drag = None;
        self.drag_phase.send(DISPOSE);
        self.touch_phase.send(DISPOSE);

        self.subscriptions.clear();
        self.events.clear();
        self.host.unmount();
        self.disposed = true;

        tracing::debug!("scrollbar disposed");
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Run every commit and fling tick due at or before `now`
    pub fn advance(&mut self, now: f64) {
        if !self.check_alive("advance") {
            return;
        }

        while let Some((id, task)) = self.timers.pop_due(now) {
            match task {
                Task::Commit(request) => {
                    if self.authority.settle(id, request.axis) {
                        self.commit(request);
                        self.refresh();
                    }
                }
                Task::FlingTick => self.on_fling_tick(),
            }
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Deliver an input event
    ///
    /// Events for `(source, name)` pairs the scrollbar is not subscribed to
    /// are ignored. A [`EventStatus::Captured`] result means the embedder
    /// should suppress the native default action and stop propagation.
    pub fn handle(&mut self, source: EventSource, event: InputEvent) -> EventStatus {
        if !self.check_alive("handle") {
            return EventStatus::Ignored;
        }

        if let Some(timestamp) = event.timestamp() {
            self.advance(timestamp);
        }

        if !self.subscriptions.contains(source, event.name()) {
            return EventStatus::Ignored;
        }

        match (source, event) {
            (EventSource::Window, InputEvent::Resize)
            | (EventSource::Host, InputEvent::Mutation) => {
                self.update(None);
                EventStatus::Ignored
            }
            (EventSource::Document, InputEvent::KeyDown(key)) => self.on_key_down(key),
            (EventSource::Host, InputEvent::Scroll) => self.on_host_scroll(),
            (EventSource::Host, InputEvent::Wheel(wheel)) => self.on_wheel(wheel),
            (EventSource::Host, InputEvent::TouchStart(touch)) => self.on_touch_start(touch),
            (EventSource::Host, InputEvent::TouchMove(touch)) => self.on_touch_move(touch),
            (EventSource::Host, InputEvent::TouchEnd(_)) => self.on_touch_end(),
            (EventSource::Host, InputEvent::MouseEnter(_)) => self.on_mouse_enter(),
            (EventSource::Host, InputEvent::MouseLeave(_)) => self.on_mouse_leave(),
            (EventSource::Host, InputEvent::MouseMove(pointer)) => self.on_host_mouse_move(pointer),
            (EventSource::TrackX, InputEvent::MouseDown(pointer)) => {
                self.on_track_mouse_down(Axis::Horizontal, pointer)
            }
            (EventSource::TrackY, InputEvent::MouseDown(pointer)) => {
                self.on_track_mouse_down(Axis::Vertical, pointer)
            }
            (EventSource::ThumbX, InputEvent::MouseDown(pointer)) => {
                self.on_thumb_mouse_down(Axis::Horizontal, pointer)
            }
            (EventSource::ThumbY, InputEvent::MouseDown(pointer)) => {
                self.on_thumb_mouse_down(Axis::Vertical, pointer)
            }
            (EventSource::Document, InputEvent::MouseMove(pointer)) => self.on_drag_move(pointer),
            (EventSource::Document, InputEvent::MouseUp(_)) => self.on_drag_end(),
            _ => EventStatus::Ignored,
        }
    }

    fn on_key_down(&mut self, key: KeyEvent) -> EventStatus {
        if key.default_prevented {
            return EventStatus::Ignored;
        }
        if !keyboard::accepts(&self.host.active_element(), self.markers.hover) {
            return EventStatus::Ignored;
        }

        let Some(delta) = keyboard::key_delta(
            key.key,
            self.geometry.container().size(),
            self.geometry.content(),
            self.options.tuning.arrow_step,
        ) else {
            return EventStatus::Ignored;
        };

        let status = match keyboard::request(delta, self.authority.targets(), self.geometry.active())
        {
            Some(request) => {
                self.request(request, Delay::Debounced);
                EventStatus::Captured
            }
            None => EventStatus::Ignored,
        };

        self.refresh();
        status
    }

    fn on_host_scroll(&mut self) -> EventStatus {
        if !self.authority.is_range_scroll() {
            self.authority.sync_from_host(self.host.scroll_position());
        }
        self.refresh();
        EventStatus::Ignored
    }

    fn on_wheel(&mut self, event: WheelEvent) -> EventStatus {
        if !self.in_container(event.position) {
            return EventStatus::Ignored;
        }

        let delta = wheel::normalize(&event, self.options.tuning.wheel_line_multiplier);
        let status = match wheel::request(delta, self.authority.targets(), self.geometry.active()) {
            Some(request) => {
                self.request(request, Delay::Debounced);
                EventStatus::Captured
            }
            None => EventStatus::Ignored,
        };

        self.refresh();
        status
    }

    fn on_touch_start(&mut self, event: TouchEvent) -> EventStatus {
        if !touch::accepts(&event) || !self.in_container(event.position) {
            return EventStatus::Ignored;
        }

        self.stop_fling();
        self.touch_drag = Some(TouchDrag::begin(event.position, event.timestamp));
        self.touch_phase.send(TOUCH_START);

        for name in [EventName::TouchMove, EventName::TouchEnd] {
            self.subscriptions.unsubscribe(EventSource::Host, name);
            self.subscriptions.subscribe(EventSource::Host, name);
        }

        EventStatus::Ignored
    }

    fn on_touch_move(&mut self, event: TouchEvent) -> EventStatus {
        if !touch::accepts(&event) {
            return EventStatus::Ignored;
        }
        let Some(drag) = self.touch_drag.as_mut() else {
            return EventStatus::Ignored;
        };

        let delta = drag.track(event.position, event.timestamp);
        let requests =
            touch::drag_requests(delta, self.authority.targets(), self.geometry.active());
        for request in requests {
            self.request(request, Delay::Debounced);
        }

        self.refresh();
        EventStatus::Captured
    }

    fn on_touch_end(&mut self) -> EventStatus {
        self.subscriptions
            .unsubscribe(EventSource::Host, EventName::TouchMove);
        self.subscriptions
            .unsubscribe(EventSource::Host, EventName::TouchEnd);

        let velocity = self
            .touch_drag
            .take()
            .map_or(Vec2::ZERO, |drag| drag.velocity());
        self.touch_phase.send(TOUCH_END);
        self.start_fling(velocity);

        EventStatus::Ignored
    }

    fn on_mouse_enter(&mut self) -> EventStatus {
        if !self.authority.is_range_scroll() {
            self.markers.hover = true;
            self.refresh();
        }
        EventStatus::Ignored
    }

    fn on_mouse_leave(&mut self) -> EventStatus {
        self.markers.hover = false;
        self.refresh();
        EventStatus::Ignored
    }

    fn on_host_mouse_move(&mut self, event: PointerEvent) -> EventStatus {
        if self.authority.is_range_scroll() {
            self.markers.hover = self.in_container(event.position);
            self.refresh();
        }
        EventStatus::Ignored
    }

    fn on_track_mouse_down(&mut self, axis: Axis, event: PointerEvent) -> EventStatus {
        if !self.geometry.is_active(axis) {
            return EventStatus::Ignored;
        }

        let value = track::page_target(
            event.position.along(axis),
            self.thumb_start(axis),
            self.authority.target(axis),
            self.geometry.container().size().along(axis),
        );
        self.request(OffsetRequest::new(axis, value), Delay::Debounced);

        self.refresh();
        EventStatus::Captured
    }

    fn on_thumb_mouse_down(&mut self, axis: Axis, event: PointerEvent) -> EventStatus {
        if !self.geometry.is_active(axis) || !self.drag_phase.send(DragPhase::press_event(axis)) {
            return EventStatus::Ignored;
        }

        let ratio = self.geometry.scroll_ratio(axis).unwrap_or(0.0);
        self.thumb_drag = Some(ThumbDrag::begin(
            axis,
            self.authority.offset(axis),
            event.position.along(axis),
            ratio,
        ));

        self.subscriptions
            .subscribe(EventSource::Document, EventName::MouseMove);
        self.subscriptions
            .subscribe(EventSource::Document, EventName::MouseUp);

        tracing::debug!(?axis, ratio, "thumb drag started");
        EventStatus::Captured
    }

    fn on_drag_move(&mut self, event: PointerEvent) -> EventStatus {
        let Some(thumb_drag) = self.thumb_drag else {
            return EventStatus::Ignored;
        };

        let axis = thumb_drag.axis;
        let value = thumb_drag.target(event.position.along(axis));
        self.request(OffsetRequest::new(axis, value), Delay::Debounced);
        self.markers.set_scrolling(axis, true);

        self.refresh();
        EventStatus::Captured
    }

    fn on_drag_end(&mut self) -> EventStatus {
        self.subscriptions
            .unsubscribe(EventSource::Document, EventName::MouseMove);
        self.subscriptions
            .unsubscribe(EventSource::Document, EventName::MouseUp);

        if let Some(thumb_drag) = self.thumb_drag.take() {
            self.markers.set_scrolling(thumb_drag.axis, false);
            tracing::debug!(axis = ?thumb_drag.axis, "thumb drag ended");
        }
        self.drag_phase.send(POINTER_RELEASE);

        self.refresh();
        EventStatus::Ignored
    }

    // =========================================================================
    // Fling
    // =========================================================================

    fn start_fling(&mut self, velocity: Vec2) {
        self.stop_fling();

        let config = self.options.tuning.fling_config();
        let timer = self
            .timers
            .schedule_interval(config.interval_ms, Task::FlingTick);
        self.fling = Some(ActiveFling {
            timer,
            fling: Fling::new(velocity, config),
        });

        tracing::debug!(vx = velocity.x, vy = velocity.y, "fling started");
    }

    fn stop_fling(&mut self) {
        if let Some(active) = self.fling.take() {
            self.timers.cancel(active.timer);
        }
    }

    fn on_fling_tick(&mut self) {
        let Some(active) = self.fling.as_mut() else {
            return;
        };

        let velocity = active.fling.velocity();
        let Some(displacement) = active.fling.step() else {
            self.stop_fling();
            self.touch_phase.send(FLING_SETTLED);
            tracing::debug!("fling settled");
            return;
        };

        if let Some(request) = touch::fling_request(
            displacement,
            velocity,
            self.authority.targets(),
            self.geometry.active(),
        ) {
            self.request(request, Delay::Debounced);
        }
        self.refresh();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn bind_events(&mut self) {
        let mut bindings = vec![
            (EventSource::Window, EventName::Resize),
            (EventSource::Document, EventName::KeyDown),
            (EventSource::Host, EventName::Scroll),
            (EventSource::Host, EventName::Wheel),
            (EventSource::Host, EventName::MouseEnter),
            (EventSource::Host, EventName::MouseLeave),
            (EventSource::Host, EventName::MouseMove),
            (EventSource::TrackX, EventName::MouseDown),
            (EventSource::ThumbX, EventName::MouseDown),
            (EventSource::TrackY, EventName::MouseDown),
            (EventSource::ThumbY, EventName::MouseDown),
        ];
        if self.capabilities.mutation_observer {
            bindings.push((EventSource::Host, EventName::Mutation));
        }
        if self.capabilities.touch.is_supported() {
            bindings.push((EventSource::Host, EventName::TouchStart));
        }

        for (source, name) in bindings {
            self.subscriptions.subscribe(source, name);
        }
    }

    fn geometry_input(&self) -> GeometryInput {
        let (container, content) = match self.options.scroll_range {
            Some(range) => (range.container_rect, range.content_size),
            None => (
                Rect::from_origin_size(Point::ZERO, self.host.client_size()),
                self.host.scroll_size(),
            ),
        };

        GeometryInput {
            container,
            content,
            enabled: AxisPair::new(self.options.xscroll, self.options.yscroll),
            track_styles: self.track_styles,
            activation_epsilon: self.options.tuning.activation_epsilon,
        }
    }

    /// Hit test against the logical container; always true in native mode
    fn in_container(&self, position: Point) -> bool {
        if !self.authority.is_range_scroll() {
            return true;
        }
        self.geometry
            .container()
            .expand(self.options.track_y_offset, self.options.track_x_offset)
            .contains(position)
    }

    /// Viewport coordinate of the thumb's leading edge
    fn thumb_start(&self, axis: Axis) -> f64 {
        self.geometry.container().start(axis)
            + self.track_styles.get(axis).margin_start
            + self.geometry.axis(axis).thumb_position
    }

    fn request(&mut self, request: OffsetRequest, delay: Delay) {
        let max_offset = self.geometry.max_offset(request.axis);
        match self
            .authority
            .request(request, max_offset, delay, &mut self.timers)
        {
            RequestOutcome::Immediate(request) => self.commit(request),
            RequestOutcome::Deferred(_) | RequestOutcome::Unchanged => {}
        }
    }

    fn commit(&mut self, request: OffsetRequest) {
        if let Some(change) = self.authority.commit(request, &mut self.host) {
            self.events.emit(&ScrollbarEvent::Scrolled(change));
        }
    }

    /// Re-place thumbs for the committed offsets and hand the frame to the host
    fn refresh(&mut self) {
        self.geometry.set_offsets(self.authority.offsets());
        self.frame = ScrollbarFrame::build(
            &self.geometry,
            &self.track_styles,
            self.host.scroll_position(),
            AxisPair::new(self.options.track_x_offset, self.options.track_y_offset),
            self.markers,
        );
        self.host.render(&self.frame);
    }

    fn check_alive(&self, operation: &'static str) -> bool {
        debug_assert!(!self.disposed, "Scrollbar::{operation} called after dispose");
        if self.disposed {
            tracing::warn!(operation, "scrollbar used after dispose");
        }
        !self.disposed
    }
}

impl<H: Host> Drop for Scrollbar<H> {
    fn drop(&mut self) {
        if !self.disposed {
            self.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FocusTarget;
    use thumbrail_core::Size;

    struct StubHost {
        client: Size,
        content: Size,
        scroll: Point,
    }

    impl Host for StubHost {
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
        }
        fn track_style(&self, _axis: Axis) -> TrackStyle {
            TrackStyle::new(0.0, 0.0, 8.0)
        }
        fn active_element(&self) -> FocusTarget {
            FocusTarget::Nothing
        }
        fn render(&mut self, _frame: &ScrollbarFrame) {}
    }

    fn scrollbar() -> Scrollbar<StubHost> {
        Scrollbar::new(
            StubHost {
                client: Size::new(200.0, 100.0),
                content: Size::new(200.0, 500.0),
                scroll: Point::ZERO,
            },
            ScrollbarOptions::default(),
            Capabilities::full(),
        )
    }

    #[test]
    fn test_binds_initial_subscriptions() {
        let scrollbar = scrollbar();
        assert_eq!(scrollbar.subscriptions().len(), 13);
        assert!(scrollbar
            .subscriptions()
            .contains(EventSource::Host, EventName::TouchStart));
        assert!(!scrollbar
            .subscriptions()
            .contains(EventSource::Document, EventName::MouseMove));
    }

    #[test]
    fn test_no_touch_or_mutation_without_capabilities() {
        let scrollbar = Scrollbar::new(
            StubHost {
                client: Size::new(10.0, 10.0),
                content: Size::new(10.0, 10.0),
                scroll: Point::ZERO,
            },
            ScrollbarOptions::default(),
            Capabilities::default(),
        );
        assert_eq!(scrollbar.subscriptions().len(), 11);
    }

    #[test]
    fn test_unsubscribed_pair_is_ignored() {
        let mut scrollbar = scrollbar();
        let status = scrollbar.handle(
            EventSource::Document,
            InputEvent::MouseMove(PointerEvent::new(Point::new(0.0, 50.0), 0.0)),
        );
        assert_eq!(status, EventStatus::Ignored);
    }

    #[test]
    fn test_drag_subscribes_document_until_release() {
        let mut scrollbar = scrollbar();
        let press = PointerEvent::new(Point::new(195.0, 10.0), 0.0);

        assert!(scrollbar
            .handle(EventSource::ThumbY, InputEvent::MouseDown(press))
            .is_captured());
        assert_eq!(scrollbar.drag_phase(), DragPhase::Dragging(Axis::Vertical));
        assert!(scrollbar
            .subscriptions()
            .contains(EventSource::Document, EventName::MouseUp));

        scrollbar.handle(EventSource::Document, InputEvent::MouseUp(press));
        assert_eq!(scrollbar.drag_phase(), DragPhase::Released);
        assert!(!scrollbar
            .subscriptions()
            .contains(EventSource::Document, EventName::MouseMove));
        assert!(!scrollbar.frame().markers.scrolling_y);
    }

    #[test]
    fn test_touch_end_without_velocity_settles_on_first_tick() {
        let mut scrollbar = scrollbar();
        let finger = TouchEvent::finger(Point::new(50.0, 50.0), 0.0);

        scrollbar.handle(EventSource::Host, InputEvent::TouchStart(finger));
        assert_eq!(scrollbar.touch_phase(), TouchPhase::Tracking);
        scrollbar.handle(EventSource::Host, InputEvent::TouchEnd(finger));
        assert_eq!(scrollbar.touch_phase(), TouchPhase::Flinging);

        scrollbar.advance(10.0);
        assert!(!scrollbar.is_flinging());
        assert_eq!(scrollbar.touch_phase(), TouchPhase::Idle);
        assert_eq!(scrollbar.next_deadline(), None);
    }

    #[test]
    #[should_panic(expected = "after dispose")]
    #[cfg(debug_assertions)]
    fn test_use_after_dispose_asserts() {
        let mut scrollbar = scrollbar();
        scrollbar.dispose();
        scrollbar.advance(10.0);
    }
}
