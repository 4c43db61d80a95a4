//! Scroll offset authority
//!
//! The single owner of the committed scroll offsets. Gestures never write an
//! offset directly: they submit an [`OffsetRequest`], which is clamped,
//! compared against the committed value and either committed right away or
//! deferred. A deferred commit is replaced by any later request on the same
//! axis, so bursts of input collapse into one commit carrying the last value.

use thumbrail_animation::{TimerId, TimerScheduler};
use thumbrail_core::{Axis, AxisPair, Point};

use crate::host::Host;
use crate::scrollbar::Task;

/// A requested offset on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRequest {
    pub axis: Axis,
    pub value: f64,
}

impl OffsetRequest {
    pub fn new(axis: Axis, value: f64) -> Self {
        Self { axis, value }
    }
}

/// Change notification payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollChanged {
    pub axis: Axis,
    pub old_value: f64,
    pub new_value: f64,
}

/// When a request should be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// After the configured debounce delay
    Debounced,
    /// Synchronously
    Immediate,
}

/// What a request turned into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestOutcome {
    /// The clamped value equals the committed offset; any pending commit was
    /// dropped
    Unchanged,
    /// A commit is scheduled
    Deferred(TimerId),
    /// Commit this now
    Immediate(OffsetRequest),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    timer: TimerId,
    value: f64,
}

/// Owner of the committed offsets and their pending commits
#[derive(Debug, Clone, Default)]
pub struct OffsetAuthority {
    offsets: AxisPair<f64>,
    pending: AxisPair<Option<Pending>>,
    range_scroll: bool,
    debounce_ms: f64,
}

impl OffsetAuthority {
    pub fn new(range_scroll: bool, debounce_ms: f64) -> Self {
        Self {
            range_scroll,
            debounce_ms,
            ..Default::default()
        }
    }

    /// Committed offset
    pub fn offset(&self, axis: Axis) -> f64 {
        *self.offsets.get(axis)
    }

    pub fn offsets(&self) -> AxisPair<f64> {
        self.offsets
    }

    /// The value this axis is heading to: the pending commit if one exists,
    /// otherwise the committed offset
    pub fn target(&self, axis: Axis) -> f64 {
        self.pending
            .get(axis)
            .map_or_else(|| self.offset(axis), |pending| pending.value)
    }

    pub fn targets(&self) -> AxisPair<f64> {
        AxisPair::new(self.target(Axis::Horizontal), self.target(Axis::Vertical))
    }

    pub fn has_pending(&self, axis: Axis) -> bool {
        self.pending.get(axis).is_some()
    }

    pub fn is_range_scroll(&self) -> bool {
        self.range_scroll
    }

    pub fn configure(&mut self, range_scroll: bool, debounce_ms: f64) {
        self.range_scroll = range_scroll;
        self.debounce_ms = debounce_ms;
    }

    /// Submit a request
    ///
    /// The value is clamped to `[0, max_offset]`. Any pending commit for the
    /// axis is cancelled first.
    pub(crate) fn request(
        &mut self,
        request: OffsetRequest,
        max_offset: f64,
        delay: Delay,
        timers: &mut TimerScheduler<Task>,
    ) -> RequestOutcome {
        let axis = request.axis;
        let value = request.value.min(max_offset.max(0.0)).max(0.0);

        if let Some(pending) = self.pending.get_mut(axis).take() {
            timers.cancel(pending.timer);
        }

        if value == self.offset(axis) {
            return RequestOutcome::Unchanged;
        }

        let clamped = OffsetRequest::new(axis, value);
        match delay {
            Delay::Immediate => RequestOutcome::Immediate(clamped),
            Delay::Debounced if self.debounce_ms <= 0.0 => RequestOutcome::Immediate(clamped),
            Delay::Debounced => {
                let timer = timers.schedule_after(self.debounce_ms, Task::Commit(clamped));
                *self.pending.get_mut(axis) = Some(Pending { timer, value });
                tracing::trace!(?axis, value, "commit deferred");
                RequestOutcome::Deferred(timer)
            }
        }
    }

    /// Forget a pending commit whose timer just fired. Returns false for a
    /// stale timer that no longer owns the axis.
    pub fn settle(&mut self, timer: TimerId, axis: Axis) -> bool {
        let slot = self.pending.get_mut(axis);
        if matches!(slot, Some(pending) if pending.timer == timer) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Make a value the committed offset
    ///
    /// Writes the host's native offset unless in range-scroll mode. Returns the
    /// change, or None if the value is already committed.
    pub fn commit<H: Host>(&mut self, request: OffsetRequest, host: &mut H) -> Option<ScrollChanged> {
        let axis = request.axis;
        let old_value = self.offset(axis);
        if request.value == old_value {
            return None;
        }

        *self.offsets.get_mut(axis) = request.value;
        if !self.range_scroll {
            host.set_scroll_position(axis, request.value);
        }

        tracing::trace!(?axis, old_value, new_value = request.value, "offset committed");
        Some(ScrollChanged {
            axis,
            old_value,
            new_value: request.value,
        })
    }

    /// Adopt the host's native offsets without notifying anyone
    pub fn sync_from_host(&mut self, position: Point) {
        self.offsets = AxisPair::new(position.x, position.y);
    }

    /// Cancel every pending commit
    pub(crate) fn cancel_pending(&mut self, timers: &mut TimerScheduler<Task>) {
        for axis in Axis::ALL {
            if let Some(pending) = self.pending.get_mut(axis).take() {
                timers.cancel(pending.timer);
            }
        }
    }
}
