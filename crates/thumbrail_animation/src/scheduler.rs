//! Timer scheduler
//!
//! A single-threaded queue of cancellable delayed tasks. Nothing here sleeps or
//! spawns: the owner feeds wall-clock milliseconds into [`TimerScheduler::pop_due`]
//! from its event loop and handles each payload as it comes out.
//!
//! Ordering contract:
//! - tasks fire in deadline order;
//! - at equal deadlines one-shot tasks fire before interval tasks, so a
//!   debounced write scheduled by an interval tick lands before the next tick
//!   reads state;
//! - remaining ties fire in scheduling order.
//!
//! Interval tasks are re-armed every time they fire until cancelled.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled task
    pub struct TimerId;
}

struct Timer<T> {
    deadline: f64,
    interval: Option<f64>,
    seq: u64,
    payload: T,
}

impl<T> Timer<T> {
    fn sort_key(&self) -> (f64, bool, u64) {
        (self.deadline, self.interval.is_some(), self.seq)
    }
}

/// Cancellable one-shot and interval tasks keyed by [`TimerId`]
pub struct TimerScheduler<T> {
    timers: SlotMap<TimerId, Timer<T>>,
    now: f64,
    next_seq: u64,
}

impl<T: Clone> TimerScheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now: 0.0,
            next_seq: 0,
        }
    }

    /// Current scheduler time in milliseconds
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Move the clock forward without firing anything. Time never goes back.
    pub fn observe(&mut self, now: f64) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Run `payload` once, `delay_ms` after the current time
    pub fn schedule_after(&mut self, delay_ms: f64, payload: T) -> TimerId {
        let seq = self.bump_seq();
        self.timers.insert(Timer {
            deadline: self.now + delay_ms.max(0.0),
            interval: None,
            seq,
            payload,
        })
    }

    /// Run `payload` every `interval_ms`, first firing one interval from now
    pub fn schedule_interval(&mut self, interval_ms: f64, payload: T) -> TimerId {
        let interval_ms = interval_ms.max(f64::EPSILON);
        let seq = self.bump_seq();
        self.timers.insert(Timer {
            deadline: self.now + interval_ms,
            interval: Some(interval_ms),
            seq,
            payload,
        })
    }

    /// Cancel a task. Returns false if it already fired (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Cancel every task
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers
            .values()
            .map(|timer| timer.deadline)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Take the next task due at or before `until`
    ///
    /// The clock advances to the fired task's deadline, so anything the caller
    /// schedules while handling it is measured from that instant. Returns None
    /// (and advances the clock to `until`) once nothing else is due.
    pub fn pop_due(&mut self, until: f64) -> Option<(TimerId, T)> {
        let due = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by(|(_, a), (_, b)| {
                let (da, ia, sa) = a.sort_key();
                let (db, ib, sb) = b.sort_key();
                da.total_cmp(&db).then(ia.cmp(&ib)).then(sa.cmp(&sb))
            })
            .map(|(id, _)| id);

        let Some(id) = due else {
            self.observe(until);
            return None;
        };

        let seq = self.bump_seq();
        let timer = self.timers.get_mut(id)?;
        self.now = self.now.max(timer.deadline);

        match timer.interval {
            Some(interval) => {
                timer.deadline += interval;
                timer.seq = seq;
                Some((id, timer.payload.clone()))
            }
            None => self.timers.remove(id).map(|timer| (id, timer.payload)),
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl<T: Clone> Default for TimerScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut TimerScheduler<&'static str>, until: f64) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, payload)) = scheduler.pop_due(until) {
            fired.push(payload);
        }
        fired
    }

    #[test]
    fn test_one_shot_fires_once_at_deadline() {
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule_after(10.0, "commit");

        assert!(drain(&mut scheduler, 9.0).is_empty());
        assert_eq!(drain(&mut scheduler, 10.0), vec!["commit"]);
        assert!(drain(&mut scheduler, 100.0).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut scheduler = TimerScheduler::new();
        let id = scheduler.schedule_after(10.0, "commit");
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(drain(&mut scheduler, 50.0).is_empty());
    }

    #[test]
    fn test_interval_rearms_until_cancelled() {
        let mut scheduler = TimerScheduler::new();
        let id = scheduler.schedule_interval(10.0, "tick");

        assert_eq!(drain(&mut scheduler, 35.0), vec!["tick", "tick", "tick"]);
        assert!(scheduler.is_scheduled(id));
        assert_eq!(scheduler.next_deadline(), Some(40.0));

        scheduler.cancel(id);
        assert!(drain(&mut scheduler, 100.0).is_empty());
    }

    #[test]
    fn test_one_shot_fires_before_interval_at_same_deadline() {
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule_interval(10.0, "tick");
        scheduler.schedule_after(10.0, "commit");

        assert_eq!(drain(&mut scheduler, 10.0), vec!["commit", "tick"]);
    }

    #[test]
    fn test_clock_follows_fired_deadline() {
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule_after(10.0, "first");

        let (_, payload) = scheduler.pop_due(100.0).unwrap();
        assert_eq!(payload, "first");
        assert_eq!(scheduler.now(), 10.0);

        // Scheduled while handling "first": measured from t=10
        scheduler.schedule_after(10.0, "second");
        assert_eq!(scheduler.next_deadline(), Some(20.0));
        assert_eq!(drain(&mut scheduler, 100.0), vec!["second"]);
        assert_eq!(scheduler.now(), 100.0);
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut scheduler = TimerScheduler::<()>::new();
        scheduler.observe(50.0);
        scheduler.observe(20.0);
        assert_eq!(scheduler.now(), 50.0);
    }
}
