//! Thumbrail Animation System
//!
//! Time-driven behavior for scroll widgets.
//!
//! # Features
//!
//! - **Timer Scheduler**: cancellable one-shot and interval tasks driven by an
//!   explicit millisecond clock, with a deterministic firing order
//! - **Momentum**: frame-to-frame velocity tracking and geometric fling decay

pub mod momentum;
pub mod scheduler;

pub use momentum::{Fling, FlingConfig, VelocityTracker};
pub use scheduler::{TimerId, TimerScheduler};
