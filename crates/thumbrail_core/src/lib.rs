//! Thumbrail Core
//!
//! This crate provides the foundational primitives shared by the Thumbrail
//! crates:
//!
//! - **Geometry**: pixel points, sizes, rectangles and per-axis pairs
//! - **Event Bus**: typed publish/subscribe owned by a single widget
//! - **State Machines**: enum-based interaction states
//!
//! # Example
//!
//! ```rust
//! use thumbrail_core::events::EventBus;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let mut bus = EventBus::<f64>::new();
//!
//! let sink = seen.clone();
//! let id = bus.subscribe(move |value| sink.set(*value));
//!
//! bus.emit(&42.0);
//! assert_eq!(seen.get(), 42.0);
//!
//! bus.unsubscribe(id);
//! bus.emit(&1.0);
//! assert_eq!(seen.get(), 42.0);
//! ```

pub mod events;
pub mod fsm;
pub mod geometry;

pub use events::{EventBus, KeyCode, SubscriptionId};
pub use fsm::{EventId, StateTransitions};
pub use geometry::{Axis, AxisPair, Point, Rect, Size, Vec2};
