//! seekbar_ui - host-agnostic building blocks for retained widgets
//!
//! Widgets built on this crate never touch a real render tree or event loop.
//! The host forwards input as [`Event`]s, reads back [`Element`] state after
//! each [`FrameQueue`] flush, and polls [`Timeout`]/[`Interval`] timers against
//! a [`Clock`].

mod callback;
mod element;
mod event;
mod frame;
mod geometry;
mod length;
mod timer;

pub use callback::Callback;
pub use element::{Element, Style};
pub use event::{Event, EventResult, KeyCode, KeyModifiers};
pub use frame::FrameQueue;
pub use geometry::Bounds;
pub use length::{CssLength, Transform};
pub use timer::{Clock, Interval, ManualClock, SystemClock, Timeout};
