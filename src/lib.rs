//! seekbar - a buffered seek slider with a value bubble and keyboard dragging
//!
//! Decorates a native range control with a lower fill for the current value,
//! an upper fill for the buffered range ahead of the playhead, and a bubble
//! previewing the value under the pointer. Arrow keys step the value and
//! commit it once the keys go quiet.
//!
//! The widget is host-agnostic: see [`Slider`] for the three entry points a
//! host drives.

mod bubble;
mod buffered;
mod config;
mod constants;
mod coords;
mod error;
mod keyboard;
mod range_input;
mod refresh;
mod slider;

pub use bubble::{BubbleController, BubbleHooks, bubble_content, bubble_position};
pub use buffered::{RangeStyle, resolve_buffered_style, select_buffered_range};
pub use config::{CONFIG_VERSION, Capabilities, KeyBindingsConfig, LogLevel, SliderConfig};
pub use constants::{
    ATTACHED_MARKER, DEFAULT_KEYBOARD_STEP, KEYBOARD_DRAG_TIMEOUT, REFRESH_INTERVAL, class,
};
pub use coords::{
    BufferedRange, clamp_fraction, map_position_to_percent, map_ranges_to_percent,
    pointer_to_percent, try_value_to_fraction, value_to_fraction,
};
pub use error::{Result, SliderError};
pub use keyboard::{KeyboardDrag, KeyboardDragState, KeyboardSteps, StepDirection};
pub use range_input::{RangeControl, RangeInput};
pub use refresh::FallbackRefresh;
pub use slider::{Slider, SliderElements, SliderEvent};

#[cfg(test)]
mod tests;
