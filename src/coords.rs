//! Conversions between value space, fraction/percent space and pixel space.
//!
//! Everything here is pure. Raw values come from the range control, raw
//! time units come from whatever media the application is presenting, and
//! styles are always written in percent of the track (or pixels for the
//! bubble).

use seekbar_ui::Bounds;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SliderError};

/// A `[start, end]` span, in raw time units or in percent of the track
/// depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferedRange {
    pub start: f64,
    pub end: f64,
}

impl BufferedRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Extent of the span, negative when reversed.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Position of `value` within `[min, max]`, as a fraction.
///
/// `max == min` is a caller error and produces a non-finite result; use
/// [`try_value_to_fraction`] when the range is not known to be valid.
pub fn value_to_fraction(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Checked variant of [`value_to_fraction`].
pub fn try_value_to_fraction(value: f64, min: f64, max: f64) -> Result<f64> {
    if !min.is_finite() {
        return Err(SliderError::non_finite("min", min));
    }
    if !max.is_finite() {
        return Err(SliderError::non_finite("max", max));
    }
    if min >= max {
        return Err(SliderError::degenerate_range(min, max));
    }
    Ok(value_to_fraction(value, min, max))
}

/// Clamp a fraction to `[0, 1]`. NaN maps to `0`.
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Convert raw-unit ranges to percent of `runtime`.
///
/// A zero or non-finite runtime yields no ranges.
pub fn map_ranges_to_percent(ranges: &[BufferedRange], runtime: f64) -> Vec<BufferedRange> {
    if runtime == 0.0 || !runtime.is_finite() {
        return Vec::new();
    }
    ranges
        .iter()
        .map(|r| BufferedRange {
            start: (r.start / runtime) * 100.0,
            end: (r.end / runtime) * 100.0,
        })
        .collect()
}

/// Convert a raw-unit position to percent of `runtime`.
pub fn map_position_to_percent(position: f64, runtime: f64) -> f64 {
    (position / runtime) * 100.0
}

/// Percent along `track` under the pointer at `client_x`.
///
/// Snapped to multiples of `step` when it is a usable step, then clamped to
/// `[0, 100]`. An unmeasured track yields `0`.
pub fn pointer_to_percent(client_x: f64, track: Bounds, step: f64) -> f64 {
    if track.is_empty() {
        return 0.0;
    }
    let mut percent = (client_x - track.x) / track.width * 100.0;
    if step != 0.0 && step.is_finite() {
        percent = round_half_up(percent / step) * step;
    }
    percent.clamp(0.0, 100.0)
}

/// Round to the nearest integer with halves going towards positive infinity.
///
/// Decided on the exact fractional part; adding `0.5` first would round
/// values just below a half up.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
