//! Buffered-range selection for the upper fill.
//!
//! Only one range is drawn at a time: the first one, in caller order, that
//! still extends past the current position. Everything behind the playhead
//! is irrelevant to the viewer and skipped.

use seekbar_ui::{CssLength, Element};

use crate::coords::{BufferedRange, map_position_to_percent, map_ranges_to_percent};

/// Left offset and width of the upper fill, both in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStyle {
    pub left: f64,
    pub width: f64,
}

impl RangeStyle {
    /// The "no buffered range visible" style.
    pub const NONE: Self = Self {
        left: 0.0,
        width: 0.0,
    };

    /// Style for a percent-space range: the start is floored at `0` and the
    /// width clamped to `[0, 100]`.
    pub fn from_range(range: BufferedRange) -> Self {
        Self {
            left: range.start.max(0.0),
            width: range.width().clamp(0.0, 100.0),
        }
    }

    /// Write this style onto the upper fill element.
    pub fn apply(&self, element: &mut Element) {
        element.set_left(CssLength::Percent(self.left));
        element.set_width(CssLength::Percent(self.width));
    }
}

/// First range whose end lies beyond `position`, or the first range at all
/// when there is no position.
pub fn select_buffered_range(
    ranges: &[BufferedRange],
    position: Option<f64>,
) -> Option<BufferedRange> {
    ranges
        .iter()
        .copied()
        .find(|range| !matches!(position, Some(p) if p >= range.end))
}

/// Resolve the upper fill style for a set of ranges.
///
/// With a `runtime`, ranges and position are raw units and are first mapped
/// to percent; without one they are taken to be percent already.
pub fn resolve_buffered_style(
    ranges: &[BufferedRange],
    runtime: Option<f64>,
    position: Option<f64>,
) -> RangeStyle {
    let selected = match runtime {
        Some(runtime) => {
            let mapped = map_ranges_to_percent(ranges, runtime);
            let position = position.map(|p| map_position_to_percent(p, runtime));
            select_buffered_range(&mapped, position)
        }
        None => select_buffered_range(ranges, position),
    };

    match selected {
        Some(range) => RangeStyle::from_range(range),
        None => RangeStyle::NONE,
    }
}
