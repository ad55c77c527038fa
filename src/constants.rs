//! Global constants for the seekbar widget

use std::time::Duration;

/// Quiet period after the last keyboard step before the value is committed.
pub const KEYBOARD_DRAG_TIMEOUT: Duration = Duration::from_millis(1000);

/// Period of the fallback loop that re-derives the lower fill from the value.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Step used when neither keyboard step is configured.
pub const DEFAULT_KEYBOARD_STEP: f64 = 1.0;

/// Attribute set on the native control once the widget is attached.
pub const ATTACHED_MARKER: &str = "data-seekbar";

/// Class names written onto the visual elements.
pub mod class {
    /// Upper fill (buffered range).
    pub const BACKGROUND_UPPER: &str = "mdl-slider-background-upper";
    /// Lower fill (current value).
    pub const BACKGROUND_LOWER: &str = "mdl-slider-background-lower";
    /// Lower fill variant sized with a `scaleX` transform instead of a width.
    pub const BACKGROUND_LOWER_WITH_TRANSFORM: &str = "mdl-slider-background-lower-withtransform";
    /// Lower fill variant showing no progress.
    pub const BACKGROUND_LOWER_CLEAR: &str = "mdl-slider-background-lower-clear";
    /// Geometry reference for the bubble.
    pub const BUBBLE_TRACK: &str = "sliderBubbleTrack";
    /// The value bubble.
    pub const BUBBLE: &str = "sliderBubble";
    /// Heading wrapping default bubble text.
    pub const BUBBLE_TEXT: &str = "sliderBubbleText";
    /// Hidden state.
    pub const HIDE: &str = "hide";
}
