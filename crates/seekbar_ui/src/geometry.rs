//! Measured geometry of visual elements.

/// An axis-aligned rectangle in client pixels, as measured by the host's
/// layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Zero-sized bounds at the origin (an element not laid out yet).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create new bounds.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds of the given size at the origin.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Whether the element has no horizontal extent to map positions onto.
    pub fn is_empty(&self) -> bool {
        self.width.is_nan() || self.width <= 0.0
    }
}
