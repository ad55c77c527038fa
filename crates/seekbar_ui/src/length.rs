use std::fmt;

/// A length written into an element's inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    /// Percentage of the containing block (`50` renders as `50%`).
    Percent(f64),

    /// Absolute client pixels.
    Px(f64),
}

impl CssLength {
    /// The numeric part, regardless of unit.
    pub fn value(&self) -> f64 {
        match self {
            CssLength::Percent(v) | CssLength::Px(v) => *v,
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Percent(v) => write!(f, "{v}%"),
            CssLength::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// A transform written into an element's inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Horizontal scale factor, `1.0` being the untransformed width.
    ScaleX(f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::ScaleX(s) => write!(f, "scaleX({s})"),
        }
    }
}
