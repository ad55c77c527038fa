//! The native range control a slider decorates.
//!
//! The slider never computes values from pointer input itself; the control
//! owns `min`, `max`, `step` and the value, and reports them through
//! [`RangeControl`]. [`RangeInput`] is a plain in-memory control with the
//! usual clamping and step snapping.

use std::collections::HashMap;

use crate::error::{Result, SliderError};

/// Capabilities the slider needs from the underlying range control.
pub trait RangeControl {
    fn value(&self) -> f64;

    /// Write the value. Implementations clamp it into `[min, max]`.
    fn set_value(&mut self, value: f64);

    fn min(&self) -> f64;

    fn max(&self) -> f64;

    /// Step granularity; `0` means any value.
    fn step(&self) -> f64;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, name: &str, value: &str);
}

/// In-memory range control.
#[derive(Debug, Clone)]
pub struct RangeInput {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    attributes: HashMap<String, String>,
}

impl RangeInput {
    /// Create a control over `[min, max]` with the given step, starting at
    /// `value` (clamped and snapped).
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Result<Self> {
        for (field, v) in [("min", min), ("max", max), ("step", step), ("value", value)] {
            if !v.is_finite() {
                return Err(SliderError::non_finite(field, v));
            }
        }
        if min >= max {
            return Err(SliderError::degenerate_range(min, max));
        }

        let mut input = Self {
            min,
            max,
            step: step.max(0.0),
            value: min,
            attributes: HashMap::new(),
        };
        input.set_value(value);
        Ok(input)
    }

    /// A `0..=100` control with step 1, starting at 0.
    pub fn percent() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
            attributes: HashMap::new(),
        }
    }

    fn sanitize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        let mut value = value.clamp(self.min, self.max);
        if self.step > 0.0 {
            let steps = ((value - self.min) / self.step).round();
            value = (self.min + steps * self.step).min(self.max);
        }
        value
    }
}

impl RangeControl for RangeInput {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = self.sanitize(value);
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn step(&self) -> f64 {
        self.step
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
