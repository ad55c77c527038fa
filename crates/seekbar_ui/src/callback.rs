//! Optional hook wrapper for application-supplied functions.
//!
//! Widgets expose customization points (formatting, notifications) as
//! optional functions. Rather than spelling out `Option<Box<dyn Fn(T) -> R>>`
//! at every site, they store a `Callback<T, R>`.
//!
//! # Examples
//!
//! ```
//! use seekbar_ui::Callback;
//!
//! let format: Callback<f64, String> = Callback::new(|v: f64| format!("{v:.1}s"));
//! assert_eq!(format.call(2.0).as_deref(), Some("2.0s"));
//!
//! let unset: Callback<f64, String> = Callback::none();
//! assert!(unset.call(2.0).is_none());
//! ```

use std::fmt;

/// An optional boxed function from `T` to `R`.
///
/// Calling an unset callback yields `None`, which lets the caller fall back to
/// its own default without a separate presence check.
pub struct Callback<T, R> {
    f: Option<Box<dyn Fn(T) -> R>>,
}

impl<T, R> Callback<T, R> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> R + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    pub fn call(&self, value: T) -> Option<R> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

}

impl<T, R> Default for Callback<T, R> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, R> fmt::Debug for Callback<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
