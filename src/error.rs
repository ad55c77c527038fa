//! Error types for the fallible edges of the slider.
//!
//! Interaction paths (events, frames, timers) never fail; they clamp or
//! no-op instead. These errors only come from construction and config I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or configuring a slider.
#[derive(Error, Debug)]
pub enum SliderError {
    /// The range has no extent, so values cannot be mapped to a fraction.
    #[error("Degenerate range: min {min} must be less than max {max}")]
    DegenerateRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// A bound or step is NaN or infinite.
    #[error("Non-finite {field}: {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The value that was rejected
        value: f64,
    },

    /// Config file could not be read or written
    #[error("IO error on {path:?}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file written by a newer version than this build understands
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        /// Version found in the file
        file_version: u32,
        /// Version this build understands
        supported_version: u32,
    },
}

impl SliderError {
    /// Create a degenerate range error.
    pub fn degenerate_range(min: f64, max: f64) -> Self {
        Self::DegenerateRange { min, max }
    }

    /// Create a non-finite value error.
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }

    /// Create an I/O error tagged with the file it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for slider operations.
pub type Result<T> = std::result::Result<T, SliderError>;
