//! Slider configuration and platform capabilities.
//!
//! Capabilities are resolved once by the host and handed to each slider at
//! construction; nothing reads them from globals afterwards. The tunables
//! can be loaded from and saved to JSON.

use std::path::Path;
use std::time::Duration;

use seekbar_ui::KeyCode;
use serde::{Deserialize, Serialize};

use crate::constants::{KEYBOARD_DRAG_TIMEOUT, REFRESH_INTERVAL};
use crate::error::{Result, SliderError};
use crate::keyboard::{KeyboardSteps, StepDirection};

/// Log level setting for the demo host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// What the host platform can do natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// The native control draws its own progress; no fill elements are created.
    pub native_progress_style: bool,
    /// The host reports programmatic value writes, so the lower fill can be
    /// refreshed on demand instead of by polling.
    pub value_set_hook: bool,
    /// Size the lower fill with a `scaleX` transform rather than a width.
    pub width_with_transform: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            native_progress_style: false,
            value_set_hook: true,
            width_with_transform: false,
        }
    }
}

impl Capabilities {
    /// A host that cannot report programmatic value writes.
    pub fn without_value_set_hook() -> Self {
        Self {
            value_set_hook: false,
            ..Self::default()
        }
    }

    /// Whether the lower/upper fill elements are needed.
    pub fn needs_fill_elements(&self) -> bool {
        !self.native_progress_style
    }

    /// Whether the lower fill must be kept current by periodic polling.
    pub fn needs_fallback_refresh(&self) -> bool {
        self.needs_fill_elements() && !self.value_set_hook
    }
}

/// Keys that step the value while keyboard dragging is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    /// Keys that decrease the value
    pub step_down: Vec<KeyCode>,
    /// Keys that increase the value
    pub step_up: Vec<KeyCode>,
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self {
            step_down: vec![KeyCode::ArrowLeft],
            step_up: vec![KeyCode::ArrowRight],
        }
    }
}

impl KeyBindingsConfig {
    /// Get the step direction bound to a key, if any.
    pub fn direction_for_key(&self, key: KeyCode) -> Option<StepDirection> {
        if self.step_down.contains(&key) {
            Some(StepDirection::Down)
        } else if self.step_up.contains(&key) {
            Some(StepDirection::Up)
        } else {
            None
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Slider configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Quiet period before a keyboard adjustment commits, in milliseconds
    #[serde(default = "default_keyboard_drag_timeout_ms")]
    pub keyboard_drag_timeout_ms: u64,

    /// Fallback refresh period, in milliseconds
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Keyboard step when decreasing (falls back to `keyboard_step_up`)
    #[serde(default)]
    pub keyboard_step_down: Option<f64>,

    /// Keyboard step when increasing (falls back to `keyboard_step_down`)
    #[serde(default)]
    pub keyboard_step_up: Option<f64>,

    /// Handle arrow keys from construction, without `enable_keyboard_dragging`
    #[serde(default)]
    pub keyboard_dragging: bool,

    /// Key bindings for keyboard stepping
    #[serde(default)]
    pub keybindings: KeyBindingsConfig,

    /// Platform capabilities
    #[serde(default)]
    pub capabilities: Capabilities,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_keyboard_drag_timeout_ms() -> u64 {
    KEYBOARD_DRAG_TIMEOUT.as_millis() as u64
}

fn default_refresh_interval_ms() -> u64 {
    REFRESH_INTERVAL.as_millis() as u64
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            keyboard_drag_timeout_ms: default_keyboard_drag_timeout_ms(),
            refresh_interval_ms: default_refresh_interval_ms(),
            keyboard_step_down: None,
            keyboard_step_up: None,
            keyboard_dragging: false,
            keybindings: KeyBindingsConfig::default(),
            capabilities: Capabilities::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Use the given capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn keyboard_drag_timeout(&self) -> Duration {
        Duration::from_millis(self.keyboard_drag_timeout_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Resolved keyboard steps.
    pub fn keyboard_steps(&self) -> KeyboardSteps {
        KeyboardSteps::new(self.keyboard_step_down, self.keyboard_step_up)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(SliderError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SliderError::io(path, e))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded slider configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a JSON file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SliderError::io(parent, e))?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| SliderError::io(path, e))?;
        log::info!("Saved slider configuration to {:?}", path);
        Ok(())
    }
}
