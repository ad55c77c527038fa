//! Keyboard dragging: step sizes and the debounced commit state machine.
//!
//! Arrow keys move the value immediately but do not commit it. Each step
//! (re)arms a quiet-period timer; once it expires without another step the
//! slider commits with a synthetic change. Rapid key repeats therefore yield
//! one commit for the whole adjustment.

use std::time::Duration;

use seekbar_ui::Timeout;

use crate::constants::{DEFAULT_KEYBOARD_STEP, KEYBOARD_DRAG_TIMEOUT};

/// Which way a keyboard step moves the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Down,
    Up,
}

/// Step sizes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSteps {
    down: f64,
    up: f64,
}

impl Default for KeyboardSteps {
    fn default() -> Self {
        Self {
            down: DEFAULT_KEYBOARD_STEP,
            up: DEFAULT_KEYBOARD_STEP,
        }
    }
}

impl KeyboardSteps {
    /// Build steps where each side falls back to the other, then to the
    /// default. Zero, negative and non-finite steps count as unset.
    pub fn new(down: Option<f64>, up: Option<f64>) -> Self {
        let down = down.filter(|s| usable_step(*s));
        let up = up.filter(|s| usable_step(*s));
        Self {
            down: down.or(up).unwrap_or(DEFAULT_KEYBOARD_STEP),
            up: up.or(down).unwrap_or(DEFAULT_KEYBOARD_STEP),
        }
    }

    pub fn down(&self) -> f64 {
        self.down
    }

    pub fn up(&self) -> f64 {
        self.up
    }

    /// Signed value delta for one step in `direction`.
    pub fn delta(&self, direction: StepDirection) -> f64 {
        match direction {
            StepDirection::Down => -self.down,
            StepDirection::Up => self.up,
        }
    }
}

fn usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

/// Keyboard drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardDragState {
    /// No keyboard adjustment pending
    #[default]
    Idle,
    /// Stepping; the value commits at `deadline` unless another step arrives
    Dragging { deadline: Duration },
}

/// Debounced keyboard drag state machine.
///
/// Time is passed in explicitly so the machine runs identically under a
/// wall clock and a manual test clock.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardDrag {
    timer: Timeout,
}

impl Default for KeyboardDrag {
    fn default() -> Self {
        Self::new(KEYBOARD_DRAG_TIMEOUT)
    }
}

impl KeyboardDrag {
    /// Create an idle machine committing `timeout` after the last step.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timer: Timeout::new(timeout),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timer.delay()
    }

    pub fn state(&self) -> KeyboardDragState {
        match self.timer.deadline() {
            Some(deadline) => KeyboardDragState::Dragging { deadline },
            None => KeyboardDragState::Idle,
        }
    }

    /// Check if a keyboard adjustment is pending
    pub fn is_dragging(&self) -> bool {
        self.timer.is_armed()
    }

    /// Register a step at `now`, entering or extending the drag.
    pub fn step(&mut self, now: Duration) {
        let restarted = self.timer.is_armed();
        self.timer.arm(now);
        log::debug!(
            "Keyboard drag: {} at {:?}, commit due at {:?}",
            if restarted { "restarted" } else { "started" },
            now,
            self.timer.deadline()
        );
    }

    /// Advance to `now`. Returns `true` exactly once when the quiet period
    /// has elapsed, at which point the machine is idle again and the caller
    /// must commit.
    pub fn poll(&mut self, now: Duration) -> bool {
        let fired = self.timer.poll(now);
        if fired {
            log::debug!("Keyboard drag: quiet period elapsed at {:?}", now);
        }
        fired
    }

    /// Abandon a pending adjustment without committing.
    pub fn cancel(&mut self) {
        if self.timer.is_armed() {
            log::debug!("Keyboard drag: cancelled");
        }
        self.timer.cancel();
    }
}
