//! Input events delivered to widgets by the host.

use serde::{Deserialize, Serialize};

/// Events that widgets can respond to.
///
/// The host translates its native input stream into these. `Input` and
/// `Change` mirror the two notifications a native range control produces:
/// a live value update while manipulating it, and a commit once done.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer moved over the widget (client-space x coordinate).
    PointerMoved { client_x: f64 },
    /// Pointer left the widget.
    PointerLeft,
    /// Live value update from the native control.
    Input,
    /// Value committed by the native control.
    Change,
    /// The value was set programmatically.
    ValueSet,
    /// Keyboard key pressed.
    KeyPressed {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
}

impl Event {
    /// Build a key press event from a host key name, without modifiers.
    pub fn key(name: &str) -> Self {
        Event::KeyPressed {
            key: KeyCode::from_key_name(name),
            modifiers: KeyModifiers::none(),
        }
    }
}

/// Outcome of dispatching an event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// The widget did not act on the event; the host keeps default handling.
    #[default]
    Ignored,
    /// The widget acted on the event but default handling continues.
    Handled,
    /// The widget acted on the event; default action and propagation must be
    /// suppressed by the host.
    Consumed,
}

impl EventResult {
    /// Whether the host should prevent the default action and stop propagation.
    pub fn is_consumed(self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Keyboard keys the widgets care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Space,
    Tab,
    /// Any key without a dedicated variant.
    Other,
}

impl KeyCode {
    /// Resolve a host key name, accepting legacy aliases.
    ///
    /// Older hosts report `"Left"` where current ones report `"ArrowLeft"`;
    /// both resolve to the same code. Unknown names map to [`KeyCode::Other`].
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
            "ArrowRight" | "Right" => KeyCode::ArrowRight,
            "ArrowUp" | "Up" => KeyCode::ArrowUp,
            "ArrowDown" | "Down" => KeyCode::ArrowDown,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "PageUp" => KeyCode::PageUp,
            "PageDown" => KeyCode::PageDown,
            "Enter" => KeyCode::Enter,
            "Escape" | "Esc" => KeyCode::Escape,
            " " | "Spacebar" => KeyCode::Space,
            "Tab" => KeyCode::Tab,
            _ => KeyCode::Other,
        }
    }

    /// Canonical key name.
    pub fn name(&self) -> &'static str {
        match self {
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Space => "Space",
            KeyCode::Tab => "Tab",
            KeyCode::Other => "Other",
        }
    }
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    /// No modifiers held.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_aliases_resolve_to_same_code() {
        assert_eq!(KeyCode::from_key_name("ArrowLeft"), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_key_name("Left"), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_key_name("ArrowRight"), KeyCode::ArrowRight);
        assert_eq!(KeyCode::from_key_name("Right"), KeyCode::ArrowRight);
    }

    #[test]
    fn test_unknown_key_is_other() {
        assert_eq!(KeyCode::from_key_name("F13"), KeyCode::Other);
        assert_eq!(KeyCode::from_key_name(""), KeyCode::Other);
    }

    #[test]
    fn test_name_round_trips_through_lookup() {
        for key in [
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Enter,
        ] {
            assert_eq!(KeyCode::from_key_name(key.name()), key);
        }
    }

    #[test]
    fn test_key_event_builder() {
        let event = Event::key("Right");
        assert_eq!(
            event,
            Event::KeyPressed {
                key: KeyCode::ArrowRight,
                modifiers: KeyModifiers::none(),
            }
        );
    }

    #[test]
    fn test_only_consumed_suppresses_default() {
        assert!(EventResult::Consumed.is_consumed());
        assert!(!EventResult::Handled.is_consumed());
        assert!(!EventResult::Ignored.is_consumed());
    }
}
