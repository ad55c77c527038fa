//! Tests for keyboard stepping and the debounced commit.

use seekbar_ui::{CssLength, Event, EventResult};

use super::{attached_slider, heading};
use crate::{Capabilities, KeyboardSteps, SliderConfig, SliderEvent};

fn keyboard_config() -> SliderConfig {
    SliderConfig {
        keyboard_dragging: true,
        ..SliderConfig::default()
    }
}

#[test]
fn test_keys_ignored_until_enabled() {
    let (mut slider, _clock) = attached_slider(SliderConfig::default(), 50.0);

    assert_eq!(slider.handle_event(&Event::key("ArrowRight")), EventResult::Ignored);
    assert_eq!(slider.value(), 50.0);
    assert!(slider.drain_events().is_empty());

    slider.enable_keyboard_dragging();
    slider.enable_keyboard_dragging();
    assert!(slider.is_keyboard_dragging_enabled());
    assert_eq!(slider.handle_event(&Event::key("ArrowRight")), EventResult::Consumed);
    assert_eq!(slider.value(), 51.0);
}

#[test]
fn test_key_aliases_and_unbound_keys() {
    let (mut slider, _clock) = attached_slider(keyboard_config(), 50.0);

    assert!(slider.handle_event(&Event::key("Left")).is_consumed());
    assert!(slider.handle_event(&Event::key("Left")).is_consumed());
    assert!(slider.handle_event(&Event::key("Right")).is_consumed());
    assert_eq!(slider.value(), 49.0);

    assert_eq!(slider.handle_event(&Event::key("Enter")), EventResult::Ignored);
    assert_eq!(slider.handle_event(&Event::key("ArrowUp")), EventResult::Ignored);
    assert_eq!(slider.value(), 49.0);
}

#[test]
fn test_rapid_steps_commit_once() {
    let (mut slider, clock) = attached_slider(keyboard_config(), 50.0);

    for _ in 0..3 {
        slider.handle_event(&Event::key("ArrowRight"));
        clock.advance_ms(300);
        slider.poll_timers();
    }
    assert!(slider.is_keyboard_dragging());
    assert_eq!(
        slider.drain_events(),
        vec![
            SliderEvent::Input { value: 51.0 },
            SliderEvent::Input { value: 52.0 },
            SliderEvent::Input { value: 53.0 },
        ]
    );

    // Last step at 600ms, so the commit is due at 1600ms
    clock.set(std::time::Duration::from_millis(1_599));
    slider.poll_timers();
    assert!(slider.drain_events().is_empty());

    clock.advance_ms(1);
    slider.poll_timers();
    assert_eq!(slider.drain_events(), vec![SliderEvent::Change { value: 53.0 }]);
    assert!(!slider.is_keyboard_dragging());

    clock.advance_ms(5_000);
    slider.poll_timers();
    assert!(slider.drain_events().is_empty());
}

#[test]
fn test_step_before_expiry_restarts_window() {
    let (mut slider, clock) = attached_slider(keyboard_config(), 50.0);

    slider.handle_event(&Event::key("ArrowLeft"));
    clock.advance_ms(900);
    slider.handle_event(&Event::key("ArrowLeft"));
    clock.advance_ms(100);
    slider.poll_timers();
    assert!(slider.is_keyboard_dragging());

    clock.advance_ms(800);
    slider.poll_timers();
    assert!(slider.is_keyboard_dragging());

    clock.advance_ms(100);
    slider.poll_timers();
    assert!(!slider.is_keyboard_dragging());
    let changes: Vec<_> = slider
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, SliderEvent::Change { .. }))
        .collect();
    assert_eq!(changes, vec![SliderEvent::Change { value: 48.0 }]);
}

#[test]
fn test_step_is_clamped_to_range() {
    let (mut slider, _clock) = attached_slider(keyboard_config(), 99.0);
    slider.set_keyboard_steps(Some(5.0), None);

    slider.handle_event(&Event::key("ArrowRight"));
    assert_eq!(slider.value(), 100.0);
    slider.handle_event(&Event::key("ArrowRight"));
    assert_eq!(slider.value(), 100.0);

    let (mut slider, _clock) = attached_slider(keyboard_config(), 2.0);
    slider.set_keyboard_steps(Some(5.0), None);
    slider.handle_event(&Event::key("ArrowLeft"));
    assert_eq!(slider.value(), 0.0);
    assert_eq!(slider.drain_events(), vec![SliderEvent::Input { value: 0.0 }]);
}

#[test]
fn test_keyboard_steps_fall_back() {
    let (mut slider, _clock) = attached_slider(keyboard_config(), 50.0);
    assert_eq!(slider.keyboard_steps(), KeyboardSteps::new(None, None));

    slider.set_keyboard_steps(None, Some(3.0));
    assert_eq!((slider.keyboard_steps().down(), slider.keyboard_steps().up()), (3.0, 3.0));
    slider.handle_event(&Event::key("ArrowLeft"));
    assert_eq!(slider.value(), 47.0);

    slider.set_keyboard_steps(Some(10.0), Some(2.0));
    slider.handle_event(&Event::key("ArrowLeft"));
    slider.handle_event(&Event::key("ArrowRight"));
    assert_eq!(slider.value(), 39.0);

    slider.set_keyboard_steps(None, None);
    assert_eq!((slider.keyboard_steps().down(), slider.keyboard_steps().up()), (1.0, 1.0));
}

#[test]
fn test_keyboard_input_drives_bubble_like_native_input() {
    let (mut slider, clock) = attached_slider(keyboard_config(), 50.0);

    slider.handle_event(&Event::key("ArrowRight"));
    assert!(slider.is_dragging());
    assert!(slider.is_bubble_visible());
    slider.run_frame();
    assert_eq!(slider.elements().unwrap().bubble.inner_html(), heading("51"));

    clock.advance_ms(1_000);
    slider.poll_timers();
    assert!(!slider.is_dragging());
    assert!(!slider.is_bubble_visible());
}

#[test]
fn test_lower_fill_held_during_keyboard_drag() {
    let config = keyboard_config().with_capabilities(Capabilities::without_value_set_hook());
    let (mut slider, clock) = attached_slider(config, 50.0);
    assert!(slider.is_refresh_running());

    slider.handle_event(&Event::key("ArrowRight"));
    for _ in 0..5 {
        clock.advance_ms(100);
        slider.poll_timers();
    }
    slider.run_frame();
    let lower = slider.elements().unwrap().background_lower.as_ref().unwrap();
    assert_eq!(lower.style().width, None);

    clock.advance_ms(500);
    slider.poll_timers();
    slider.run_frame();
    let lower = slider.elements().unwrap().background_lower.as_ref().unwrap();
    assert_eq!(lower.style().width, Some(CssLength::Percent(51.0)));
}

#[test]
fn test_set_value_skipped_during_keyboard_drag() {
    let (mut slider, clock) = attached_slider(keyboard_config(), 10.0);

    slider.handle_event(&Event::key("ArrowRight"));
    slider.set_value(80.0);
    slider.run_frame();
    let lower = slider.elements().unwrap().background_lower.as_ref().unwrap();
    assert_eq!(lower.style().width, None);

    clock.advance_ms(1_000);
    slider.poll_timers();
    assert_eq!(slider.drain_events().last(), Some(&SliderEvent::Change { value: 80.0 }));
    slider.run_frame();
    let lower = slider.elements().unwrap().background_lower.as_ref().unwrap();
    assert_eq!(lower.style().width, Some(CssLength::Percent(80.0)));
}

#[test]
fn test_synthesized_events_bubble_and_cannot_be_cancelled() {
    let input = SliderEvent::Input { value: 1.0 };
    let change = SliderEvent::Change { value: 2.0 };
    assert_eq!((input.name(), input.value()), ("input", 1.0));
    assert_eq!((change.name(), change.value()), ("change", 2.0));
    for event in [input, change] {
        assert!(event.bubbles());
        assert!(!event.cancelable());
    }
}

#[test]
fn test_custom_drag_timeout() {
    let config = SliderConfig {
        keyboard_drag_timeout_ms: 250,
        ..keyboard_config()
    };
    let (mut slider, clock) = attached_slider(config, 50.0);

    slider.handle_event(&Event::key("ArrowLeft"));
    clock.advance_ms(250);
    slider.poll_timers();
    assert!(!slider.is_keyboard_dragging());
    assert_eq!(slider.drain_events().len(), 2);
}
