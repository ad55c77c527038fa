//! Scenario tests driving a slider the way a host would.
//!
//! Each test attaches a slider over a `0..=100` control, feeds it events,
//! advances a manual clock and flushes frames, then inspects the elements.

mod keyboard_tests;

use std::rc::Rc;

use seekbar_ui::{Bounds, ManualClock};

use crate::{RangeInput, Slider, SliderConfig};

/// Track width used by every scenario, in pixels.
const TRACK_WIDTH: f64 = 400.0;
/// Bubble width used by every scenario, in pixels.
const BUBBLE_WIDTH: f64 = 40.0;

/// Create and attach a slider at `value`, with measured track and bubble.
fn attached_slider(config: SliderConfig, value: f64) -> (Slider<RangeInput>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new());
    let range = RangeInput::new(0.0, 100.0, 1.0, value).unwrap();
    let mut slider = Slider::new(range, &config, clock.clone());
    assert!(slider.attach());

    let elements = slider.elements_mut().unwrap();
    elements
        .bubble_track
        .set_bounds(Bounds::new(0.0, 0.0, TRACK_WIDTH, 4.0));
    elements
        .bubble
        .set_bounds(Bounds::sized(BUBBLE_WIDTH, 24.0));

    (slider, clock)
}

/// Heading markup the bubble shows by default.
fn heading(text: &str) -> String {
    format!("<h1 class=\"sliderBubbleText\">{}</h1>", text)
}
