//! Value bubble: placement, content and visibility.
//!
//! The bubble floats above the track and previews the value under the
//! pointer (or the live value while dragging). Placement and content are
//! computed at frame time from measured geometry; visibility flips
//! immediately on input.

use seekbar_ui::{Callback, CssLength, Element};

use crate::constants::class;
use crate::coords::round_half_up;

/// Application hooks for formatting the bubble.
///
/// `html` wins over `text`; with neither set the rounded value is shown.
#[derive(Debug, Default)]
pub struct BubbleHooks {
    /// Full markup for the bubble.
    pub html: Callback<f64, String>,
    /// Display text, wrapped in the default heading.
    pub text: Callback<f64, String>,
}

/// Horizontal bubble center in track pixels for a value in percent.
///
/// The bubble center is kept at least half a bubble away from either end of
/// the track so the bubble never overhangs it.
pub fn bubble_position(track_width: f64, bubble_width: f64, percent: f64) -> f64 {
    let half = bubble_width / 2.0;
    let raw = track_width * percent / 100.0;
    raw.max(half).min(track_width - half)
}

/// Markup shown inside the bubble for `value`.
pub fn bubble_content(value: f64, hooks: &BubbleHooks) -> String {
    if let Some(html) = hooks.html.call(value) {
        return html;
    }
    let text = hooks
        .text
        .call(value)
        .unwrap_or_else(|| round_half_up(value).to_string());
    format!("<h1 class=\"{}\">{}</h1>", class::BUBBLE_TEXT, text)
}

/// Tracks bubble visibility and renders it.
#[derive(Debug, Default)]
pub struct BubbleController {
    hooks: BubbleHooks,
    /// Cached visibility, mirrors the absence of the hide class.
    visible: bool,
}

impl BubbleController {
    /// Re-read the cached visibility from a freshly created `bubble`.
    pub fn sync(&mut self, bubble: &Element) {
        self.visible = !bubble.has_class(class::HIDE);
    }

    pub fn hooks_mut(&mut self) -> &mut BubbleHooks {
        &mut self.hooks
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the bubble, skipping the write if already shown.
    pub fn show(&mut self, bubble: &mut Element) {
        if !self.visible {
            bubble.remove_class(class::HIDE);
            self.visible = true;
            log::trace!("Bubble: shown");
        }
    }

    /// Hide the bubble, skipping the write if already hidden.
    pub fn hide(&mut self, bubble: &mut Element) {
        if self.visible {
            bubble.add_class(class::HIDE);
            self.visible = false;
            log::trace!("Bubble: hidden");
        }
    }

    /// Place the bubble over `value` percent of the track and fill in its
    /// content. Called from the frame flush.
    pub fn render(&self, track: &Element, bubble: &mut Element, value: f64) {
        let track_width = track.bounds().width;
        let bubble_width = bubble.bounds().width;
        let left = bubble_position(track_width, bubble_width, value);

        bubble.set_left(CssLength::Px(left));
        bubble.set_inner_html(bubble_content(value, &self.hooks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbar_ui::Bounds;

    #[test]
    fn test_position_is_proportional_in_the_middle() {
        assert_eq!(bubble_position(400.0, 40.0, 50.0), 200.0);
    }

    #[test]
    fn test_position_clamped_at_both_ends() {
        assert_eq!(bubble_position(400.0, 40.0, 0.0), 20.0);
        assert_eq!(bubble_position(400.0, 40.0, 2.0), 20.0);
        assert_eq!(bubble_position(400.0, 40.0, 100.0), 380.0);
        assert_eq!(bubble_position(400.0, 40.0, 99.0), 380.0);
    }

    #[test]
    fn test_position_always_within_half_bubble_of_edges() {
        let (track, bubble) = (317.0, 52.0);
        for i in 0..=200 {
            let percent = i as f64 / 2.0;
            let pos = bubble_position(track, bubble, percent);
            assert!(pos >= bubble / 2.0, "{percent}% -> {pos}");
            assert!(pos <= track - bubble / 2.0, "{percent}% -> {pos}");
        }
    }

    #[test]
    fn test_bubble_wider_than_track_pins_to_upper_bound() {
        assert_eq!(bubble_position(30.0, 40.0, 50.0), 10.0);
    }

    #[test]
    fn test_default_content_rounds_value() {
        let hooks = BubbleHooks::default();
        assert_eq!(
            bubble_content(42.5, &hooks),
            "<h1 class=\"sliderBubbleText\">43</h1>"
        );
        assert_eq!(
            bubble_content(7.2, &hooks),
            "<h1 class=\"sliderBubbleText\">7</h1>"
        );
    }

    #[test]
    fn test_text_hook_is_wrapped() {
        let hooks = BubbleHooks {
            text: Callback::new(|v: f64| format!("{v}s")),
            ..Default::default()
        };
        assert_eq!(
            bubble_content(12.0, &hooks),
            "<h1 class=\"sliderBubbleText\">12s</h1>"
        );
    }

    #[test]
    fn test_html_hook_wins_over_text_hook() {
        let hooks = BubbleHooks {
            html: Callback::new(|v: f64| format!("<span>{v}</span>")),
            text: Callback::new(|_: f64| "unused".to_string()),
        };
        assert_eq!(bubble_content(3.0, &hooks), "<span>3</span>");
    }

    #[test]
    fn test_visibility_is_cached() {
        let mut bubble = Element::with_classes(&[class::BUBBLE, class::HIDE]);
        let mut controller = BubbleController::default();
        controller.sync(&bubble);
        assert!(!controller.is_visible());

        controller.show(&mut bubble);
        controller.show(&mut bubble);
        assert!(!bubble.has_class(class::HIDE));
        assert_eq!(bubble.mutation_count(), 1);

        controller.hide(&mut bubble);
        controller.hide(&mut bubble);
        assert!(bubble.has_class(class::HIDE));
        assert_eq!(bubble.mutation_count(), 2);
    }

    #[test]
    fn test_render_writes_position_and_content() {
        let mut track = Element::with_classes(&[class::BUBBLE_TRACK]);
        track.set_bounds(Bounds::sized(500.0, 4.0));
        let mut bubble = Element::with_classes(&[class::BUBBLE]);
        bubble.set_bounds(Bounds::sized(60.0, 30.0));

        let controller = BubbleController::default();
        controller.render(&track, &mut bubble, 20.0);

        assert_eq!(bubble.style().left, Some(CssLength::Px(100.0)));
        assert_eq!(bubble.inner_html(), "<h1 class=\"sliderBubbleText\">20</h1>");
    }
}
