//! The slider instance: lifecycle, event dispatch, frames and timers.
//!
//! A [`Slider`] decorates a [`RangeControl`] with a lower fill (current
//! value), an upper fill (one buffered range) and a value bubble. The host
//! drives it from three entry points:
//!
//! - [`Slider::handle_event`] for every input event on the control,
//! - [`Slider::run_frame`] once per animation frame,
//! - [`Slider::poll_timers`] from its event loop.
//!
//! Events the slider synthesizes itself (keyboard input and the debounced
//! commit) are queued for the host and read back with
//! [`Slider::drain_events`].

use std::rc::Rc;

use seekbar_ui::{Clock, CssLength, Element, Event, EventResult, FrameQueue, KeyCode, Transform};

use crate::bubble::{BubbleController, BubbleHooks};
use crate::buffered::resolve_buffered_style;
use crate::config::{Capabilities, KeyBindingsConfig, SliderConfig};
use crate::constants::{ATTACHED_MARKER, class};
use crate::coords::{BufferedRange, clamp_fraction, pointer_to_percent, value_to_fraction};
use crate::keyboard::{KeyboardDrag, KeyboardSteps, StepDirection};
use crate::range_input::RangeControl;
use crate::refresh::FallbackRefresh;

/// Notification synthesized by the slider.
///
/// Both kinds bubble and cannot be cancelled, like the native control's own
/// `input`/`change`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// The value moved without committing (keyboard step).
    Input { value: f64 },
    /// A keyboard adjustment committed after the quiet period.
    Change { value: f64 },
}

impl SliderEvent {
    /// DOM-style event name.
    pub fn name(&self) -> &'static str {
        match self {
            SliderEvent::Input { .. } => "input",
            SliderEvent::Change { .. } => "change",
        }
    }

    /// Value carried by the event.
    pub fn value(&self) -> f64 {
        match *self {
            SliderEvent::Input { value } | SliderEvent::Change { value } => value,
        }
    }

    /// Always `true`: the event propagates to ancestors.
    pub fn bubbles(&self) -> bool {
        true
    }

    /// Always `false`: listeners cannot prevent the default action.
    pub fn cancelable(&self) -> bool {
        false
    }
}

/// Visual elements created at attach.
#[derive(Debug, Clone)]
pub struct SliderElements {
    /// Fill up to the current value. Absent with native progress styling.
    pub background_lower: Option<Element>,
    /// Fill for the selected buffered range. Absent with native progress styling.
    pub background_upper: Option<Element>,
    /// Geometry reference the bubble is positioned against.
    pub bubble_track: Element,
    /// The value bubble, hidden until hover or input.
    pub bubble: Element,
}

impl SliderElements {
    fn create(capabilities: Capabilities) -> Self {
        let (background_lower, background_upper) = if capabilities.needs_fill_elements() {
            let lower = if capabilities.width_with_transform {
                Element::with_classes(&[
                    class::BACKGROUND_LOWER,
                    class::BACKGROUND_LOWER_WITH_TRANSFORM,
                ])
            } else {
                Element::with_classes(&[class::BACKGROUND_LOWER])
            };
            (
                Some(lower),
                Some(Element::with_classes(&[class::BACKGROUND_UPPER])),
            )
        } else {
            (None, None)
        };

        Self {
            background_lower,
            background_upper,
            bubble_track: Element::with_classes(&[class::BUBBLE_TRACK]),
            bubble: Element::with_classes(&[class::BUBBLE, class::HIDE]),
        }
    }
}

/// Targets of deferred frame work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameTarget {
    LowerFill,
    Bubble,
}

/// A buffered seek slider bound to a range control.
pub struct Slider<R: RangeControl> {
    range: R,
    capabilities: Capabilities,
    keybindings: KeyBindingsConfig,
    clock: Rc<dyn Clock>,
    elements: Option<SliderElements>,
    bubble: BubbleController,
    /// Pending frame work, each carrying the value captured when scheduled.
    frames: FrameQueue<FrameTarget, f64>,
    /// Pointer drag in progress (between native input and change).
    dragging: bool,
    keyboard_enabled: bool,
    keyboard_steps: KeyboardSteps,
    keyboard_drag: KeyboardDrag,
    refresh: FallbackRefresh,
    outbox: Vec<SliderEvent>,
}

impl<R: RangeControl> std::fmt::Debug for Slider<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("value", &self.range.value())
            .field("capabilities", &self.capabilities)
            .field("attached", &self.elements.is_some())
            .field("dragging", &self.dragging)
            .field("keyboard_drag", &self.keyboard_drag.state())
            .field("pending_events", &self.outbox.len())
            .finish()
    }
}

impl<R: RangeControl> Slider<R> {
    /// Create a detached slider over `range`.
    pub fn new(range: R, config: &SliderConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            range,
            capabilities: config.capabilities,
            keybindings: config.keybindings.clone(),
            clock,
            elements: None,
            bubble: BubbleController::default(),
            frames: FrameQueue::new(),
            dragging: false,
            keyboard_enabled: config.keyboard_dragging,
            keyboard_steps: config.keyboard_steps(),
            keyboard_drag: KeyboardDrag::new(config.keyboard_drag_timeout()),
            refresh: FallbackRefresh::new(config.refresh_interval()),
            outbox: Vec::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create the visual elements and start any needed refresh loop.
    ///
    /// Returns `false` without touching anything when the control already
    /// carries the attach marker.
    pub fn attach(&mut self) -> bool {
        if self.is_attached() {
            log::debug!("Slider: attach skipped, control already decorated");
            return false;
        }
        self.range.set_attribute(ATTACHED_MARKER, "true");

        let elements = SliderElements::create(self.capabilities);
        self.bubble.sync(&elements.bubble);
        self.elements = Some(elements);

        if self.capabilities.needs_fallback_refresh() {
            self.refresh.start(self.clock.now());
        }

        log::debug!(
            "Slider: attached (fills: {}, fallback refresh: {})",
            self.capabilities.needs_fill_elements(),
            self.refresh.is_running()
        );
        true
    }

    /// Release the visual elements and cancel all timers and frame work.
    ///
    /// A pending keyboard commit is dropped, so the drag it started is
    /// ended here instead of by its `change`.
    pub fn detach(&mut self) {
        self.keyboard_drag.cancel();
        self.dragging = false;
        self.frames.clear();
        if self.elements.is_none() && !self.refresh.is_running() {
            return;
        }
        self.refresh.stop();
        self.elements = None;
        self.range.set_attribute(ATTACHED_MARKER, "false");
        log::debug!("Slider: detached");
    }

    /// Whether the control carries the attach marker.
    pub fn is_attached(&self) -> bool {
        self.range.attribute(ATTACHED_MARKER) == Some("true")
    }

    // =========================================================================
    // Event Dispatch
    // =========================================================================

    /// Dispatch one host event.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        log::trace!("Slider: event {:?}", event);
        match event {
            Event::Input => {
                self.on_input();
                EventResult::Handled
            }
            Event::Change => {
                self.on_change();
                EventResult::Handled
            }
            Event::PointerMoved { client_x } => {
                self.on_pointer_moved(*client_x);
                EventResult::Handled
            }
            Event::PointerLeft => {
                self.hide_bubble();
                EventResult::Handled
            }
            Event::ValueSet => {
                if self.observes_value_set() {
                    self.update_values();
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
            Event::KeyPressed { key, .. } => self.on_key(*key),
        }
    }

    fn on_input(&mut self) {
        self.dragging = true;
        self.frames.schedule(FrameTarget::Bubble, self.range.value());
        self.show_bubble();
    }

    fn on_change(&mut self) {
        self.dragging = false;
        self.update_values();
        self.hide_bubble();
    }

    fn on_pointer_moved(&mut self, client_x: f64) {
        if self.dragging {
            return;
        }
        let Some(elements) = self.elements.as_ref() else {
            return;
        };
        let track = elements.bubble_track.bounds();
        let percent = pointer_to_percent(client_x, track, self.range.step());
        self.frames.schedule(FrameTarget::Bubble, percent);
        self.show_bubble();
    }

    fn on_key(&mut self, key: KeyCode) -> EventResult {
        if !self.keyboard_enabled {
            return EventResult::Ignored;
        }
        match self.keybindings.direction_for_key(key) {
            Some(direction) => {
                self.step_keyboard(direction);
                EventResult::Consumed
            }
            None => {
                log::trace!("Slider: key {} not bound", key.name());
                EventResult::Ignored
            }
        }
    }

    fn show_bubble(&mut self) {
        if let Some(elements) = self.elements.as_mut() {
            self.bubble.show(&mut elements.bubble);
        }
    }

    fn hide_bubble(&mut self) {
        if let Some(elements) = self.elements.as_mut() {
            self.bubble.hide(&mut elements.bubble);
        }
    }

    fn observes_value_set(&self) -> bool {
        self.capabilities.needs_fill_elements() && self.capabilities.value_set_hook
    }

    // =========================================================================
    // Keyboard Dragging
    // =========================================================================

    /// Start handling arrow keys. Calling it again has no effect.
    pub fn enable_keyboard_dragging(&mut self) {
        if !self.keyboard_enabled {
            self.keyboard_enabled = true;
            log::debug!("Slider: keyboard dragging enabled");
        }
    }

    /// Whether arrow keys are handled.
    pub fn is_keyboard_dragging_enabled(&self) -> bool {
        self.keyboard_enabled
    }

    /// Set keyboard step sizes. Each side falls back to the other, then to 1.
    pub fn set_keyboard_steps(&mut self, down: Option<f64>, up: Option<f64>) {
        self.keyboard_steps = KeyboardSteps::new(down, up);
        log::debug!(
            "Slider: keyboard steps down {} up {}",
            self.keyboard_steps.down(),
            self.keyboard_steps.up()
        );
    }

    /// Current keyboard step sizes.
    pub fn keyboard_steps(&self) -> KeyboardSteps {
        self.keyboard_steps
    }

    /// Move the value one keyboard step and (re)arm the commit timer.
    ///
    /// The synthesized input runs through the same handler as a native one
    /// and is queued for the host.
    pub fn step_keyboard(&mut self, direction: StepDirection) {
        self.keyboard_drag.step(self.clock.now());

        // max/min rather than clamp: a control reporting inverted bounds must not panic
        let target = (self.range.value() + self.keyboard_steps.delta(direction))
            .max(self.range.min())
            .min(self.range.max());
        self.range.set_value(target);

        let value = self.range.value();
        log::trace!("Slider: keyboard step {:?} to {}", direction, value);
        self.on_input();
        self.outbox.push(SliderEvent::Input { value });
    }

    /// Whether a keyboard adjustment is waiting to commit.
    pub fn is_keyboard_dragging(&self) -> bool {
        self.keyboard_drag.is_dragging()
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Run expired timers against the injected clock.
    pub fn poll_timers(&mut self) {
        let now = self.clock.now();

        if self.keyboard_drag.poll(now) {
            let value = self.range.value();
            log::debug!("Slider: keyboard adjustment committed at {}", value);
            self.on_change();
            self.outbox.push(SliderEvent::Change { value });
        }

        if self.refresh.poll(now) {
            self.update_values();
        }
    }

    /// Whether the fallback refresh loop is ticking.
    pub fn is_refresh_running(&self) -> bool {
        self.refresh.is_running()
    }

    // =========================================================================
    // Value and Fills
    // =========================================================================

    /// Current value of the control.
    pub fn value(&self) -> f64 {
        self.range.value()
    }

    /// Write the value through the control, refreshing the lower fill when
    /// programmatic writes are observable.
    pub fn set_value(&mut self, value: f64) {
        self.range.set_value(value);
        if self.observes_value_set() {
            self.update_values();
        }
    }

    /// Schedule a lower fill refresh for the current value.
    ///
    /// Skipped while a keyboard adjustment is pending so the fill keeps
    /// showing the committed position for reference.
    pub fn update_values(&mut self) {
        if self.keyboard_drag.is_dragging() {
            log::trace!("Slider: lower fill refresh skipped during keyboard drag");
            return;
        }
        self.frames.schedule(FrameTarget::LowerFill, self.range.value());
    }

    /// Draw the buffered range that still lies ahead of `position`.
    ///
    /// With `runtime`, ranges and position are raw units; otherwise percent.
    pub fn set_buffered_ranges(
        &mut self,
        ranges: &[BufferedRange],
        runtime: Option<f64>,
        position: Option<f64>,
    ) {
        let Some(upper) = self
            .elements
            .as_mut()
            .and_then(|e| e.background_upper.as_mut())
        else {
            return;
        };
        let style = resolve_buffered_style(ranges, runtime, position);
        log::trace!("Slider: buffered range {:?}", style);
        style.apply(upper);
    }

    /// Toggle the "clear" look of the lower fill.
    pub fn set_is_clear(&mut self, is_clear: bool) {
        if let Some(lower) = self
            .elements
            .as_mut()
            .and_then(|e| e.background_lower.as_mut())
        {
            lower.set_class(class::BACKGROUND_LOWER_CLEAR, is_clear);
        }
    }

    // =========================================================================
    // Animation Frames
    // =========================================================================

    /// Whether any frame work is pending.
    pub fn has_pending_frame(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Apply the frame work queued since the last call.
    pub fn run_frame(&mut self) {
        let tasks = self.frames.take();
        let Some(elements) = self.elements.as_mut() else {
            return;
        };

        for (target, value) in tasks {
            match target {
                FrameTarget::LowerFill => {
                    if let Some(lower) = elements.background_lower.as_mut() {
                        let fraction = clamp_fraction(value_to_fraction(
                            value,
                            self.range.min(),
                            self.range.max(),
                        ));
                        if self.capabilities.width_with_transform {
                            lower.set_transform(Transform::ScaleX(fraction));
                        } else {
                            lower.set_width(CssLength::Percent(fraction * 100.0));
                        }
                    }
                }
                FrameTarget::Bubble => {
                    self.bubble
                        .render(&elements.bubble_track, &mut elements.bubble, value);
                }
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Take the events synthesized since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<SliderEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the bubble is currently shown.
    pub fn is_bubble_visible(&self) -> bool {
        self.bubble.is_visible()
    }

    /// Hooks formatting the bubble content.
    pub fn bubble_hooks_mut(&mut self) -> &mut BubbleHooks {
        self.bubble.hooks_mut()
    }

    /// Capabilities fixed at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Visual elements, `None` while detached.
    pub fn elements(&self) -> Option<&SliderElements> {
        self.elements.as_ref()
    }

    /// Mutable access for the host, e.g. to record measured bounds.
    pub fn elements_mut(&mut self) -> Option<&mut SliderElements> {
        self.elements.as_mut()
    }

    /// The decorated control.
    pub fn range(&self) -> &R {
        &self.range
    }

    /// Direct access to the control. Value writes made here are not
    /// observed; the fallback refresh (if running) picks them up.
    pub fn range_mut(&mut self) -> &mut R {
        &mut self.range
    }
}
