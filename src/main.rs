/// Scripted seekbar session for native builds.
///
/// Usage: `seekbar-demo [config.json]`
///
/// Hovers the track, scrubs with the pointer, reports buffered ranges and then
/// steps with the arrow keys, waiting in real time for the debounced commit.
/// Set `RUST_LOG` to override the configured log level.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match seekbar::SliderConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => seekbar::SliderConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if let Err(e) = demo::run(&config) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::rc::Rc;
    use std::time::Duration;

    use seekbar::{
        BufferedRange, RangeControl, RangeInput, Result, Slider, SliderConfig, SliderEvent,
    };
    use seekbar_ui::{Bounds, Callback, Event, SystemClock};
    use web_time::Instant;

    /// Runtime of the pretend media, in seconds.
    const RUNTIME: f64 = 5_400.0;

    pub fn run(config: &SliderConfig) -> Result<()> {
        let started = Instant::now();
        let range = RangeInput::new(0.0, 100.0, 0.0, 10.0)?;
        let mut slider = Slider::new(range, config, Rc::new(SystemClock::new()));
        slider.attach();
        slider.enable_keyboard_dragging();
        slider.set_keyboard_steps(Some(5.0), None);
        slider.bubble_hooks_mut().text = Callback::new(format_timestamp);

        if let Some(elements) = slider.elements_mut() {
            elements
                .bubble_track
                .set_bounds(Bounds::new(20.0, 0.0, 600.0, 4.0));
            elements.bubble.set_bounds(Bounds::sized(64.0, 28.0));
        }

        // Hover across the track
        for client_x in [20.0, 170.0, 320.0, 620.0] {
            slider.handle_event(&Event::PointerMoved { client_x });
            slider.run_frame();
            report(&slider, "hover");
        }
        slider.handle_event(&Event::PointerLeft);

        // Buffered ranges in seconds, playhead at 25 minutes
        let buffered = [
            BufferedRange::new(0.0, 1_200.0),
            BufferedRange::new(1_800.0, 2_700.0),
            BufferedRange::new(4_000.0, 5_400.0),
        ];
        slider.set_buffered_ranges(&buffered, Some(RUNTIME), Some(1_500.0));
        report(&slider, "buffered");

        // Pointer scrub: the host's control reports input then change
        slider.range_mut().set_value(40.0);
        slider.handle_event(&Event::Input);
        slider.run_frame();
        report(&slider, "scrub");
        slider.handle_event(&Event::Change);
        slider.run_frame();
        report(&slider, "commit");

        // Keyboard adjustment, committed once the keys go quiet
        for key in ["ArrowRight", "ArrowRight", "ArrowLeft"] {
            let result = slider.handle_event(&Event::key(key));
            log::info!("{} -> {:?}", key, result);
            slider.run_frame();
        }
        while slider.is_keyboard_dragging() {
            std::thread::sleep(Duration::from_millis(50));
            slider.poll_timers();
            slider.run_frame();
        }
        report(&slider, "keyboard");

        for event in slider.drain_events() {
            log::info!("emitted {} (value {})", event.name(), event.value());
            if let SliderEvent::Change { value } = event {
                log::info!("committed position {}", format_timestamp(value));
            }
        }

        slider.detach();
        log::info!("Session finished in {:?}", started.elapsed());
        Ok(())
    }

    /// Render a percent position as `h:mm:ss` of the runtime.
    fn format_timestamp(percent: f64) -> String {
        let total = (percent / 100.0 * RUNTIME).round() as u64;
        format!("{}:{:02}:{:02}", total / 3600, total / 60 % 60, total % 60)
    }

    fn report(slider: &Slider<RangeInput>, stage: &str) {
        let Some(elements) = slider.elements() else {
            return;
        };
        log::info!(
            "[{}] value={} bubble(visible={}, left={:?}, html={}) lower={:?} upper={:?}",
            stage,
            slider.value(),
            slider.is_bubble_visible(),
            elements.bubble.style().left.map(|l| l.to_string()),
            elements.bubble.inner_html(),
            elements
                .background_lower
                .as_ref()
                .map(|e| e.style().width.map(|w| w.to_string())),
            elements
                .background_upper
                .as_ref()
                .map(|e| (e.style().left, e.style().width)),
        );
    }
}

// WASM hosts embed the library directly
#[cfg(target_arch = "wasm32")]
fn main() {}
