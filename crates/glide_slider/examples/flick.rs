//! Headless flick demo
//!
//! Replays a synthetic touch drag-and-flick through a printing surface so
//! the whole pipeline is visible without a windowing host:
//! capture, per-move offsets, release velocity, coasting decay, settle.
//!
//! Run with: cargo run -p glide_slider --example flick

use glide_animation::Transition;
use glide_core::PointerEvent;
use glide_slider::{NullLock, Slider, SliderConfig, Surface};

/// Prints every offset the slider publishes.
struct PrintingSurface;

impl Surface for PrintingSurface {
    fn apply_offset(&mut self, offset: f32, transition: &Transition) {
        if transition.is_none() {
            println!("offset {offset:8.2}");
        } else {
            println!(
                "offset {offset:8.2}  (eased over {:.2}s)",
                transition.duration
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut slider = Slider::new(SliderConfig::default(), PrintingSurface, NullLock);
    // A 375 px viewport over 1200 px of content.
    slider.set_extents(1200.0, 375.0);

    // Finger down, a quick leftward swipe, release.
    slider.handle_pointer_down(&PointerEvent::touch(320.0, 200.0));
    for x in [300.0, 270.0, 230.0, 185.0, 150.0] {
        slider.handle_pointer_move(&PointerEvent::touch(x, 202.0));
    }
    slider.handle_pointer_up();

    // Drive the frame loop until the flick settles.
    let mut frames = 0;
    while slider.tick(1.0 / 60.0) {
        frames += 1;
    }
    println!("settled at {:.2} after {frames} coasting frames", slider.offset());
}
