//! Glide Slider
//!
//! A draggable, momentum-scrolling horizontal carousel core.
//!
//! # Features
//!
//! - **Unified input**: one pointer model for mouse and touch
//! - **Axis disambiguation**: vertical swipes stay with the host page
//! - **Soft overscroll**: unclamped drag past the edges, eased snap-back on release
//! - **Inertial coasting**: flicks keep moving with per-frame velocity decay
//! - **FSM-based state**: clear state machine for Idle, Armed, Dragging, Coasting, Settling
//!
//! Rendering and host-page scrolling stay outside: the slider publishes
//! offsets through the [`Surface`] trait and suspends vertical scrolling
//! through the [`ScrollLock`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use glide_slider::{Slider, SliderConfig};
//! use glide_core::PointerEvent;
//!
//! let mut slider = Slider::new(SliderConfig::default(), surface, scroll_lock);
//! slider.set_extents(1200.0, 375.0);
//!
//! slider.handle_pointer_down(&PointerEvent::touch(200.0, 80.0));
//! slider.handle_pointer_move(&PointerEvent::touch(120.0, 82.0));
//! slider.handle_pointer_up();
//! while slider.tick(1.0 / 60.0) {}
//! ```

pub mod config;
pub mod physics;
pub mod session;
pub mod slider;
pub mod state;
pub mod surface;

pub use config::SliderConfig;
pub use physics::{BoundaryCheck, MoveOutcome, ReleaseOutcome, SliderPhysics};
pub use session::{AxisIntent, DragSession};
pub use slider::Slider;
pub use state::{SliderState, StateTransitions};
pub use surface::{NullLock, ScrollLock, Surface};
