//! Glide Core Input Model
//!
//! Foundational primitives shared by the Glide carousel crates:
//!
//! - **Pointer Events**: a unified mouse/touch event model
//! - **Coordinate Normalization**: one `(x, y)` pair regardless of input kind
//! - **Event Types**: u32 constants for the host-facing input surface

pub mod events;

pub use events::{EventType, PointerEvent, ResizeEvent, TouchPoint};
