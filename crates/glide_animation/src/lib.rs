//! Glide Animation System
//!
//! Easing curves, transition descriptors, and tween scheduling.
//!
//! # Features
//!
//! - **Easing**: CSS-grade cubic-bezier evaluation plus common presets
//! - **Transitions**: duration + curve descriptors published to the render surface
//! - **Tweens**: time-based value interpolation with external frame driving
//! - **Scheduler**: keyed registry of active tweens, ticked once per frame

pub mod easing;
pub mod scheduler;
pub mod transition;

pub use easing::{Easing, EasingError};
pub use scheduler::{AnimationScheduler, Tween, TweenId};
pub use transition::Transition;
