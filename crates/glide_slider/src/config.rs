//! Slider configuration

use glide_animation::Transition;

/// Configuration for drag and momentum behavior
#[derive(Debug, Clone, Copy)]
pub struct SliderConfig {
    /// Eased transition used for boundary snap-back and settle.
    pub overscroll_transition: Transition,
    /// Multiplier applied to pointer travel while dragging (default: 1.0).
    pub drag_acceleration: f32,
    /// Pointer travel in pixels before a gesture's axis resolves (default: 10.0).
    pub axis_threshold: f32,
    /// Enable inertial coasting after release (default: true).
    pub momentum_enabled: bool,
    /// Minimum coasting velocity in pixels/frame; below this the slider
    /// settles (default: 0.5).
    pub velocity_threshold: f32,
    /// Multiplicative velocity decay per coasting frame (default: 0.95).
    pub momentum_decay: f32,
    /// Cap applied to the release velocity magnitude at coasting entry.
    /// `None` lets the flick velocity pass through uncapped (default).
    pub velocity_cap: Option<f32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            overscroll_transition: Transition::overscroll_default(),
            drag_acceleration: 1.0,
            axis_threshold: 10.0,
            momentum_enabled: true,
            velocity_threshold: 0.5,
            momentum_decay: 0.95,
            velocity_cap: None,
        }
    }
}

impl SliderConfig {
    /// Create config with coasting disabled: every release clamps or
    /// commits immediately.
    pub fn no_momentum() -> Self {
        Self {
            momentum_enabled: false,
            ..Default::default()
        }
    }

    /// Create config with the flick velocity capped at ±20 px/frame and a
    /// harder decay, for short contained carousels.
    pub fn capped_momentum() -> Self {
        Self {
            velocity_cap: Some(20.0),
            momentum_decay: 0.9,
            ..Default::default()
        }
    }
}
