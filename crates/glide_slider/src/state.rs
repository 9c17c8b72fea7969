//! Slider motion state machine
//!
//! A small finite state machine describing the motion phase of one slider
//! instance. States transition in response to u32 event constants: the
//! pointer events from `glide_core` plus the internal gesture-resolution
//! events in [`drag_events`].
//!
//! The machine encodes the cancel-before-start ordering: a pointer-down is
//! accepted from `Coasting` and `Settling`, so a new gesture always tears
//! down in-flight motion before a new session begins.

use glide_core::events::event_types;
use glide_core::EventType;
use std::hash::Hash;

/// Internal events produced while resolving and finishing a gesture.
///
/// Numbering continues above the host-facing constants in
/// `glide_core::events::event_types`.
pub mod drag_events {
    use glide_core::EventType;

    /// Axis intent resolved horizontal: the drag owns the gesture now.
    pub const CAPTURED: EventType = 100;
    /// Axis intent resolved vertical: the gesture belongs to the host page.
    pub const REJECTED: EventType = 101;
    /// Pointer released with nothing left to animate.
    pub const RELEASED: EventType = 102;
    /// Pointer released in range with velocity above threshold.
    pub const FLICK: EventType = 103;
    /// Pointer released out of range: eased return to the boundary.
    pub const SNAP_BACK: EventType = 104;
    /// In-flight animation finished (decay exhausted, boundary absorbed,
    /// or snap-back tween completed).
    pub const SETTLED: EventType = 105;
}

/// Handle an event and return the new state, or None if no transition
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Motion phase of a slider instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SliderState {
    /// No gesture, no animation.
    #[default]
    Idle,
    /// Pointer is down, axis intent not yet resolved.
    Armed,
    /// Horizontal drag captured; offset follows the pointer.
    Dragging,
    /// Inertial coasting after release, one decay step per frame.
    Coasting,
    /// Eased snap-back/settle toward a committed offset.
    Settling,
}

impl StateTransitions for SliderState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use event_types::POINTER_DOWN;
        match (self, event) {
            (SliderState::Idle, POINTER_DOWN) => Some(SliderState::Armed),

            (SliderState::Armed, drag_events::CAPTURED) => Some(SliderState::Dragging),
            (SliderState::Armed, drag_events::REJECTED) => Some(SliderState::Idle),
            (SliderState::Armed, drag_events::RELEASED) => Some(SliderState::Idle),

            (SliderState::Dragging, drag_events::RELEASED) => Some(SliderState::Idle),
            (SliderState::Dragging, drag_events::FLICK) => Some(SliderState::Coasting),
            (SliderState::Dragging, drag_events::SNAP_BACK) => Some(SliderState::Settling),

            // A new pointer-down cancels in-flight motion before the next
            // session starts.
            (SliderState::Coasting, POINTER_DOWN) => Some(SliderState::Armed),
            (SliderState::Coasting, drag_events::SETTLED) => Some(SliderState::Idle),

            (SliderState::Settling, POINTER_DOWN) => Some(SliderState::Armed),
            (SliderState::Settling, drag_events::SETTLED) => Some(SliderState::Idle),

            _ => None,
        }
    }
}

impl SliderState {
    /// Whether a gesture or animation is in flight.
    pub fn is_active(&self) -> bool {
        !matches!(self, SliderState::Idle)
    }

    /// Whether tick-driven animation (coasting or settling) is running.
    pub fn is_animating(&self) -> bool {
        matches!(self, SliderState::Coasting | SliderState::Settling)
    }
}
