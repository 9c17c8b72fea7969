//! Pointer event model
//!
//! Unified input handling across mouse and touch.

use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer left the container (treated like POINTER_UP by sliders)
    pub const POINTER_LEAVE: EventType = 4;
    pub const RESIZE: EventType = 10;
}

/// A single active touch point.
///
/// Coordinates are client coordinates, matching what touch input devices
/// report for each contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// A pointer event from the host environment.
///
/// Mouse events carry page coordinates; touch events carry the full list
/// of active touch points. Touch lists almost never exceed two entries,
/// so they are stored inline.
#[derive(Clone, Debug)]
pub enum PointerEvent {
    Mouse {
        page_x: f32,
        page_y: f32,
        button: u8,
    },
    Touch {
        touches: SmallVec<[TouchPoint; 2]>,
    },
}

impl PointerEvent {
    /// Convenience constructor for a primary-button mouse event.
    pub fn mouse(page_x: f32, page_y: f32) -> Self {
        Self::Mouse {
            page_x,
            page_y,
            button: 0,
        }
    }

    /// Convenience constructor for a single-finger touch event.
    pub fn touch(client_x: f32, client_y: f32) -> Self {
        let mut touches = SmallVec::new();
        touches.push(TouchPoint { client_x, client_y });
        Self::Touch { touches }
    }

    /// Normalize this event to a single `(x, y)` coordinate pair.
    ///
    /// Mouse events yield their page coordinates; touch events yield the
    /// first active touch point's client coordinates. A touch event with
    /// no touch points is a host contract violation; it normalizes to the
    /// origin rather than panicking.
    pub fn position(&self) -> (f32, f32) {
        match self {
            PointerEvent::Mouse { page_x, page_y, .. } => (*page_x, *page_y),
            PointerEvent::Touch { touches } => touches
                .first()
                .map(|t| (t.client_x, t.client_y))
                .unwrap_or((0.0, 0.0)),
        }
    }

    /// Whether this event came from a touch device.
    pub fn is_touch(&self) -> bool {
        matches!(self, PointerEvent::Touch { .. })
    }
}

/// A viewport resize notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    /// New viewport width in pixels.
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_position_uses_page_coords() {
        let e = PointerEvent::mouse(120.0, 48.0);
        assert_eq!(e.position(), (120.0, 48.0));
        assert!(!e.is_touch());
    }

    #[test]
    fn test_touch_position_uses_first_touch_point() {
        let mut touches: SmallVec<[TouchPoint; 2]> = SmallVec::new();
        touches.push(TouchPoint {
            client_x: 30.0,
            client_y: 200.0,
        });
        touches.push(TouchPoint {
            client_x: 999.0,
            client_y: 999.0,
        });
        let e = PointerEvent::Touch { touches };
        assert_eq!(e.position(), (30.0, 200.0));
        assert!(e.is_touch());
    }

    #[test]
    fn test_empty_touch_list_normalizes_to_origin() {
        let e = PointerEvent::Touch {
            touches: SmallVec::new(),
        };
        assert_eq!(e.position(), (0.0, 0.0));
    }
}
