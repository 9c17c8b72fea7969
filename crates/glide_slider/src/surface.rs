//! External collaborator contracts
//!
//! The slider core renders nothing and never touches the host page
//! directly. It publishes offsets through [`Surface`] and suspends page
//! scrolling through [`ScrollLock`]; the host environment implements both.

use glide_animation::Transition;

/// The rendering collaborator.
///
/// Receives every offset the slider produces, together with the timing
/// descriptor to apply it with: [`Transition::none`] while a drag or a
/// coasting frame tracks the pointer exactly, or an eased transition for
/// boundary snap-back and settle. A typical implementation translates the
/// content surface horizontally and sets the transition on it.
pub trait Surface {
    fn apply_offset(&mut self, offset: f32, transition: &Transition);
}

/// Host-page vertical scroll suspension.
///
/// Both operations must be idempotent and symmetric: any number of lock
/// calls followed by one unlock fully restores the pre-lock scrolling
/// state. The slider calls `lock_vertical_scroll` at most once per
/// session, when a gesture resolves horizontal, and calls
/// `unlock_vertical_scroll` unconditionally on every release/leave and on
/// teardown. Implementations must tolerate an unlock with no matching
/// prior lock.
pub trait ScrollLock {
    fn lock_vertical_scroll(&mut self);
    fn unlock_vertical_scroll(&mut self);
}

/// No-op lock for hosts whose pages never scroll vertically.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLock;

impl ScrollLock for NullLock {
    fn lock_vertical_scroll(&mut self) {}
    fn unlock_vertical_scroll(&mut self) {}
}
