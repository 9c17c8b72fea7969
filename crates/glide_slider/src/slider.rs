//! The slider widget wiring
//!
//! [`Slider`] owns the physics and fans host input into it: pointer events
//! arrive already unified by `glide_core`, axis intent decides whether the
//! gesture is ours or the page's, and every resulting offset is published
//! to the [`Surface`] with the right transition descriptor.

use std::sync::{Arc, Mutex};

use glide_animation::{AnimationScheduler, Transition};
use glide_core::{PointerEvent, ResizeEvent};

use crate::config::SliderConfig;
use crate::physics::{MoveOutcome, ReleaseOutcome, SliderPhysics};
use crate::state::SliderState;
use crate::surface::{ScrollLock, Surface};

/// A draggable, momentum-scrolling horizontal carousel.
///
/// The host wires its pointer-down/move/up/leave and resize notifications
/// to the `handle_*` methods and calls [`Slider::tick`] once per animation
/// frame while [`Slider::is_animating`] returns true.
pub struct Slider<S: Surface, L: ScrollLock> {
    physics: SliderPhysics,
    surface: S,
    scroll_lock: L,
    scheduler: Arc<Mutex<AnimationScheduler>>,
    /// Whether this session locked the page scroll (lock fires at most
    /// once per session).
    locked: bool,
}

impl<S: Surface, L: ScrollLock> Slider<S, L> {
    pub fn new(config: SliderConfig, surface: S, scroll_lock: L) -> Self {
        let scheduler = Arc::new(Mutex::new(AnimationScheduler::new()));
        Self {
            physics: SliderPhysics::with_scheduler(config, &scheduler),
            surface,
            scroll_lock,
            scheduler,
            locked: false,
        }
    }

    /// Update content/viewport extents (on mount or content change).
    pub fn set_extents(&mut self, content_width: f32, viewport_width: f32) {
        self.physics.set_extents(content_width, viewport_width);
    }

    /// Live horizontal offset.
    pub fn offset(&self) -> f32 {
        self.physics.current()
    }

    pub fn state(&self) -> SliderState {
        self.physics.state()
    }

    pub fn is_animating(&self) -> bool {
        self.physics.is_animating()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scroll_lock(&self) -> &L {
        &self.scroll_lock
    }

    /// Pointer pressed inside the container.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        let (x, y) = event.position();
        if self.physics.begin_drag(x, y) {
            // Disable any in-flight eased transition so the next offset
            // lands without easing.
            self.surface
                .apply_offset(self.physics.committed(), &Transition::none());
        }
    }

    /// Pointer moved.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        let (x, y) = event.position();
        match self.physics.drag_to(x, y) {
            MoveOutcome::Captured { offset } => {
                if !self.locked {
                    self.scroll_lock.lock_vertical_scroll();
                    self.locked = true;
                    tracing::debug!("horizontal capture, page scroll suspended");
                }
                self.surface.apply_offset(offset, &Transition::none());
            }
            MoveOutcome::Moved { offset } => {
                self.surface.apply_offset(offset, &Transition::none());
            }
            MoveOutcome::Ignored => {}
        }
    }

    /// Pointer released.
    pub fn handle_pointer_up(&mut self) {
        self.finish_session();
    }

    /// Pointer left the container; ends the session like a release.
    pub fn handle_pointer_leave(&mut self) {
        self.finish_session();
    }

    /// Viewport resized. A changed width cancels in-flight motion and
    /// resets the offset to 0; an unchanged width is ignored.
    pub fn handle_resize(&mut self, event: &ResizeEvent) {
        if self.physics.resize(event.width) {
            self.unlock();
            self.surface.apply_offset(0.0, &Transition::none());
        }
    }

    /// Advance one logical animation frame of `dt` seconds.
    ///
    /// Returns true while an animation is still in flight. Coasting
    /// publishes its frame's offset with no transition; settling is eased
    /// by the surface itself, so only the physics advances here.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.scheduler.lock().unwrap().tick(dt);

        let was_coasting = self.physics.state() == SliderState::Coasting;
        let animating = self.physics.tick();

        if was_coasting {
            self.surface
                .apply_offset(self.physics.current(), &Transition::none());
        }
        animating
    }

    fn finish_session(&mut self) {
        let outcome = self.physics.release();

        // Unlock unconditionally on every release/leave, locked or not.
        self.unlock();

        match outcome {
            ReleaseOutcome::SnapBack { target } => {
                let transition = self.physics.config().overscroll_transition;
                self.surface.apply_offset(target, &transition);
            }
            ReleaseOutcome::Commit { offset } => {
                self.surface.apply_offset(offset, &Transition::none());
            }
            // Coasting frames publish from tick().
            ReleaseOutcome::Flick { .. } | ReleaseOutcome::Ignored => {}
        }
    }

    fn unlock(&mut self) {
        self.scroll_lock.unlock_vertical_scroll();
        self.locked = false;
    }
}

impl<S: Surface, L: ScrollLock> Drop for Slider<S, L> {
    /// Teardown restores page scrolling no matter what state the slider
    /// died in.
    fn drop(&mut self) {
        self.scroll_lock.unlock_vertical_scroll();
    }
}
