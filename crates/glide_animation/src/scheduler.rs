//! Animation scheduler
//!
//! Manages active tweens and advances them each frame. The scheduler does
//! not own a clock: the host (frame callback, timer, or a test harness)
//! calls [`AnimationScheduler::tick`] with the elapsed time, which keeps
//! every animation deterministic and testable without a real display.

use crate::transition::Transition;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TweenId;
}

/// A time-based interpolation from one value to another.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: f32,
    transition: Transition,
}

impl Tween {
    pub fn new(from: f32, to: f32, transition: Transition) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            transition,
        }
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        let p = self.transition.progress(self.elapsed);
        self.from + (self.to - self.from) * p
    }

    /// Target value this tween settles at.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the tween has run its full duration.
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.transition.duration
    }
}

/// The animation scheduler that ticks all active tweens
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Tween>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
        }
    }

    pub fn add_tween(&mut self, tween: Tween) -> TweenId {
        tracing::trace!(from = tween.from, to = tween.to, "tween added");
        self.tweens.insert(tween)
    }

    pub fn get_tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    pub fn remove_tween(&mut self, id: TweenId) -> Option<Tween> {
        self.tweens.remove(id)
    }

    /// Advance all tweens by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for (_, tween) in self.tweens.iter_mut() {
            tween.step(dt);
        }
    }

    /// Check if any tween is still running
    pub fn has_active_animations(&self) -> bool {
        self.tweens.iter().any(|(_, t)| !t.is_settled())
    }

    /// Number of registered tweens (settled ones included until removed)
    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn test_tween_linear_interpolation() {
        let mut tween = Tween::new(150.0, 0.0, Transition::eased(0.3, Easing::Linear));
        assert_eq!(tween.value(), 150.0);

        tween.step(0.15);
        assert!((tween.value() - 75.0).abs() < 1e-4);
        assert!(!tween.is_settled());

        tween.step(0.15);
        assert_eq!(tween.value(), 0.0);
        assert!(tween.is_settled());
    }

    #[test]
    fn test_zero_duration_tween_settles_immediately() {
        let tween = Tween::new(-40.0, -300.0, Transition::none());
        assert!(tween.is_settled());
        assert_eq!(tween.value(), -300.0);
    }

    #[test]
    fn test_scheduler_ticks_all_tweens() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add_tween(Tween::new(0.0, 10.0, Transition::eased(1.0, Easing::Linear)));
        let b = scheduler.add_tween(Tween::new(0.0, 10.0, Transition::eased(2.0, Easing::Linear)));

        scheduler.tick(1.0);

        assert!(scheduler.get_tween(a).unwrap().is_settled());
        assert!(!scheduler.get_tween(b).unwrap().is_settled());
        assert!(scheduler.has_active_animations());

        scheduler.remove_tween(b);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.tween_count(), 1);
    }

    #[test]
    fn test_eased_tween_tracks_curve() {
        let mut tween = Tween::new(0.0, 100.0, Transition::overscroll_default());
        tween.step(0.15);
        // Decelerating curve: past the halfway point at half the duration.
        assert!(tween.value() > 50.0);
        assert!(tween.value() < 100.0);
    }
}
