//! Molecular layer: settle animation controller
//!
//! Glides a continuous pager position (in pages) to a whole page.

use std::time::{Duration, Instant};

use super::config::{SettleConfig, SettleConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp, progress_at};

/// Active settle animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f32,
    to: f32,
    duration: Duration,
    easing: EasingType,
}

/// Settle animation controller
///
/// Call `settle_to()` when a drag is released, then `update()` every frame
/// until `is_animating()` turns false.
#[derive(Debug, Clone)]
pub struct SettleAnimator {
    animation: Option<ActiveAnimation>,
    config: SettleConfig,
    /// Current position (always up-to-date)
    position: f32,
}

impl Default for SettleAnimator {
    fn default() -> Self {
        Self::new(SettleConfig::default())
    }
}

impl SettleAnimator {
    pub fn new(config: SettleConfig) -> Self {
        Self {
            animation: None,
            config,
            position: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final position of the running animation, or the current one at rest
    pub fn target(&self) -> f32 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.position)
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Glide from `from` to `to`
    ///
    /// Jumps straight to `to` when smooth settling is disabled or there is
    /// nothing to travel.
    pub fn settle_to(&mut self, from: f32, to: f32) {
        self.settle_to_at(from, to, Instant::now());
    }

    pub fn settle_to_at(&mut self, from: f32, to: f32, now: Instant) {
        if !self.config.glides() || from == to {
            self.position = to;
            self.animation = None;
            return;
        }

        self.position = from;
        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to,
            duration: self.config.duration_for(to - from),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current position
    pub fn update(&mut self) -> f32 {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> f32 {
        if let Some(ref anim) = self.animation {
            if is_complete_at(anim.start, anim.duration, now) {
                self.position = anim.to;
                self.animation = None;
            } else {
                let t = progress_at(anim.start, anim.duration, now);
                self.position = lerp(anim.from, anim.to, anim.easing.apply(t));
            }
        }

        self.position
    }

    /// Stop where the animation currently is
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64, easing: EasingType) -> SettleConfig {
        SettleConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_settle_when_disabled() {
        let config = SettleConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = SettleAnimator::new(config);

        animator.settle_to(1.4, 1.0);
        assert_eq!(animator.position(), 1.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = SettleAnimator::new(smooth(100, EasingType::Cubic));
        animator.settle_to(2.3, 3.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 3.0);
        assert_eq!(animator.position(), 2.3);
    }

    #[test]
    fn test_linear_progress_is_proportional() {
        let mut animator = SettleAnimator::new(smooth(100, EasingType::Linear));
        let start = Instant::now();
        // 0.5 pages to travel -> 50ms
        animator.settle_to_at(1.5, 2.0, start);

        let mid = animator.update_at(start + Duration::from_millis(25));
        assert!((mid - 1.75).abs() < 1e-3);
        assert!(animator.is_animating());

        let done = animator.update_at(start + Duration::from_millis(50));
        assert_eq!(done, 2.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_backward_settle_never_overshoots() {
        let mut animator = SettleAnimator::new(smooth(200, EasingType::Quintic));
        let start = Instant::now();
        animator.settle_to_at(3.8, 3.0, start);

        let mut prev = 3.8;
        for ms in (0..=200).step_by(10) {
            let position = animator.update_at(start + Duration::from_millis(ms));
            assert!(position <= prev + 1e-6);
            assert!(position >= 3.0 - 1e-5);
            prev = position;
        }
        assert_eq!(prev, 3.0);
    }

    #[test]
    fn test_no_travel_no_animation() {
        let mut animator = SettleAnimator::new(smooth(100, EasingType::Cubic));
        animator.settle_to(4.0, 4.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.position(), 4.0);
    }

    #[test]
    fn test_cancel_keeps_position() {
        let mut animator = SettleAnimator::new(smooth(100, EasingType::Linear));
        let start = Instant::now();
        animator.settle_to_at(0.0, 1.0, start);
        let at = animator.update_at(start + Duration::from_millis(40));
        animator.cancel();
        assert!(!animator.is_animating());
        assert_eq!(animator.update_at(start + Duration::from_secs(5)), at);
    }
}
