//! Atomic layer: time calculation utilities for the settle animation

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation started at `start`
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0) as f32
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two positions
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
