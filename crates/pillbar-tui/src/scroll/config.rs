//! Atomic layer: timing derived from the settle configuration
//!
//! The configuration types themselves live in pillbar-core.

use std::time::Duration;

pub use pillbar_core::{EasingType, SettleConfig};

/// Frame interval used when `animation_fps` is zero
const FALLBACK_FRAME: Duration = Duration::from_millis(16);

/// Settle timing helpers on top of the plain configuration
pub trait SettleConfigExt {
    /// Time a glide across one whole page takes
    fn full_page_duration(&self) -> Duration;

    /// Time a glide across `distance` pages takes, at least one frame
    fn duration_for(&self, distance: f32) -> Duration;

    /// Interval between animation frames
    fn frame_interval(&self) -> Duration;

    /// Whether released pages glide rather than snap
    fn glides(&self) -> bool;
}

impl SettleConfigExt for SettleConfig {
    #[inline]
    fn full_page_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn duration_for(&self, distance: f32) -> Duration {
        // Programmatic jumps over several pages still take one page's time
        let pages = if distance.is_finite() {
            distance.abs().min(1.0) as f64
        } else {
            1.0
        };
        self.full_page_duration()
            .mul_f64(pages)
            .max(self.frame_interval())
    }

    fn frame_interval(&self) -> Duration {
        match self.animation_fps {
            0 => FALLBACK_FRAME,
            fps => Duration::from_secs(1) / fps,
        }
    }

    #[inline]
    fn glides(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
