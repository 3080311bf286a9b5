//! Atomic layer: easing curves for the settle glide
//!
//! Each curve maps settle progress in [0, 1] to travelled distance in [0, 1].
//! All of them are ease-out shaped: a released page moves fastest right after
//! the finger lifts and decelerates into its resting position.

pub use pillbar_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Map progress `t` (clamped to [0, 1]) to eased progress
    fn apply(&self, t: f32) -> f32;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f32 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_runs_ahead_of_linear() {
        for easing in [EasingType::Cubic, EasingType::Quintic, EasingType::EaseOut] {
            assert!(easing.apply(0.3) > 0.3, "{:?}", easing);
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
        assert_eq!(EasingType::Cubic.apply(f32::NAN), 0.0);
    }
}
