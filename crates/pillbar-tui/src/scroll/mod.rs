//! Settle glide for the simulated pager
//!
//! A released drag does not jump to its page. It glides there over a few
//! frames, and every frame turns into one scroll sample for the indicator.
//!
//! Layers, bottom up:
//! - `easing`, `timing`, `config`: pure helpers (curves, progress, durations)
//! - `animation`: [`SettleAnimator`], which owns one running glide
//!
//! ```ignore
//! let mut animator = SettleAnimator::new(SettleConfig::default());
//! animator.settle_to(2.4, 3.0);
//! while animator.is_animating() {
//!     let position = animator.update();
//! }
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::SettleAnimator;
pub use config::{SettleConfig, SettleConfigExt};
pub use easing::{EasingType, EasingTypeExt};
