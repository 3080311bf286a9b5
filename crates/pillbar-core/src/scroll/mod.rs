//! Scroll tracking for the page indicator
//!
//! Turns the host pager's raw scroll signal into the small state record the
//! renderer reads every frame.
//!
//! - `state` - Plain value types (phase, direction, the state record itself)
//! - `tracker` - The state machine, fed one `PagerEvent` at a time
//!
//! # Usage
//!
//! ```ignore
//! use pillbar_core::scroll::{Direction, PagerEvent, Phase, ScrollTracker};
//!
//! let mut tracker = ScrollTracker::new(5, 0);
//! tracker.handle(PagerEvent::PhaseChanged(Phase::Dragging), 0);
//! tracker.handle(PagerEvent::Scrolled { page: 0, offset: 0.1 }, 0);
//! tracker.handle(PagerEvent::Scrolled { page: 0, offset: 0.2 }, 0);
//! assert_eq!(tracker.state().direction, Direction::Forward);
//! ```

pub mod state;
pub mod tracker;

pub use state::{Direction, PagerEvent, Phase, ScrollState};
pub use tracker::ScrollTracker;
