use serde::{Deserialize, Serialize};

/// Host-reported discrete scroll phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// At rest on a page
    #[default]
    Idle,
    /// Finger down and moving
    Dragging,
    /// Released, animating to rest
    Settling,
}

/// Direction latched from the sign of consecutive offset deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    None,
    /// Offsets growing, moving towards the next page
    Forward,
    /// Offsets shrinking, moving towards the previous page
    Backward,
}

/// Raw events delivered by the host pager
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerEvent {
    /// `page` is the lower of the two pages in transition, `offset` the
    /// progress in [0, 1) towards `page + 1`
    Scrolled { page: usize, offset: f32 },
    PhaseChanged(Phase),
}

/// Normalized scroll state read by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// Page whose pill is handing over (the current page at rest)
    pub anchor_index: usize,
    pub direction: Direction,
    /// Offset of the latest scroll sample, doubles as the blend fraction
    pub prev_offset: f32,
    pub phase: Phase,
}

impl ScrollState {
    /// Resting state on `page`
    pub fn idle(page: usize) -> Self {
        Self {
            anchor_index: page,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}
