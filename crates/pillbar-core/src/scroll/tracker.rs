//! Scroll state machine
//!
//! The host only reports the lower page of a transition and a 0..1 offset,
//! never the drag direction. The direction is therefore latched from the sign
//! of consecutive offset deltas while dragging, and held until the pager
//! comes back to rest.

use super::state::{Direction, PagerEvent, Phase, ScrollState};

/// Largest offset a scroll sample may carry, just below a full page
pub const MAX_OFFSET: f32 = 1.0 - f32::EPSILON;

/// Owns the `ScrollState` of one attached indicator
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    state: ScrollState,
    slot_count: usize,
}

impl ScrollTracker {
    /// Start at rest on `current_page`
    pub fn new(slot_count: usize, current_page: usize) -> Self {
        let mut tracker = Self {
            state: ScrollState::default(),
            slot_count,
        };
        tracker.state.anchor_index = tracker.clamp_page(current_page);
        tracker
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Apply one host event
    ///
    /// `current_page` is what the host reports as its current page at the
    /// time of the event; it is only read when the pager returns to idle.
    pub fn handle(&mut self, event: PagerEvent, current_page: usize) {
        match event {
            PagerEvent::Scrolled { page, offset } => self.on_scrolled(page, offset),
            PagerEvent::PhaseChanged(phase) => self.on_phase_changed(phase, current_page),
        }
    }

    /// Mirror the host phase; idle resets the direction latch
    pub fn on_phase_changed(&mut self, phase: Phase, current_page: usize) {
        tracing::debug!("scroll phase {:?} -> {:?}", self.state.phase, phase);
        self.state.phase = phase;
        if phase == Phase::Idle {
            self.state.anchor_index = self.clamp_page(current_page);
            self.state.direction = Direction::None;
            self.state.prev_offset = 0.0;
        }
    }

    /// Feed one scroll sample
    pub fn on_scrolled(&mut self, page: usize, offset: f32) {
        let offset = clamp_offset(offset);
        let prev = self.state.prev_offset;

        // The first sample of a gesture has no meaningful delta from zero
        if prev != 0.0 && offset != 0.0 && self.state.phase == Phase::Dragging {
            let delta = offset - prev;
            if delta > 0.0 {
                self.state.direction = Direction::Forward;
            } else if delta < 0.0 {
                self.state.direction = Direction::Backward;
            }
        }

        match self.state.direction {
            Direction::Forward => self.state.anchor_index = self.clamp_page(page),
            Direction::Backward => self.state.anchor_index = self.clamp_page(page.saturating_add(1)),
            Direction::None => {}
        }

        self.state.prev_offset = offset;

        tracing::trace!(
            "scrolled page={} offset={:.3} anchor={} direction={:?}",
            page,
            offset,
            self.state.anchor_index,
            self.state.direction
        );
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.slot_count.saturating_sub(1))
    }
}

/// Clamp a scroll offset into [0, 1), NaN counts as 0
#[inline]
pub fn clamp_offset(offset: f32) -> f32 {
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, MAX_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(slot_count: usize, page: usize) -> ScrollTracker {
        let mut tracker = ScrollTracker::new(slot_count, page);
        tracker.handle(PagerEvent::PhaseChanged(Phase::Dragging), page);
        tracker
    }

    fn scroll(tracker: &mut ScrollTracker, page: usize, offset: f32) {
        tracker.handle(PagerEvent::Scrolled { page, offset }, page);
    }

    #[test]
    fn test_new_starts_idle_on_current_page() {
        let tracker = ScrollTracker::new(9, 2);
        assert_eq!(*tracker.state(), ScrollState::idle(2));
        assert!(tracker.state().is_idle());
    }

    #[test]
    fn test_new_clamps_page_into_range() {
        let tracker = ScrollTracker::new(3, 10);
        assert_eq!(tracker.state().anchor_index, 2);
    }

    #[test]
    fn test_first_sample_does_not_latch() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 0.1);
        assert_eq!(tracker.state().direction, Direction::None);
        assert_eq!(tracker.state().anchor_index, 1);
        assert!((tracker.state().prev_offset - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_forward_drag_latches_once() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 0.1);
        scroll(&mut tracker, 1, 0.2);
        assert_eq!(tracker.state().direction, Direction::Forward);
        assert_eq!(tracker.state().anchor_index, 1);

        // A flat sample keeps the latch
        scroll(&mut tracker, 1, 0.2);
        assert_eq!(tracker.state().direction, Direction::Forward);

        for offset in [0.3, 0.45, 0.6, 0.8] {
            scroll(&mut tracker, 1, offset);
            assert_eq!(tracker.state().direction, Direction::Forward);
            assert_eq!(tracker.state().anchor_index, 1);
        }
    }

    #[test]
    fn test_backward_drag_anchors_on_upper_page() {
        // Dragging from page 2 back towards page 1: host reports page 1
        let mut tracker = dragging(5, 2);
        scroll(&mut tracker, 1, 0.9);
        assert_eq!(tracker.state().anchor_index, 2);
        scroll(&mut tracker, 1, 0.8);
        assert_eq!(tracker.state().direction, Direction::Backward);
        assert_eq!(tracker.state().anchor_index, 2);
    }

    #[test]
    fn test_reversal_mid_drag_flips_direction() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 0.2);
        scroll(&mut tracker, 1, 0.4);
        assert_eq!(tracker.state().direction, Direction::Forward);

        scroll(&mut tracker, 1, 0.3);
        assert_eq!(tracker.state().direction, Direction::Backward);
        assert_eq!(tracker.state().anchor_index, 2);
    }

    #[test]
    fn test_direction_not_sampled_while_settling() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 0.2);
        scroll(&mut tracker, 1, 0.4);
        tracker.handle(PagerEvent::PhaseChanged(Phase::Settling), 1);

        // Settle back towards page 1 after a short forward drag
        scroll(&mut tracker, 1, 0.3);
        scroll(&mut tracker, 1, 0.1);
        assert_eq!(tracker.state().direction, Direction::Forward);
        assert_eq!(tracker.state().anchor_index, 1);
    }

    #[test]
    fn test_idle_resets_state() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 0.2);
        scroll(&mut tracker, 1, 0.6);
        tracker.handle(PagerEvent::PhaseChanged(Phase::Settling), 2);
        scroll(&mut tracker, 1, 0.9);
        tracker.handle(PagerEvent::PhaseChanged(Phase::Idle), 2);

        assert_eq!(*tracker.state(), ScrollState::idle(2));
    }

    #[test]
    fn test_idle_reset_regardless_of_history() {
        let mut tracker = dragging(4, 3);
        scroll(&mut tracker, 2, 0.7);
        scroll(&mut tracker, 2, 0.5);
        scroll(&mut tracker, 2, 0.6);
        tracker.handle(PagerEvent::PhaseChanged(Phase::Idle), 0);
        assert_eq!(tracker.state().anchor_index, 0);
        assert_eq!(tracker.state().direction, Direction::None);
        assert_eq!(tracker.state().prev_offset, 0.0);
    }

    #[test]
    fn test_zero_offset_does_not_latch() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 0.3);
        scroll(&mut tracker, 1, 0.0);
        assert_eq!(tracker.state().direction, Direction::None);
        scroll(&mut tracker, 0, 0.9);
        assert_eq!(tracker.state().direction, Direction::None);
        scroll(&mut tracker, 0, 0.8);
        assert_eq!(tracker.state().direction, Direction::Backward);
        assert_eq!(tracker.state().anchor_index, 1);
    }

    #[test]
    fn test_out_of_range_offsets_are_clamped() {
        let mut tracker = dragging(5, 1);
        scroll(&mut tracker, 1, 3.0);
        assert!(tracker.state().prev_offset < 1.0);
        scroll(&mut tracker, 1, -2.0);
        assert_eq!(tracker.state().prev_offset, 0.0);
        scroll(&mut tracker, 1, f32::NAN);
        assert_eq!(tracker.state().prev_offset, 0.0);
    }

    #[test]
    fn test_backward_anchor_clamped_to_last_slot() {
        let mut tracker = dragging(3, 2);
        scroll(&mut tracker, 2, 0.5);
        scroll(&mut tracker, 2, 0.4);
        assert_eq!(tracker.state().direction, Direction::Backward);
        assert_eq!(tracker.state().anchor_index, 2);
    }
}
