//! Simulated paged view
//!
//! Stands in for a touch pager: key presses drag a continuous position,
//! releasing glides it to a whole page. Every step yields the events a real
//! pager reports to its listeners, in delivery order.

use std::time::Instant;

use pillbar_core::{PageHost, PagerEvent, Phase, SettleConfig};

use crate::scroll::SettleAnimator;

/// How far past a whole page a drag must be for a fling to carry it onwards
const FLING_THRESHOLD: f32 = 0.05;

#[derive(Debug, Clone)]
pub struct SimulatedPager {
    page_count: usize,
    current_page: usize,
    /// Continuous position in pages, `current_page` at rest
    position: f32,
    phase: Phase,
    animator: SettleAnimator,
}

impl PageHost for SimulatedPager {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn current_page(&self) -> usize {
        self.current_page
    }
}

impl SimulatedPager {
    pub fn new(page_count: usize, initial_page: usize, settle: SettleConfig) -> Self {
        let current_page = initial_page.min(page_count.saturating_sub(1));
        Self {
            page_count,
            current_page,
            position: current_page as f32,
            phase: Phase::Idle,
            animator: SettleAnimator::new(settle),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Whether frames must keep coming for the settle glide
    pub fn is_settling(&self) -> bool {
        self.phase == Phase::Settling
    }

    fn last_page(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32
    }

    /// The scroll sample a pager reports for the current position
    fn scrolled(&self) -> PagerEvent {
        let page = self.position.floor();
        PagerEvent::Scrolled {
            page: page as usize,
            offset: self.position - page,
        }
    }

    fn set_phase(&mut self, phase: Phase, events: &mut Vec<PagerEvent>) {
        if self.phase != phase {
            self.phase = phase;
            events.push(PagerEvent::PhaseChanged(phase));
        }
    }

    /// Move the content by `delta` pages, positive towards the next page
    ///
    /// Grabbing the pager mid-settle stops the glide where it is.
    pub fn drag_by(&mut self, delta: f32) -> Vec<PagerEvent> {
        let mut events = Vec::new();
        if self.page_count == 0 {
            return events;
        }

        if self.phase == Phase::Settling {
            self.animator.cancel();
        }
        self.set_phase(Phase::Dragging, &mut events);

        let position = (self.position + delta).clamp(0.0, self.last_page());
        if position != self.position {
            self.position = position;
            events.push(self.scrolled());
        }

        events
    }

    /// Let go; glide to the nearest page
    pub fn release(&mut self) -> Vec<PagerEvent> {
        let target = self.position.round();
        self.settle_towards(target, Instant::now())
    }

    /// Let go with momentum; glide on to the next page in that direction
    ///
    /// Only a drag can be flung; at rest on a page nothing moves.
    pub fn fling(&mut self, forward: bool) -> Vec<PagerEvent> {
        let target = if forward {
            (self.position - FLING_THRESHOLD).floor() + 1.0
        } else {
            (self.position + FLING_THRESHOLD).ceil() - 1.0
        };
        self.settle_towards(target, Instant::now())
    }

    /// Programmatic page change, animated without a drag
    pub fn select_page(&mut self, page: usize) -> Vec<PagerEvent> {
        if self.page_count == 0 || self.phase == Phase::Dragging {
            return Vec::new();
        }
        let target = page.min(self.page_count - 1) as f32;
        self.settle_towards(target, Instant::now())
    }

    pub(crate) fn settle_towards(&mut self, target: f32, now: Instant) -> Vec<PagerEvent> {
        let mut events = Vec::new();
        if self.page_count == 0 {
            return events;
        }

        let target = target.clamp(0.0, self.last_page());
        if self.phase == Phase::Idle && target == self.position {
            return events;
        }

        // The selected page changes as soon as the target is known
        self.current_page = target as usize;
        tracing::debug!("settling from {:.3} to page {}", self.position, self.current_page);
        self.set_phase(Phase::Settling, &mut events);

        self.animator.settle_to_at(self.position, target, now);
        if !self.animator.is_animating() {
            self.finish(&mut events);
        }
        events
    }

    /// Advance the settle glide
    pub fn tick(&mut self) -> Vec<PagerEvent> {
        self.tick_at(Instant::now())
    }

    pub(crate) fn tick_at(&mut self, now: Instant) -> Vec<PagerEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Settling {
            return events;
        }

        let position = self.animator.update_at(now);
        if self.animator.is_animating() {
            if position != self.position {
                self.position = position;
                events.push(self.scrolled());
            }
        } else {
            self.finish(&mut events);
        }
        events
    }

    fn finish(&mut self, events: &mut Vec<PagerEvent>) {
        self.position = self.current_page as f32;
        events.push(self.scrolled());
        self.set_phase(Phase::Idle, events);
    }
}
