use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal input, or a tick when nothing arrived in time
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// The poll timed out
    Tick,
}

/// Polls crossterm with two cadences: a slow idle tick and a fast one
/// for frames of the settle glide
pub struct EventHandler {
    idle_tick: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_tick(tick_rate_ms, Duration::from_millis(16))
    }

    pub fn with_animation_tick(tick_rate_ms: u64, animation_tick: Duration) -> Self {
        Self {
            idle_tick: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Wait up to the idle tick for input
    pub fn next(&self) -> Result<Option<AppEvent>> {
        wait_for(self.idle_tick)
    }

    /// Wait up to one animation frame for input
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        wait_for(self.animation_tick)
    }
}

fn wait_for(timeout: Duration) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(AppEvent::Tick));
    }
    Ok(translate(event::read()?))
}

/// Keep key presses and resizes, drop everything else
///
/// Some terminals report key releases and repeats as well; only presses
/// drive the pager.
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}
