use pillbar_core::{AppConfig, PagerEvent, PagerIndicator, Visibility};

use crate::input::Action;
use crate::pager::SimulatedPager;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub pager: SimulatedPager,
    pub indicator: PagerIndicator,
    pub mode: Mode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Most recent event delivered to the indicator
    pub last_event: Option<PagerEvent>,
}

impl App {
    pub fn new(config: AppConfig) -> pillbar_core::Result<Self> {
        let style = config.indicator.style()?;
        let pager = SimulatedPager::new(
            config.demo.page_count,
            config.demo.initial_page,
            config.demo.settle.clone(),
        );

        let mut indicator = PagerIndicator::new(style);
        if indicator.attach(Some(&pager)) == Visibility::Hidden {
            tracing::info!(
                "{} page(s) configured, indicator stays hidden",
                config.demo.page_count
            );
        }

        Ok(Self {
            config,
            theme: Theme::default(),
            pager,
            indicator,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            last_event: None,
        })
    }

    /// Forward pager events to the indicator in delivery order
    fn deliver(&mut self, events: Vec<PagerEvent>) {
        for event in events {
            tracing::trace!(?event, "pager event");
            self.indicator.handle_event(&self.pager, event);
            self.last_event = Some(event);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let step = self.config.demo.drag_step;
        match action {
            Action::Quit => self.should_quit = true,
            Action::DragForward => {
                let events = self.pager.drag_by(step);
                self.deliver(events);
            }
            Action::DragBackward => {
                let events = self.pager.drag_by(-step);
                self.deliver(events);
            }
            Action::Release => {
                let events = self.pager.release();
                self.deliver(events);
            }
            Action::FlingForward => {
                let events = self.pager.fling(true);
                self.deliver(events);
            }
            Action::FlingBackward => {
                let events = self.pager.fling(false);
                self.deliver(events);
            }
            Action::SelectPage(page) => self.select_page(page),
            Action::FirstPage => self.select_page(0),
            Action::LastPage => self.select_page(self.config.demo.page_count.saturating_sub(1)),
            Action::ToggleAttach => self.toggle_attach(),
            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    fn select_page(&mut self, page: usize) {
        if page >= self.config.demo.page_count {
            self.status_message = Some(format!("No page {}", page + 1));
            return;
        }
        self.status_message = None;
        let events = self.pager.select_page(page);
        self.deliver(events);
    }

    fn toggle_attach(&mut self) {
        if self.indicator.is_visible() {
            self.indicator.detach();
            self.status_message = Some("Indicator detached".to_string());
        } else {
            let visibility = self.indicator.attach(Some(&self.pager));
            self.status_message = Some(match visibility {
                Visibility::Shown => "Indicator attached".to_string(),
                Visibility::Hidden => "Not enough pages to show the indicator".to_string(),
            });
        }
    }

    /// Advance the settle glide by one frame
    pub fn tick(&mut self) {
        let events = self.pager.tick();
        self.deliver(events);
    }

    /// Whether the event loop should poll at the animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.pager.is_settling()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillbar_core::{Direction, Phase, ScrollState};

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_new_attaches_indicator() {
        let app = app();
        assert!(app.indicator.is_visible());
        assert_eq!(app.indicator.scroll_state(), Some(&ScrollState::idle(2)));
    }

    #[test]
    fn test_single_page_demo_hides_indicator() {
        let mut config = AppConfig::default();
        config.demo.page_count = 1;
        let app = App::new(config).unwrap();
        assert!(!app.indicator.is_visible());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let mut config = AppConfig::default();
        config.indicator.color = "not-a-color".to_string();
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_drag_flows_into_indicator() {
        let mut app = app();
        app.handle_action(Action::DragForward);
        app.handle_action(Action::DragForward);

        let state = app.indicator.scroll_state().unwrap();
        assert_eq!(state.phase, Phase::Dragging);
        assert_eq!(state.direction, Direction::Forward);
        assert_eq!(state.anchor_index, 2);
        assert!(matches!(app.last_event, Some(PagerEvent::Scrolled { page: 2, .. })));
    }

    #[test]
    fn test_release_enters_fast_updates() {
        let mut app = app();
        app.handle_action(Action::DragForward);
        app.handle_action(Action::Release);
        assert!(app.needs_fast_update());
        assert_eq!(app.indicator.scroll_state().unwrap().phase, Phase::Settling);
    }

    #[test]
    fn test_select_missing_page_sets_status() {
        let mut app = app();
        app.handle_action(Action::SelectPage(20));
        assert_eq!(app.status_message.as_deref(), Some("No page 21"));
        assert!(!app.needs_fast_update());
    }

    #[test]
    fn test_toggle_attach() {
        let mut app = app();
        app.handle_action(Action::ToggleAttach);
        assert!(!app.indicator.is_visible());
        app.handle_action(Action::ToggleAttach);
        assert!(app.indicator.is_visible());
    }

    #[test]
    fn test_help_mode() {
        let mut app = app();
        app.handle_action(Action::ShowHelp);
        assert_eq!(app.mode, Mode::Help);
        app.handle_action(Action::ExitMode);
        assert_eq!(app.mode, Mode::Normal);
    }
}
