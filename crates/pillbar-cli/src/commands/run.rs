use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use pillbar_core::AppConfig;
use pillbar_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    scroll::SettleConfigExt,
    widgets::{IndicatorWidget, PageViewWidget, PopupWidget, StatusBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    // Fail on bad colors before touching the terminal
    let mut app = App::new(config)?;

    let event_handler = EventHandler::with_animation_tick(
        app.config.demo.tick_rate_ms,
        app.config.demo.settle.frame_interval(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("pillbar"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Anything besides the indicator changed since the last frame
    let mut dirty = true;

    loop {
        let indicator_due = app.indicator.take_redraw_request();
        if dirty || indicator_due {
            terminal.draw(|frame| {
                let size = frame.area();

                // Main layout: indicator + page strip + status bar
                let main_layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(3),
                        Constraint::Length(5),
                        Constraint::Length(1),
                    ])
                    .split(size);

                IndicatorWidget::render(frame, main_layout[0], app);
                PageViewWidget::render(frame, main_layout[1], app);
                StatusBarWidget::render(frame, main_layout[2], app);

                if app.mode == Mode::Help {
                    PopupWidget::render_help(frame, &app.theme);
                }
            })?;
            dirty = false;
        }

        // Faster tick while the pager glides to rest
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.handle_action(action);
                    dirty = true;
                }
                AppEvent::Resize(width, height) => {
                    tracing::debug!("terminal resized to {}x{}", width, height);
                    dirty = true;
                }
                AppEvent::Tick => app.tick(),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
