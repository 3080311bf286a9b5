use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pillbar_core::{Direction, Phase, Visibility};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let state_str = match app.indicator.scroll_state() {
            Some(state) => {
                let phase = match state.phase {
                    Phase::Idle => "idle",
                    Phase::Dragging => "dragging",
                    Phase::Settling => "settling",
                };
                let direction = match state.direction {
                    Direction::None => "-",
                    Direction::Forward => "fwd",
                    Direction::Backward => "back",
                };
                format!(
                    "{} | {} | anchor {} | offset {:.2}",
                    phase, direction, state.anchor_index, state.prev_offset
                )
            }
            None => match app.indicator.visibility() {
                Visibility::Hidden => "hidden".to_string(),
                Visibility::Shown => "shown".to_string(),
            },
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(" {} | {}", mode_str, state_str)
        };

        let help_hint = " q:quit h/l:drag space:release ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let status_fg = if app.status_message.is_some() {
            theme.warning
        } else {
            theme.fg0
        };

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(status_fg).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
