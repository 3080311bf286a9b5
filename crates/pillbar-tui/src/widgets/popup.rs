use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

const HELP_KEYS: &[(&str, &str)] = &[
    ("l / Right", "drag towards the next page"),
    ("h / Left", "drag towards the previous page"),
    ("Space / Enter", "release and settle"),
    ("L / Tab", "fling the drag forward"),
    ("H / S-Tab", "fling the drag backward"),
    ("1-9", "go to page"),
    ("g / G", "first / last page"),
    ("a", "attach / detach indicator"),
    ("q", "quit"),
];

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();

        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (HELP_KEYS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));

        let mut lines: Vec<Line> = HELP_KEYS
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}  ", keys),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(theme.grey1),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Create a centered rectangle with fixed width and height
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(2, 2, 20, 5);
        assert_eq!(centered_rect(50, 10, area), Rect::new(2, 2, 20, 5));
    }
}
