use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use pillbar_core::PageHost;

use crate::app::App;

/// The pages being scrolled, as a numbered strip
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Pages ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey1))
            .style(Style::default().bg(theme.bg0));

        let page_count = app.pager.page_count();
        let current = app.pager.current_page();
        let position = app.pager.position();

        let strip: Vec<Span> = (0..page_count)
            .map(|page| {
                let style = if page == current {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.grey1)
                };
                Span::styled(format!(" {} ", page + 1), style)
            })
            .collect();

        let lines = vec![
            Line::from(strip),
            Line::from(""),
            Line::from(Span::styled(
                format!("position {:.3}  page {}/{}", position, current + 1, page_count),
                Style::default().fg(theme.fg0),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
