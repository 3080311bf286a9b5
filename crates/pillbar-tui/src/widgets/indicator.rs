use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::surface::TerminalSurface;

pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let backdrop = Block::default().style(Style::default().bg(app.theme.backdrop_color()));
        frame.render_widget(backdrop, area);

        let mut surface = TerminalSurface::new(
            frame.buffer_mut(),
            area,
            app.config.demo.cell_size,
            app.theme.backdrop,
        );
        let drawn = app.indicator.draw(&mut surface);
        tracing::trace!("drew {} pills into {}x{} cells", drawn, area.width, area.height);
    }
}
