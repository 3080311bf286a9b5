//! Terminal rendering surface
//!
//! Rasterizes rounded rectangles into a ratatui buffer. One terminal cell
//! covers `cell_width` by `2 * cell_width` indicator units, since cells are
//! about twice as tall as they are wide. A cell is painted when its center
//! falls inside the shape; translucent colors are composited over the
//! surface background because terminals have no alpha.

use pillbar_core::{Rect, Rgba, Surface, SurfaceSize};
use ratatui::{buffer::Buffer, layout::Rect as Area, style::Color};

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Area,
    cell_width: f32,
    cell_height: f32,
    background: Rgba,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Area, cell_width: f32, background: Rgba) -> Self {
        let cell_width = if cell_width.is_finite() && cell_width > 0.0 {
            cell_width
        } else {
            1.0
        };
        Self {
            buf,
            area,
            cell_width,
            cell_height: cell_width * 2.0,
            background,
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.area.width as f32 * self.cell_width,
            self.area.height as f32 * self.cell_height,
        )
    }

    fn draw_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Rgba) {
        let fill = to_color(color.over(self.background));
        for row in 0..self.area.height {
            let cy = (row as f32 + 0.5) * self.cell_height;
            if cy < rect.top || cy > rect.bottom {
                continue;
            }
            for col in 0..self.area.width {
                let cx = (col as f32 + 0.5) * self.cell_width;
                if !contains(&rect, corner_radius, cx, cy) {
                    continue;
                }
                if let Some(cell) = self.buf.cell_mut((self.area.x + col, self.area.y + row)) {
                    cell.set_symbol(" ").set_bg(fill);
                }
            }
        }
    }
}

pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Point-in-rounded-rectangle test
pub fn contains(rect: &Rect, corner_radius: f32, x: f32, y: f32) -> bool {
    if x < rect.left || x > rect.right || y < rect.top || y > rect.bottom {
        return false;
    }
    let radius = corner_radius
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);
    if radius == 0.0 {
        return true;
    }

    // Distance past the straight edges, zero outside the corner squares
    let dx = (rect.left + radius - x).max(x - (rect.right - radius)).max(0.0);
    let dy = (rect.top + radius - y).max(y - (rect.bottom - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    #[test]
    fn test_contains_square_corners() {
        let r = rect(0.0, 0.0, 40.0, 20.0);
        assert!(contains(&r, 0.0, 0.5, 0.5));
        assert!(contains(&r, 0.0, 39.5, 19.5));
        assert!(!contains(&r, 0.0, 40.5, 10.0));
    }

    #[test]
    fn test_contains_rounded_corners() {
        let r = rect(0.0, 0.0, 40.0, 20.0);
        // Fully rounded: corner radius capped at half height
        assert!(!contains(&r, 9999.0, 1.0, 1.0));
        assert!(contains(&r, 9999.0, 1.0, 10.0));
        assert!(contains(&r, 9999.0, 20.0, 0.5));
        assert!(!contains(&r, 9999.0, 39.0, 19.0));
    }

    #[test]
    fn test_surface_size_in_units() {
        let area = Area::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        let surface = TerminalSurface::new(&mut buf, area, 10.0, Rgba::rgb(0, 0, 0));
        assert_eq!(surface.size(), SurfaceSize::new(400.0, 60.0));
    }

    #[test]
    fn test_draw_fills_covered_cells() {
        let area = Area::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let black = Rgba::rgb(0, 0, 0);
        {
            let mut surface = TerminalSurface::new(&mut buf, area, 10.0, black);
            // Columns 2..6 (units 20..60), the whole row height
            surface.draw_rounded_rect(rect(20.0, 0.0, 60.0, 20.0), 10.0, Rgba::WHITE);
        }

        let white = Color::Rgb(255, 255, 255);
        let painted: Vec<bool> = (0..10u16).map(|x| buf[(x, 0)].bg == white).collect();
        assert_eq!(
            painted,
            vec![false, false, true, true, true, true, false, false, false, false]
        );
    }

    #[test]
    fn test_translucent_color_is_composited() {
        let area = Area::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        {
            let mut surface = TerminalSurface::new(&mut buf, area, 10.0, Rgba::rgb(0, 0, 0));
            surface.draw_rounded_rect(rect(0.0, 0.0, 20.0, 20.0), 0.0, Rgba::from_argb(0x3fff_ffff));
        }
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(63, 63, 63));
    }

    #[test]
    fn test_offset_area_is_respected() {
        let full = Area::new(0, 0, 10, 4);
        let area = Area::new(3, 2, 4, 1);
        let mut buf = Buffer::empty(full);
        {
            let mut surface = TerminalSurface::new(&mut buf, area, 10.0, Rgba::rgb(0, 0, 0));
            surface.draw_rounded_rect(rect(0.0, 0.0, 40.0, 20.0), 0.0, Rgba::WHITE);
        }
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(buf[(3, 2)].bg, white);
        assert_eq!(buf[(6, 2)].bg, white);
        assert_ne!(buf[(2, 2)].bg, white);
        assert_ne!(buf[(3, 1)].bg, white);
    }
}
