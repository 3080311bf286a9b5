//! Collaborator seams: the paged view being tracked and the surface pills are drawn on.

use crate::color::Rgba;
use crate::layout::{Rect, SurfaceSize};

/// Paged view the indicator follows
pub trait PageHost {
    fn page_count(&self) -> usize;
    fn current_page(&self) -> usize;
}

/// Drawing target for the pills
pub trait Surface {
    /// Current drawable size
    fn size(&self) -> SurfaceSize;

    /// Fill `rect` with `color`, corners rounded by `corner_radius`
    fn draw_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Rgba);
}

impl<T: PageHost + ?Sized> PageHost for &T {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn current_page(&self) -> usize {
        (**self).current_page()
    }
}

/// Surface that records every draw call, handy for dumps and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub size: SurfaceSize,
    pub commands: Vec<(Rect, f32, Rgba)>,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn draw_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Rgba) {
        self.commands.push((rect, corner_radius, color));
    }
}
