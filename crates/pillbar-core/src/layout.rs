//! Static indicator geometry: the styleable values and the row placement
//! derived from them whenever the drawing surface changes size.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Axis-aligned rectangle in surface units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Drawable size reported by a surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Styleable pill attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillStyle {
    /// Unselected pill width, also the pill height
    pub pill_width: f32,
    /// Selected pill width, never narrower than `pill_width`
    pub selected_pill_width: f32,
    /// Space between adjacent pills
    pub gap: f32,
    pub corner_radius: f32,
    pub base_color: Rgba,
    pub selected_color: Rgba,
}

impl Default for PillStyle {
    fn default() -> Self {
        Self {
            pill_width: 20.0,
            selected_pill_width: 40.0,
            gap: 20.0,
            corner_radius: 9999.0,
            base_color: Rgba::from_argb(0x3fff_ffff),
            selected_color: Rgba::WHITE,
        }
    }
}

impl PillStyle {
    /// Clamp dimensions into their legal ranges
    ///
    /// Negative or non-finite sizes become 0 and the selected width is raised
    /// to at least the unselected width.
    pub fn sanitized(self) -> Self {
        let pill_width = non_negative("width", self.pill_width);
        let mut selected_pill_width = non_negative("selected_width", self.selected_pill_width);
        if selected_pill_width < pill_width {
            tracing::warn!(
                "selected_width {} is narrower than width {}, using {}",
                selected_pill_width,
                pill_width,
                pill_width
            );
            selected_pill_width = pill_width;
        }

        Self {
            pill_width,
            selected_pill_width,
            gap: non_negative("distance", self.gap),
            // infinite is fine here, it only ever means fully rounded
            corner_radius: if self.corner_radius >= 0.0 {
                self.corner_radius
            } else {
                non_negative("corner", self.corner_radius)
            },
            ..self
        }
    }

    /// Distance between the left edges of two neighbouring unselected pills
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pill_width + self.gap
    }

    /// Width the selected pill adds on top of an unselected one
    #[inline]
    pub fn extra_width(&self) -> f32 {
        self.selected_pill_width - self.pill_width
    }
}

fn non_negative(name: &str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!("indicator {} {} is out of range, using 0", name, value);
        0.0
    }
}

/// Row placement for one attached host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub slot_count: usize,
    pub style: PillStyle,
    /// Horizontal origin of slot 0, centers the row on the surface
    pub start_offset: f32,
    /// Vertical center of every pill
    pub center_y: f32,
    /// Half the pill height
    pub half_height: f32,
    size: SurfaceSize,
}

impl LayoutConfig {
    pub fn new(style: PillStyle, slot_count: usize, size: SurfaceSize) -> Self {
        let mut layout = Self {
            slot_count,
            style: style.sanitized(),
            start_offset: 0.0,
            center_y: 0.0,
            half_height: 0.0,
            size,
        };
        layout.resize(size);
        layout
    }

    /// Recompute the placement for a new surface size
    pub fn resize(&mut self, size: SurfaceSize) {
        let style = &self.style;
        let spacing = self.slot_count.saturating_sub(1) as f32 * style.pitch();
        self.start_offset = (size.width - spacing - style.selected_pill_width) / 2.0;
        self.center_y = size.height / 2.0;
        self.half_height = style.pill_width * 0.5;
        self.size = size;
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Total width of the row: every slot at base width plus the selected extra
    pub fn content_width(&self) -> f32 {
        if self.slot_count == 0 {
            return 0.0;
        }
        self.slot_count.saturating_sub(1) as f32 * self.style.pitch() + self.style.selected_pill_width
    }

    /// Corner radius handed to the surface
    ///
    /// A radius past half the pill height rounds no further, so it is capped there.
    pub fn effective_corner_radius(&self) -> f32 {
        self.style.corner_radius.min(self.half_height)
    }
}
