//! Per-frame pill geometry
//!
//! Every span is derived from the slot index, the anchor, the direction and
//! the latest offset alone. Slots left of the anchor sit on the plain pitch
//! grid; slots right of it are pushed over by the selected pill's extra
//! width. While a transition runs, the extra width is split between the
//! anchor and the neighbour it moves towards, so the two always add up to
//! one selected and one unselected pill.

use serde::Serialize;

use crate::color::{blend, Rgba};
use crate::host::Surface;
use crate::layout::{LayoutConfig, Rect};
use crate::scroll::{Direction, ScrollState};

/// One draw command
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pill {
    pub slot: usize,
    pub rect: Rect,
    pub corner_radius: f32,
    pub color: Rgba,
}

/// Geometry and color of a single slot
///
/// # Panics
/// If `slot` is not below `layout.slot_count`.
pub fn pill(layout: &LayoutConfig, state: &ScrollState, slot: usize) -> Pill {
    assert!(
        slot < layout.slot_count,
        "slot {} out of range for {} slots",
        slot,
        layout.slot_count
    );

    let style = &layout.style;
    let pitch = style.pitch();
    let extra = style.extra_width();
    let w = style.pill_width;
    let selected = style.selected_pill_width;
    let o = state.prev_offset;
    let anchor = state.anchor_index;
    let x = slot as f32 * pitch;

    let (left, right, color) = if slot == anchor {
        match state.direction {
            Direction::None => (x, x + selected, style.selected_color),
            Direction::Forward => (
                x,
                x + w + extra * (1.0 - o),
                blend(style.selected_color, style.base_color, o),
            ),
            Direction::Backward => (
                x + extra * (1.0 - o),
                x + selected,
                blend(style.selected_color, style.base_color, 1.0 - o),
            ),
        }
    } else if slot == anchor + 1 {
        if state.direction == Direction::Forward {
            // Grows leftwards out of its right edge
            (
                x + extra * (1.0 - o),
                x + selected,
                blend(style.base_color, style.selected_color, o),
            )
        } else {
            (x + extra, x + extra + w, style.base_color)
        }
    } else if slot + 1 == anchor {
        if state.direction == Direction::Backward {
            (
                x,
                x + w + extra * (1.0 - o),
                blend(style.base_color, style.selected_color, 1.0 - o),
            )
        } else {
            (x, x + w, style.base_color)
        }
    } else if slot < anchor {
        (x, x + w, style.base_color)
    } else {
        (x + extra, x + extra + w, style.base_color)
    };

    Pill {
        slot,
        rect: Rect {
            left: layout.start_offset + left,
            top: layout.center_y - layout.half_height,
            right: layout.start_offset + right,
            bottom: layout.center_y + layout.half_height,
        },
        corner_radius: layout.effective_corner_radius(),
        color,
    }
}

/// Draw commands for every slot, in ascending slot order
pub fn pills(layout: &LayoutConfig, state: &ScrollState) -> Vec<Pill> {
    (0..layout.slot_count)
        .map(|slot| pill(layout, state, slot))
        .collect()
}

/// Emit the frame onto a surface, returning the number of pills drawn
pub fn draw<S: Surface + ?Sized>(layout: &LayoutConfig, state: &ScrollState, surface: &mut S) -> usize {
    let mut drawn = 0;
    for slot in 0..layout.slot_count {
        let pill = pill(layout, state, slot);
        surface.draw_rounded_rect(pill.rect, pill.corner_radius, pill.color);
        drawn += 1;
    }
    drawn
}
