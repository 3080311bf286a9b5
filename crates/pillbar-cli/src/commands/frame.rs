use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use pillbar_core::{
    AppConfig, PageHost, PagerEvent, PagerIndicator, Phase, Pill, RecordingSurface, ScrollState,
    SurfaceSize,
};

/// Which way the replayed drag travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DragDirection {
    /// A single sample, nothing latched
    None,
    /// From `page` towards `page + 1`
    Forward,
    /// From `page + 1` back towards `page`
    Backward,
}

#[derive(Debug, Clone, Copy)]
pub struct FrameArgs {
    pub pages: usize,
    pub page: usize,
    pub offset: f32,
    pub direction: DragDirection,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
struct FrameDump {
    pages: usize,
    state: Option<ScrollState>,
    pills: Vec<Pill>,
}

/// Fixed page count for the replay
struct StaticPager {
    pages: usize,
    current: usize,
}

impl PageHost for StaticPager {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn current_page(&self) -> usize {
        self.current
    }
}

pub fn run(config: &AppConfig, args: FrameArgs, json: bool) -> Result<()> {
    let mut indicator = replay(config, args)?;

    let mut surface = RecordingSurface::new(SurfaceSize::new(args.width, args.height));
    let drawn = indicator.draw(&mut surface);
    tracing::debug!("replayed frame with {} pills", drawn);

    let dump = FrameDump {
        pages: args.pages,
        state: indicator.scroll_state().copied(),
        pills: indicator.pills(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let Some(state) = dump.state else {
        println!("Indicator hidden ({} page(s))", dump.pages);
        return Ok(());
    };

    println!(
        "anchor {}  direction {:?}  offset {:.3}  phase {:?}\n",
        state.anchor_index, state.direction, state.prev_offset, state.phase
    );
    println!(
        "{:>4}  {:>9}  {:>9}  {:>9}  {:>9}  {:>7}  {}",
        "slot", "left", "top", "right", "bottom", "corner", "color"
    );
    for pill in &dump.pills {
        println!(
            "{:>4}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9.2}  {:>7.2}  {}",
            pill.slot,
            pill.rect.left,
            pill.rect.top,
            pill.rect.right,
            pill.rect.bottom,
            pill.corner_radius,
            pill.color
        );
    }

    Ok(())
}

/// Drive a fresh indicator through a drag that ends at `page + offset`
fn replay(config: &AppConfig, args: FrameArgs) -> Result<PagerIndicator> {
    let style = config.indicator.style()?;
    let mut indicator = PagerIndicator::new(style);
    indicator.resize(SurfaceSize::new(args.width, args.height));

    let page = args.page.min(args.pages.saturating_sub(2));
    let offset = args.offset.clamp(0.0, 1.0);

    // A backward drag starts on the page above
    let start = match args.direction {
        DragDirection::Backward => page + 1,
        DragDirection::None | DragDirection::Forward => page,
    };
    let pager = StaticPager {
        pages: args.pages,
        current: start,
    };
    indicator.attach(Some(&pager));

    // Two lead-in samples on the far side of `offset` latch the direction
    // before the final one lands. A final offset of zero never relatches.
    let samples: Vec<f32> = match args.direction {
        DragDirection::None => vec![offset],
        DragDirection::Forward if offset > 0.0 => vec![offset * 0.25, offset * 0.5, offset],
        DragDirection::Forward => vec![0.25, 0.5, offset],
        DragDirection::Backward => vec![
            offset + (1.0 - offset) * 0.75,
            offset + (1.0 - offset) * 0.5,
            offset,
        ],
    };

    indicator.handle_event(&pager, PagerEvent::PhaseChanged(Phase::Dragging));
    for sample in samples {
        indicator.handle_event(
            &pager,
            PagerEvent::Scrolled {
                page,
                offset: sample,
            },
        );
    }

    Ok(indicator)
}
