use serde::{Deserialize, Serialize};

use crate::host::{PageHost, Surface};
use crate::layout::{LayoutConfig, PillStyle, SurfaceSize};
use crate::render::{self, Pill};
use crate::scroll::{PagerEvent, ScrollState, ScrollTracker};

/// Whether the indicator takes part in layout at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// State that only exists while a qualifying pager is attached
#[derive(Debug, Clone)]
struct Attached {
    layout: LayoutConfig,
    tracker: ScrollTracker,
}

/// Smooth pill page indicator
///
/// Owns the scroll state of one pager. Feed it the pager's events through
/// [`PagerIndicator::handle_event`], let it know about surface size changes,
/// and call [`PagerIndicator::draw`] whenever [`PagerIndicator::take_redraw_request`]
/// reports that a frame is due.
#[derive(Debug, Clone)]
pub struct PagerIndicator {
    style: PillStyle,
    surface_size: SurfaceSize,
    attached: Option<Attached>,
    visibility: Visibility,
    redraw_requested: bool,
}

impl Default for PagerIndicator {
    fn default() -> Self {
        Self::new(PillStyle::default())
    }
}

impl PagerIndicator {
    pub fn new(style: PillStyle) -> Self {
        Self {
            style: style.sanitized(),
            surface_size: SurfaceSize::default(),
            attached: None,
            visibility: Visibility::Hidden,
            redraw_requested: false,
        }
    }

    pub fn style(&self) -> &PillStyle {
        &self.style
    }

    /// Attach to a pager
    ///
    /// A missing pager, or one with fewer than two pages, hides the indicator
    /// and drops any previous attachment.
    pub fn attach<H: PageHost + ?Sized>(&mut self, host: Option<&H>) -> Visibility {
        let Some(host) = host else {
            tracing::debug!("attach without a pager, hiding indicator");
            self.detach();
            return self.visibility;
        };

        let page_count = host.page_count();
        if page_count <= 1 {
            tracing::debug!("pager has {} page(s), hiding indicator", page_count);
            self.detach();
            return self.visibility;
        }

        let tracker = ScrollTracker::new(page_count, host.current_page());
        tracing::debug!(
            "attached to pager with {} pages at page {}",
            page_count,
            tracker.state().anchor_index
        );
        self.attached = Some(Attached {
            layout: LayoutConfig::new(self.style, page_count, self.surface_size),
            tracker,
        });
        self.visibility = Visibility::Shown;
        self.redraw_requested = true;
        self.visibility
    }

    /// Drop the pager and all scroll state
    pub fn detach(&mut self) {
        if self.attached.take().is_some() {
            tracing::debug!("detached from pager");
        }
        self.visibility = Visibility::Hidden;
        self.redraw_requested = false;
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    /// Apply a pager event; ignored while nothing is attached
    pub fn handle_event<H: PageHost + ?Sized>(&mut self, host: &H, event: PagerEvent) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        attached.tracker.handle(event, host.current_page());
        self.redraw_requested = true;
    }

    /// The surface changed size
    pub fn resize(&mut self, size: SurfaceSize) {
        self.surface_size = size;
        if let Some(attached) = self.attached.as_mut() {
            attached.layout.resize(size);
        }
    }

    /// Consume the pending redraw request, if any
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    pub fn scroll_state(&self) -> Option<&ScrollState> {
        self.attached.as_ref().map(|a| a.tracker.state())
    }

    pub fn layout(&self) -> Option<&LayoutConfig> {
        self.attached.as_ref().map(|a| &a.layout)
    }

    /// Draw commands for the current state, empty while hidden
    pub fn pills(&self) -> Vec<Pill> {
        match &self.attached {
            Some(attached) => render::pills(&attached.layout, attached.tracker.state()),
            None => Vec::new(),
        }
    }

    /// Draw the current frame, returning the number of pills drawn
    ///
    /// Picks up surface size changes that were not announced through `resize`.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let size = surface.size();
        if size != self.surface_size {
            self.resize(size);
        }

        match &self.attached {
            Some(attached) => render::draw(&attached.layout, attached.tracker.state(), surface),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingSurface;
    use crate::scroll::{Direction, Phase};

    struct FakePager {
        pages: usize,
        current: usize,
    }

    impl PageHost for FakePager {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn current_page(&self) -> usize {
            self.current
        }
    }

    fn attached(pages: usize, current: usize) -> (PagerIndicator, FakePager) {
        let pager = FakePager { pages, current };
        let mut indicator = PagerIndicator::default();
        indicator.resize(SurfaceSize::new(400.0, 40.0));
        assert_eq!(indicator.attach(Some(&pager)), Visibility::Shown);
        (indicator, pager)
    }

    #[test]
    fn test_attach_without_pager_hides() {
        let mut indicator = PagerIndicator::default();
        assert_eq!(indicator.attach::<FakePager>(None), Visibility::Hidden);
        assert!(!indicator.needs_redraw());

        let mut surface = RecordingSurface::new(SurfaceSize::new(400.0, 40.0));
        assert_eq!(indicator.draw(&mut surface), 0);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_attach_single_or_no_page_hides() {
        for pages in [0, 1] {
            let pager = FakePager { pages, current: 0 };
            let mut indicator = PagerIndicator::default();
            assert_eq!(indicator.attach(Some(&pager)), Visibility::Hidden);
            assert!(!indicator.is_visible());
            assert!(indicator.pills().is_empty());

            let mut surface = RecordingSurface::new(SurfaceSize::new(400.0, 40.0));
            assert_eq!(indicator.draw(&mut surface), 0);
        }
    }

    #[test]
    fn test_attach_shows_and_requests_redraw() {
        let (mut indicator, _pager) = attached(9, 2);
        assert!(indicator.is_visible());
        assert_eq!(indicator.scroll_state(), Some(&ScrollState::idle(2)));
        assert!(indicator.take_redraw_request());
        assert!(!indicator.take_redraw_request());

        let mut surface = RecordingSurface::new(SurfaceSize::new(400.0, 40.0));
        assert_eq!(indicator.draw(&mut surface), 9);
        assert_eq!(surface.commands[2].2, indicator.style().selected_color);
    }

    #[test]
    fn test_reattach_to_single_page_hides_again() {
        let (mut indicator, _pager) = attached(3, 0);
        let single = FakePager { pages: 1, current: 0 };
        assert_eq!(indicator.attach(Some(&single)), Visibility::Hidden);
        assert!(indicator.scroll_state().is_none());
        assert!(indicator.layout().is_none());
    }

    #[test]
    fn test_events_ignored_while_hidden() {
        let pager = FakePager { pages: 1, current: 0 };
        let mut indicator = PagerIndicator::default();
        indicator.attach(Some(&pager));
        indicator.handle_event(&pager, PagerEvent::PhaseChanged(Phase::Dragging));
        assert!(!indicator.needs_redraw());
        assert!(indicator.scroll_state().is_none());
    }

    #[test]
    fn test_full_gesture_round_trip() {
        let (mut indicator, mut pager) = attached(5, 1);
        indicator.take_redraw_request();

        indicator.handle_event(&pager, PagerEvent::PhaseChanged(Phase::Dragging));
        assert!(indicator.take_redraw_request());
        for offset in [0.1, 0.3, 0.5] {
            indicator.handle_event(&pager, PagerEvent::Scrolled { page: 1, offset });
            assert!(indicator.take_redraw_request());
        }
        let state = *indicator.scroll_state().unwrap();
        assert_eq!(state.direction, Direction::Forward);
        assert_eq!(state.anchor_index, 1);

        indicator.handle_event(&pager, PagerEvent::PhaseChanged(Phase::Settling));
        pager.current = 2;
        indicator.handle_event(&pager, PagerEvent::Scrolled { page: 1, offset: 0.9 });
        indicator.handle_event(&pager, PagerEvent::PhaseChanged(Phase::Idle));

        assert_eq!(indicator.scroll_state(), Some(&ScrollState::idle(2)));
        let pills = indicator.pills();
        assert_eq!(pills[2].color, indicator.style().selected_color);
        assert_eq!(pills[2].rect.width(), 40.0);
    }

    #[test]
    fn test_draw_picks_up_new_surface_size() {
        let (mut indicator, _pager) = attached(3, 0);
        let before = indicator.layout().unwrap().start_offset;

        let mut surface = RecordingSurface::new(SurfaceSize::new(600.0, 40.0));
        indicator.draw(&mut surface);
        let after = indicator.layout().unwrap().start_offset;
        assert_eq!(after - before, 100.0);
        assert_eq!(surface.commands[0].0.left, after);
    }

    #[test]
    fn test_resize_before_attach_is_remembered() {
        let pager = FakePager { pages: 3, current: 0 };
        let mut indicator = PagerIndicator::default();
        indicator.resize(SurfaceSize::new(400.0, 50.0));
        indicator.attach(Some(&pager));
        let layout = indicator.layout().unwrap();
        assert_eq!(layout.start_offset, 140.0);
        assert_eq!(layout.center_y, 25.0);
    }

    #[test]
    fn test_detach_clears_state() {
        let (mut indicator, _pager) = attached(4, 3);
        indicator.detach();
        assert!(!indicator.is_visible());
        assert!(indicator.pills().is_empty());
        assert!(!indicator.take_redraw_request());
    }
}
