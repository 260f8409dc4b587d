/// Per-screen view controllers
///
/// Each screen owns its transient UI state in one of these structs. The
/// application builds a fresh controller whenever a screen is entered and
/// drops it on exit, so nothing survives navigation.
use std::collections::HashMap;

use iced::time::Instant;

use super::data::{Catalog, ProjectRecord};
use super::filter::filter_projects;
use super::link::Section;

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Projects,
}

/// The active tag filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewSelection {
    #[default]
    Unfiltered,
    FilteredBy(String),
}

impl ViewSelection {
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        *self = ViewSelection::FilteredBy(tag.into());
    }

    pub fn clear_filter(&mut self) {
        *self = ViewSelection::Unfiltered;
    }

    pub fn selected_tag(&self) -> Option<&str> {
        match self {
            ViewSelection::Unfiltered => None,
            ViewSelection::FilteredBy(tag) => Some(tag),
        }
    }
}

/// State of the project listing screen
#[derive(Debug, Clone)]
pub struct ProjectsView {
    selection: ViewSelection,
    filter_menu_open: bool,
    /// When the currently visible grid started its entrance
    grid_shown_at: Instant,
}

impl ProjectsView {
    pub fn new(now: Instant) -> Self {
        Self {
            selection: ViewSelection::Unfiltered,
            filter_menu_open: false,
            grid_shown_at: now,
        }
    }

    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    pub fn is_filter_menu_open(&self) -> bool {
        self.filter_menu_open
    }

    pub fn grid_shown_at(&self) -> Instant {
        self.grid_shown_at
    }

    pub fn toggle_filter_menu(&mut self) {
        self.filter_menu_open = !self.filter_menu_open;
    }

    pub fn close_filter_menu(&mut self) {
        self.filter_menu_open = false;
    }

    pub fn select_tag(&mut self, tag: impl Into<String>, now: Instant) {
        self.selection.select_tag(tag);
        self.grid_shown_at = now;
    }

    pub fn clear_filter(&mut self, now: Instant) {
        self.selection.clear_filter();
        self.grid_shown_at = now;
    }

    /// A choice made from the filter panel applies and closes the panel
    pub fn choose_from_menu(&mut self, tag: Option<String>, now: Instant) {
        match tag {
            Some(tag) => self.select_tag(tag, now),
            None => self.clear_filter(now),
        }
        self.filter_menu_open = false;
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectRecord> {
        filter_projects(catalog.projects(), self.selection.selected_tag())
    }
}

/// State of the landing screen
#[derive(Debug, Clone)]
pub struct LandingView {
    menu_open: bool,
    entered_at: Instant,
    /// Relative scroll offset, 0.0 at the top and 1.0 at the bottom
    scroll: f32,
    /// Height of the viewport as a fraction of the whole content
    visible_fraction: f32,
    /// When each section first scrolled into view
    revealed: HashMap<Section, Instant>,
}

impl LandingView {
    const DEFAULT_VISIBLE_FRACTION: f32 = 0.2;
    /// How far past a section's start the viewport bottom must be to reveal it
    const REVEAL_MARGIN: f32 = 0.02;

    pub fn new(now: Instant) -> Self {
        Self {
            menu_open: false,
            entered_at: now,
            scroll: 0.0,
            visible_fraction: Self::DEFAULT_VISIBLE_FRACTION,
            revealed: HashMap::from([(Section::Home, now)]),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn entered_at(&self) -> Instant {
        self.entered_at
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn revealed_at(&self, section: Section) -> Option<Instant> {
        self.revealed.get(&section).copied()
    }

    pub fn revealed(&self) -> impl Iterator<Item = Instant> + '_ {
        self.revealed.values().copied()
    }

    /// Record a scroll position and reveal sections that came into view
    ///
    /// Sections reveal once and stay revealed.
    pub fn record_scroll(&mut self, relative_y: f32, visible_fraction: f32, now: Instant) {
        self.scroll = relative_y.clamp(0.0, 1.0);
        if visible_fraction > 0.0 && visible_fraction <= 1.0 {
            self.visible_fraction = visible_fraction;
        }

        let top = self.scroll * (1.0 - self.visible_fraction);
        let bottom = top + self.visible_fraction;

        for section in Section::ALL {
            if bottom >= section.scroll_fraction() + Self::REVEAL_MARGIN {
                self.revealed.entry(section).or_insert(now);
            }
        }
    }

    /// Relative offset that brings `section` to the top of the viewport
    pub fn snap_offset(&self, section: Section) -> f32 {
        let range = 1.0 - self.visible_fraction;
        if range <= f32::EPSILON {
            return 0.0;
        }
        (section.scroll_fraction() / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::record;
    use std::time::Duration;

    #[test]
    fn test_selection_transitions() {
        let mut selection = ViewSelection::default();
        assert_eq!(selection, ViewSelection::Unfiltered);

        selection.select_tag("GSAP");
        assert_eq!(selection, ViewSelection::FilteredBy("GSAP".to_string()));

        selection.select_tag("React");
        assert_eq!(selection.selected_tag(), Some("React"));

        selection.clear_filter();
        assert_eq!(selection, ViewSelection::Unfiltered);
        selection.clear_filter();
        assert_eq!(selection.selected_tag(), None);
    }

    #[test]
    fn test_projects_view_starts_unfiltered() {
        let catalog = Catalog::new(vec![record("A", &["React"]), record("B", &["GSAP"])]).unwrap();
        let view = ProjectsView::new(Instant::now());
        assert_eq!(view.selection(), &ViewSelection::Unfiltered);
        assert!(!view.is_filter_menu_open());
        assert_eq!(view.visible(&catalog).len(), 2);
    }

    #[test]
    fn test_menu_choice_applies_and_closes() {
        let catalog = Catalog::new(vec![record("A", &["React"]), record("B", &["GSAP"])]).unwrap();
        let start = Instant::now();
        let mut view = ProjectsView::new(start);

        view.toggle_filter_menu();
        assert!(view.is_filter_menu_open());

        let later = start + Duration::from_secs(1);
        view.choose_from_menu(Some("GSAP".to_string()), later);
        assert!(!view.is_filter_menu_open());
        assert_eq!(view.grid_shown_at(), later);
        let visible = view.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "B");

        view.toggle_filter_menu();
        view.choose_from_menu(None, later);
        assert!(!view.is_filter_menu_open());
        assert_eq!(view.visible(&catalog).len(), 2);
    }

    #[test]
    fn test_landing_reveals_sections_once() {
        let start = Instant::now();
        let mut view = LandingView::new(start);
        assert_eq!(view.revealed_at(Section::Home), Some(start));
        assert_eq!(view.revealed_at(Section::Projects), None);

        let first = start + Duration::from_millis(500);
        view.record_scroll(0.1, 0.25, first);
        assert_eq!(view.revealed_at(Section::Projects), Some(first));
        assert_eq!(view.revealed_at(Section::Contact), None);

        view.record_scroll(0.0, 0.25, start + Duration::from_secs(2));
        view.record_scroll(1.0, 0.25, start + Duration::from_secs(3));
        assert_eq!(view.revealed_at(Section::Projects), Some(first));
        assert!(view.revealed_at(Section::Contact).is_some());
    }

    #[test]
    fn test_snap_offset_stays_in_range() {
        let mut view = LandingView::new(Instant::now());
        view.record_scroll(0.0, 0.25, Instant::now());
        assert_eq!(view.snap_offset(Section::Home), 0.0);
        for section in Section::ALL {
            let offset = view.snap_offset(section);
            assert!((0.0..=1.0).contains(&offset));
        }
    }

    #[test]
    fn test_menu_flag() {
        let mut view = LandingView::new(Instant::now());
        view.open_menu();
        assert!(view.is_menu_open());
        view.close_menu();
        assert!(!view.is_menu_open());
    }
}
