use crate::app::domain::navigation::NavigationState;
use crate::app::domain::section::SectionId;

/// Brings a section into view. Implemented by the FLTK page view; tests use
/// a recording fake.
pub trait SectionScroller {
    /// Returns false when the section has no anchor on the page, in which
    /// case nothing scrolls.
    fn scroll_into_view(&mut self, section: SectionId) -> bool;
}

/// Owns the navigation flags and applies clicks and scroll samples to them.
#[derive(Debug, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Apply a scroll offset sample. Returns true if the nav bar needs
    /// restyling.
    pub fn handle_scroll(&mut self, offset: i32) -> bool {
        let changed = self.state.on_scroll(offset);
        if changed {
            tracing::debug!(offset, scrolled = self.state.scrolled, "scrolled flag changed");
        }
        changed
    }

    /// Nav button activation: mark the section active and close the mobile
    /// menu. The caller lays the nav bar out again and then calls
    /// [`scroll_to`](Self::scroll_to), so the scroll target is clamped
    /// against the viewport without the drop-down.
    pub fn select_section(&mut self, section: SectionId) {
        self.state.select_section(section);
    }

    /// Ask the view to bring `section` into view. Returns false when the
    /// section has no anchor.
    pub fn scroll_to<S>(&self, section: SectionId, scroller: &mut S) -> bool
    where
        S: SectionScroller + ?Sized,
    {
        let found = scroller.scroll_into_view(section);
        if !found {
            tracing::debug!(section = section.id(), "section anchor missing, not scrolling");
        }
        found
    }

    /// Hamburger click. Returns the new open state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.state.toggle_mobile_menu();
        self.state.mobile_menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::content::PROFILE;
    use crate::app::domain::layout::SectionAnchors;
    use crate::app::domain::page::build_page;

    /// Scroller backed by the anchors of the real page tree.
    struct RecordingScroller {
        anchors: Vec<SectionId>,
        requests: Vec<SectionId>,
    }

    impl RecordingScroller {
        fn for_page() -> Self {
            let anchors = build_page(&PROFILE).iter().filter_map(|s| s.nav()).collect();
            Self { anchors, requests: Vec::new() }
        }

        fn empty() -> Self {
            Self { anchors: Vec::new(), requests: Vec::new() }
        }
    }

    impl SectionScroller for RecordingScroller {
        fn scroll_into_view(&mut self, section: SectionId) -> bool {
            if self.anchors.contains(&section) {
                self.requests.push(section);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_select_every_section() {
        for section in SectionId::ALL {
            let mut nav = NavigationController::new();
            let mut scroller = RecordingScroller::for_page();
            nav.toggle_mobile_menu();
            nav.select_section(section);
            nav.scroll_to(section, &mut scroller);
            assert_eq!(nav.state().active_section, section);
            assert!(!nav.state().mobile_menu_open);
            assert_eq!(scroller.requests, vec![section]);
        }
    }

    #[test]
    fn test_click_skills_end_to_end() {
        let mut nav = NavigationController::new();
        let mut scroller = RecordingScroller::for_page();
        assert!(nav.toggle_mobile_menu());
        nav.select_section(SectionId::Skills);
        assert!(nav.scroll_to(SectionId::Skills, &mut scroller));
        assert_eq!(nav.state().active_section, SectionId::Skills);
        assert!(!nav.state().mobile_menu_open);
        assert_eq!(scroller.requests, vec![SectionId::Skills]);
    }

    #[test]
    fn test_missing_anchor_is_a_no_op_scroll() {
        let mut nav = NavigationController::new();
        let mut scroller = RecordingScroller::empty();
        nav.select_section(SectionId::Contact);
        assert!(!nav.scroll_to(SectionId::Contact, &mut scroller));
        assert_eq!(nav.state().active_section, SectionId::Contact);
        assert!(scroller.requests.is_empty());
    }

    #[test]
    fn test_scroll_to_100_sets_scrolled() {
        let mut nav = NavigationController::new();
        assert!(nav.handle_scroll(100));
        assert!(nav.state().scrolled);
        assert!(!nav.handle_scroll(120));
        assert!(nav.handle_scroll(0));
        assert!(!nav.state().scrolled);
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut nav = NavigationController::new();
        assert!(nav.toggle_mobile_menu());
        assert!(!nav.toggle_mobile_menu());
    }

    #[test]
    fn test_works_through_trait_object() {
        let nav = NavigationController::new();
        let mut scroller = RecordingScroller::for_page();
        let dyn_scroller: &mut dyn SectionScroller = &mut scroller;
        nav.scroll_to(SectionId::Experience, dyn_scroller);
        assert_eq!(scroller.requests, vec![SectionId::Experience]);
    }

    const WINDOW_HEIGHT: i32 = 768;
    const NAV_HEIGHT: i32 = 64;
    const MENU_HEIGHT: i32 = 208;

    /// Viewport whose height shrinks while the drop-down menu is laid out,
    /// the way the page's scroll area does in the window's column.
    struct ColumnScroller {
        anchors: SectionAnchors,
        menu_open: bool,
        target: Option<i32>,
    }

    impl ColumnScroller {
        fn viewport(&self) -> i32 {
            let menu = if self.menu_open { MENU_HEIGHT } else { 0 };
            WINDOW_HEIGHT - NAV_HEIGHT - menu
        }

        /// Mirror the navigation flags into the layout.
        fn sync(&mut self, state: &NavigationState) {
            self.menu_open = state.mobile_menu_open;
        }
    }

    impl SectionScroller for ColumnScroller {
        fn scroll_into_view(&mut self, section: SectionId) -> bool {
            self.target = self.anchors.scroll_target(section, self.viewport());
            self.target.is_some()
        }
    }

    #[test]
    fn test_contact_target_uses_viewport_without_menu() {
        let mut anchors = SectionAnchors::new();
        anchors.insert(SectionId::About, 900);
        anchors.insert(SectionId::Contact, 3000);
        anchors.set_content_height(3300);
        let mut scroller = ColumnScroller { anchors, menu_open: false, target: None };

        let mut nav = NavigationController::new();
        nav.toggle_mobile_menu();
        scroller.sync(nav.state());
        assert_eq!(scroller.viewport(), 496);

        nav.select_section(SectionId::Contact);
        scroller.sync(nav.state());
        assert!(nav.scroll_to(SectionId::Contact, &mut scroller));

        let closed_max = scroller.anchors.max_scroll(WINDOW_HEIGHT - NAV_HEIGHT);
        assert_eq!(closed_max, 2596);
        assert_eq!(scroller.target, Some(closed_max));
    }
}
