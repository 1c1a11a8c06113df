use super::section::SectionId;

/// Vertical offset, in pixels, past which the nav bar switches to its
/// scrolled style.
pub const SCROLL_THRESHOLD: i32 = 50;

/// True iff the page has scrolled strictly past the threshold.
pub fn is_scrolled(offset: i32) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Transient UI flags driving the navigation bar. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl NavigationState {
    /// Recompute the scrolled flag. Returns true if it flipped.
    pub fn on_scroll(&mut self, offset: i32) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Mark `section` active and close the mobile menu.
    pub fn select_section(&mut self, section: SectionId) {
        self.active_section = section;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = NavigationState::default();
        assert_eq!(state.active_section, SectionId::About);
        assert!(!state.mobile_menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_scroll_threshold_boundaries() {
        assert!(!is_scrolled(0));
        assert!(!is_scrolled(50));
        assert!(is_scrolled(51));
        assert!(is_scrolled(100));
    }

    #[test]
    fn test_on_scroll_reports_flips_only() {
        let mut state = NavigationState::default();
        assert!(!state.on_scroll(10));
        assert!(state.on_scroll(51));
        assert!(state.scrolled);
        assert!(!state.on_scroll(300));
        assert!(state.on_scroll(50));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_select_section_closes_menu_for_every_section() {
        for section in SectionId::ALL {
            let mut state = NavigationState {
                mobile_menu_open: true,
                ..Default::default()
            };
            state.select_section(section);
            assert_eq!(state.active_section, section);
            assert!(!state.mobile_menu_open);
            assert!(state.is_active(section));
        }
    }

    #[test]
    fn test_select_section_leaves_scrolled_alone() {
        let mut state = NavigationState::default();
        state.on_scroll(200);
        state.select_section(SectionId::Contact);
        assert!(state.scrolled);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [false, true] {
            let mut state = NavigationState {
                mobile_menu_open: start,
                ..Default::default()
            };
            state.toggle_mobile_menu();
            assert_eq!(state.mobile_menu_open, !start);
            state.toggle_mobile_menu();
            assert_eq!(state.mobile_menu_open, start);
        }
    }
}
