use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::app::domain::layout::LayoutMode;
use crate::app::domain::messages::Message;
use crate::app::domain::navigation::NavigationState;
use crate::app::domain::section::SectionId;
use super::theme::Palette;

pub const NAV_HEIGHT: i32 = 64;
const NAV_BUTTON_WIDTH: i32 = 110;
const HAMBURGER_WIDTH: i32 = 44;
const MENU_ITEM_HEIGHT: i32 = 48;
const MENU_PADDING: i32 = 8;

/// Drop-down menu shows only on narrow windows, and only while open.
pub fn menu_visible(state: &NavigationState, mode: LayoutMode) -> bool {
    mode.is_mobile() && state.mobile_menu_open
}

pub fn hamburger_label(open: bool) -> &'static str {
    if open { "\u{2715}" } else { "\u{2630}" }
}

/// Height the parent column must reserve for the drop-down.
pub fn menu_height(visible: bool) -> i32 {
    if visible {
        SectionId::ALL.len() as i32 * MENU_ITEM_HEIGHT + 2 * MENU_PADDING
    } else {
        0
    }
}

fn flat_button(label: &str) -> Button {
    let mut btn = Button::default().with_label(label);
    btn.set_frame(FrameType::FlatBox);
    btn.set_down_frame(FrameType::FlatBox);
    btn.clear_visible_focus();
    btn
}

pub struct NavBar {
    pub bar: Flex,
    pub menu: Flex,
    title: Frame,
    desktop_buttons: Vec<(SectionId, Button)>,
    hamburger: Button,
    menu_buttons: Vec<(SectionId, Button)>,
}

impl NavBar {
    /// Build the bar and its drop-down inside the current group.
    pub fn new(title: &str, sender: &Sender<Message>) -> Self {
        let mut bar = Flex::default().row();
        bar.set_margins(16, 12, 16, 12);
        bar.set_spacing(8);

        let mut title_frame = Frame::default().with_label(title);
        title_frame.set_label_font(Font::HelveticaBold);
        title_frame.set_label_size(22);
        title_frame.set_align(Align::Left | Align::Inside);

        let mut desktop_buttons = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            let mut btn = flat_button(section.label());
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(section))
            });
            bar.fixed(&btn, NAV_BUTTON_WIDTH);
            desktop_buttons.push((section, btn));
        }

        let mut hamburger = flat_button(hamburger_label(false));
        hamburger.set_label_size(24);
        hamburger.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleMobileMenu)
        });
        bar.fixed(&hamburger, HAMBURGER_WIDTH);
        bar.end();

        let mut menu = Flex::default().column();
        menu.set_margins(0, MENU_PADDING, 0, MENU_PADDING);
        menu.set_frame(FrameType::FlatBox);
        let mut menu_buttons = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            let mut btn = flat_button(&format!("    {}", section.label()));
            btn.set_align(Align::Left | Align::Inside);
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(section))
            });
            menu.fixed(&btn, MENU_ITEM_HEIGHT);
            menu_buttons.push((section, btn));
        }
        menu.end();
        menu.hide();

        Self {
            bar,
            menu,
            title: title_frame,
            desktop_buttons,
            hamburger,
            menu_buttons,
        }
    }

    /// Restyle from the navigation flags. Returns the height the drop-down
    /// needs in the parent column.
    pub fn sync(&mut self, state: &NavigationState, mode: LayoutMode, palette: &Palette) -> i32 {
        let background = palette.nav_background(state.scrolled);
        self.bar.set_frame(palette.nav_frame(state.scrolled));
        self.bar.set_color(background);
        self.title.set_label_color(palette.heading);

        for (section, btn) in &mut self.desktop_buttons {
            let active = state.is_active(*section);
            btn.set_color(background);
            btn.set_selection_color(background);
            btn.set_label_color(if active { palette.nav_active } else { palette.nav_text });
            btn.set_label_font(if active { Font::HelveticaBold } else { Font::Helvetica });
            btn.set_label_size(if active { 17 } else { 16 });
            if mode.is_mobile() {
                btn.hide();
            } else {
                btn.show();
            }
        }

        self.hamburger.set_label(hamburger_label(state.mobile_menu_open));
        self.hamburger.set_color(background);
        self.hamburger.set_selection_color(background);
        self.hamburger.set_label_color(palette.heading);
        if mode.is_mobile() {
            self.hamburger.show();
        } else {
            self.hamburger.hide();
        }

        let visible = menu_visible(state, mode);
        self.menu.set_color(background);
        for (section, btn) in &mut self.menu_buttons {
            let active = state.is_active(*section);
            let fill = if active { palette.nav_active_bg } else { background };
            btn.set_color(fill);
            btn.set_selection_color(fill);
            btn.set_label_color(if active { palette.nav_active } else { palette.nav_text });
            btn.set_label_font(Font::HelveticaBold);
            btn.set_label_size(16);
        }
        if visible {
            self.menu.show();
        } else {
            self.menu.hide();
        }

        self.bar.layout();
        self.bar.redraw();
        self.menu.redraw();
        menu_height(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_only_on_mobile_when_open() {
        let open = NavigationState { mobile_menu_open: true, ..Default::default() };
        let closed = NavigationState::default();
        assert!(menu_visible(&open, LayoutMode::Mobile));
        assert!(!menu_visible(&closed, LayoutMode::Mobile));
        assert!(!menu_visible(&open, LayoutMode::Desktop));
    }

    #[test]
    fn test_hamburger_label_toggles() {
        assert_ne!(hamburger_label(true), hamburger_label(false));
    }

    #[test]
    fn test_menu_height() {
        assert_eq!(menu_height(false), 0);
        assert_eq!(menu_height(true), 4 * MENU_ITEM_HEIGHT + 2 * MENU_PADDING);
    }
}
