use fltk::{app::Sender, dialog, group::Flex, prelude::*, window::Window};

use super::controllers::NavigationController;
use super::domain::content::{ContactLink, PROFILE};
use super::domain::layout::LayoutMode;
use super::domain::messages::Message;
use super::domain::settings::AppConfig;
use super::infrastructure::links::open_link;
use super::infrastructure::scroll_watch::ScrollWatch;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::nav_bar::NavBar;
use crate::ui::page_view::PageView;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::theme::{Palette, apply_window_theme};

/// Main application coordinator: owns the widgets, the navigation flags
/// and the scroll listener, and applies messages to them.
pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub nav_bar: NavBar,
    pub page: PageView,
    pub navigation: NavigationController,
    pub config: AppConfig,
    pub palette: Palette,
    pub layout: LayoutMode,
    window_width: i32,
    // Dropped with the state, which unregisters the listener.
    _scroll_watch: ScrollWatch,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, config: AppConfig) -> Self {
        let MainWidgets { wind, flex, nav_bar, page } = widgets;
        let palette = Palette::new(config.is_dark());
        let window_width = wind.w();
        let scroll_watch = ScrollWatch::start(&page.scroll, sender);

        Self {
            window: wind,
            flex,
            nav_bar,
            page,
            navigation: NavigationController::new(),
            config,
            palette,
            layout: LayoutMode::from_width(window_width),
            window_width,
            _scroll_watch: scroll_watch,
        }
    }

    /// First layout. Call after the window is shown so text can be measured.
    pub fn start(&mut self) {
        self.apply_theme();
        self.relayout();
    }

    pub fn handle(&mut self, msg: Message) {
        tracing::debug!(?msg, "dispatch");
        match msg {
            Message::NavigateTo(section) => {
                self.navigation.select_section(section);
                // Collapse the drop-down first so the page has its final height.
                self.sync_navigation();
                self.navigation.scroll_to(section, &mut self.page);
            }
            Message::ToggleMobileMenu => {
                self.navigation.toggle_mobile_menu();
                self.sync_navigation();
            }
            Message::Scrolled(offset) => {
                if self.navigation.handle_scroll(offset) {
                    self.sync_navigation();
                }
            }
            Message::Resized(width, _) => {
                if width != self.window_width {
                    self.window_width = width;
                    self.relayout();
                }
            }
            Message::ToggleDarkMode => {
                self.palette = Palette::new(!self.palette.is_dark);
                self.apply_theme();
                self.relayout();
            }
            Message::ShowAbout => show_about_dialog(&PROFILE, &self.palette),
            Message::OpenLink(link) => self.open_contact(link),
            // The main loop exits before dispatching Quit
            Message::Quit => {}
        }
    }

    /// Push the navigation flags into the nav bar and resize the drop-down.
    fn sync_navigation(&mut self) {
        let menu_height = self.nav_bar.sync(self.navigation.state(), self.layout, &self.palette);
        self.flex.fixed(&self.nav_bar.menu, menu_height);
        self.flex.layout();
        self.window.redraw();
    }

    fn relayout(&mut self) {
        let layout = LayoutMode::from_width(self.window_width);
        if layout != self.layout {
            tracing::debug!(?layout, width = self.window_width, "layout mode changed");
        }
        self.layout = layout;
        self.sync_navigation();
        self.page.render(&self.palette, self.layout, self.window_width);
    }

    fn apply_theme(&mut self) {
        apply_window_theme(&mut self.window, &self.palette);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.palette.is_dark);
    }

    fn open_contact(&mut self, link: ContactLink) {
        if let Err(e) = open_link(&link) {
            tracing::warn!("{}", e);
            let handler = match link {
                ContactLink::Email(_) => "an email client",
                ContactLink::Phone(_) => "a phone handler",
            };
            dialog::alert_default(&format!("Could not open {}.\n\n{}", handler, link.uri()));
        }
    }
}
