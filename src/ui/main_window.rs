use fltk::{
    app::{self, Sender},
    enums::Event,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use crate::app::domain::content::Profile;
use crate::app::domain::messages::Message;
use crate::app::domain::page::build_page;
use crate::app::domain::settings::AppConfig;
use super::nav_bar::{NAV_HEIGHT, NavBar};
use super::page_view::PageView;
use super::shortcuts::shortcut_message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub nav_bar: NavBar,
    pub page: PageView,
}

pub fn build_main_window(profile: &Profile, config: &AppConfig, sender: &Sender<Message>) -> MainWidgets {
    let (width, height) = (config.window_width, config.window_height);
    let mut wind = Window::new(100, 100, width, height, None);
    wind.set_label(&format!("{} - Portfolio", profile.name));
    wind.set_xclass("Portfolio");
    wind.size_range(320, 240, 0, 0);

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(FlexType::Column);

    let nav_bar = NavBar::new(profile.name, sender);
    flex.fixed(&nav_bar.bar, NAV_HEIGHT);
    flex.fixed(&nav_bar.menu, 0);

    let page = PageView::new(build_page(profile), *sender, config.scroll_duration_secs());

    flex.end();
    wind.resizable(&flex);
    wind.end();

    wind.resize_callback({
        let s = *sender;
        move |_, _, _, w, h| s.send(Message::Resized(w, h))
    });

    // Only the window manager's close button quits; Escape is ignored.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    wind.handle({
        let s = *sender;
        move |_, event| match event {
            Event::KeyDown | Event::Shortcut => {
                let ctrl = app::is_event_ctrl() || app::is_event_command();
                match shortcut_message(app::event_key(), ctrl) {
                    Some(msg) => {
                        s.send(msg);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    });

    MainWidgets {
        wind,
        flex,
        nav_bar,
        page,
    }
}
