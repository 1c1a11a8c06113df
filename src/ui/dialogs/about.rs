use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use crate::app::domain::content::Profile;
use crate::ui::page_view::frame_label;
use crate::ui::theme::Palette;
use super::run_dialog;

const SHORTCUTS: &str = "Ctrl+1 .. Ctrl+4   Jump to About / Skills / Experience / Contact\n\
                         Ctrl+D   Toggle dark mode\n\
                         F1   This dialog\n\
                         Ctrl+Q   Quit";

/// Show the About dialog
pub fn show_about_dialog(profile: &Profile, palette: &Palette) {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(460, 340)
        .with_label("About")
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(palette.card_bg);

    let mut flex = Flex::new(10, 10, 440, 320, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(profile.name);
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(palette.heading);
    flex.fixed(&title, 40);

    let mut headline = Frame::default();
    headline.set_label(&format!("{}  \u{00b7}  viewer {}", profile.headline, version));
    headline.set_label_size(14);
    headline.set_label_color(palette.muted);
    flex.fixed(&headline, 25);

    let mut contact = Frame::default();
    contact.set_label(&frame_label(&format!(
        "{}\n{}",
        profile.email.target(),
        profile.phone.target()
    )));
    contact.set_label_size(13);
    contact.set_label_color(palette.body);
    flex.fixed(&contact, 45);

    let mut keys = Frame::default();
    keys.set_label(SHORTCUTS);
    keys.set_label_size(12);
    keys.set_label_color(palette.muted);
    keys.set_align(Align::Center | Align::Inside);
    flex.fixed(&keys, 110);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
