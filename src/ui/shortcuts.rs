use fltk::enums::Key;

use crate::app::domain::messages::Message;
use crate::app::domain::section::SectionId;

const SECTION_KEYS: [char; 4] = ['1', '2', '3', '4'];

/// Map a key press to a message. `ctrl` is Ctrl (or Cmd on macOS).
pub fn shortcut_message(key: Key, ctrl: bool) -> Option<Message> {
    if key == Key::F1 {
        return Some(Message::ShowAbout);
    }
    if !ctrl {
        return None;
    }
    for (digit, section) in SECTION_KEYS.into_iter().zip(SectionId::ALL) {
        if key == Key::from_char(digit) {
            return Some(Message::NavigateTo(section));
        }
    }
    if key == Key::from_char('d') {
        Some(Message::ToggleDarkMode)
    } else if key == Key::from_char('q') {
        Some(Message::Quit)
    } else {
        None
    }
}
