use super::content::ContactLink;
use super::section::SectionId;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and timers send one of these; the dispatch loop in main
/// hands them to `AppState::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Navigation
    NavigateTo(SectionId),
    ToggleMobileMenu,
    Scrolled(i32),

    // Window
    Resized(i32, i32),
    ToggleDarkMode,
    ShowAbout,
    Quit,

    // Contact
    OpenLink(ContactLink),
}
