pub mod dialogs;
pub mod main_window;
pub mod nav_bar;
pub mod page_view;
pub mod shortcuts;
pub mod theme;
