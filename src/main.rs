use fltk::{app, prelude::*};

use portfolio::app::domain::{AppConfig, Message, PROFILE};
use portfolio::app::infrastructure::logging::init_logging;
use portfolio::app::state::AppState;
use portfolio::ui::main_window::build_main_window;

fn main() {
    let (config, source) = AppConfig::load();
    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("{}", e);
    }
    source.log();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting portfolio viewer");

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&PROFILE, &config, &sender);
    let mut state = AppState::new(widgets, sender, config);
    state.window.show();
    state.start();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if msg == Message::Quit {
                tracing::info!("quit requested");
                break;
            }
            state.handle(msg);
        }
    }
}
