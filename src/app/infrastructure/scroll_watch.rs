use fltk::{
    app::{self, Sender, TimeoutHandle},
    group::Scroll,
};

use crate::app::domain::messages::Message;

/// Sampling period for the scroll offset (seconds).
const POLL_INTERVAL: f64 = 1.0 / 30.0;

/// Scroll listener for the page container.
///
/// FLTK has no scroll event, so the offset is sampled on a repeating
/// timeout and `Message::Scrolled` is sent whenever it changes. The
/// timeout lives exactly as long as this value.
pub struct ScrollWatch {
    handle: TimeoutHandle,
}

impl ScrollWatch {
    pub fn start(scroll: &Scroll, sender: Sender<Message>) -> Self {
        let scroll = scroll.clone();
        let mut last = scroll.yposition();
        let handle = app::add_timeout3(POLL_INTERVAL, move |handle| {
            let offset = scroll.yposition();
            if offset != last {
                last = offset;
                sender.send(Message::Scrolled(offset));
            }
            app::repeat_timeout3(POLL_INTERVAL, handle);
        });
        tracing::debug!("scroll listener registered");
        Self { handle }
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        app::remove_timeout3(self.handle);
        tracing::debug!("scroll listener removed");
    }
}
