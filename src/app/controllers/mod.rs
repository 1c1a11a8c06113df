//! Controllers - orchestration of navigation state and scroll motion.

pub mod navigation;
pub mod scroll_animation;

pub use navigation::{NavigationController, SectionScroller};
pub use scroll_animation::{ScrollAnimation, bounce_offset};
