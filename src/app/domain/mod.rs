//! Domain layer - core data structures and types.
//!
//! - Section ids and navigation state
//! - Static resume content and the page tree derived from it
//! - Layout rules, configuration and the message type

pub mod content;
pub mod layout;
pub mod messages;
pub mod navigation;
pub mod page;
pub mod section;
pub mod settings;

pub use content::{Accent, ContactLink, PROFILE, Profile, SkillCatalog, SkillCategory};
pub use layout::LayoutMode;
pub use messages::Message;
pub use navigation::NavigationState;
pub use page::{Alignment, Block, PageSection, SectionTone, TextStyle, build_page};
pub use section::SectionId;
pub use settings::{AppConfig, ConfigSource, ThemeMode};
