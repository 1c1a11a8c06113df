//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data (sections, navigation flags, static content, page tree)
//! - `controllers/` - Orchestration (navigation, scroll animation)
//! - `infrastructure/` - External integrations (FLTK scroll sampling, links, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{NavigationController, SectionScroller};
pub use domain::{AppConfig, Message, NavigationState, PROFILE, SectionId};
pub use infrastructure::error::{AppError, Result};
