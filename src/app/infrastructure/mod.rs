//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK scroll sampling
//! - OS link handlers and theme detection
//! - Logging setup and error types

pub mod error;
pub mod links;
pub mod logging;
pub mod platform;
pub mod scroll_watch;
