//! telemachus-dash: A terminal instrument panel for live flight-simulation telemetry
//!
//! This library ties the workspace crates together:
//! - Configuration loading and saving
//! - The poll loop that fetches a snapshot, renders the panel and redraws
//! - Screen abstractions for the terminal and for tests

pub mod config;
pub mod core;

// Re-export commonly used types
pub use crate::config::AppConfig;
pub use crate::core::{Dashboard, MemoryScreen, PollState, Screen, TerminalScreen};
