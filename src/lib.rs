//! Hospitality AI - simulated hospitality analytics dashboard (TUI Edition)
//!
//! Core library providing the scenario generator (guest personalization,
//! revenue management, feedback sentiment, staff performance), the static
//! translation tables, and the terminal dashboard that renders them.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
