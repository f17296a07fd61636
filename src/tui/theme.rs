//! Centralized Navy & Brass color theme for the dashboard.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::scenario::{Priority, Sentiment};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Steel blue, primary accent, active items, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x46, 0x82, 0xB4);
/// Light steel, highlights, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x87, 0xAE, 0xD8);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Brass, calls to action, selected items.
pub const ACCENT: Color = Color::Rgb(0xD4, 0xA5, 0x37);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Navy, base background.
pub const BG_BASE: Color = Color::Rgb(0x0B, 0x14, 0x26);
/// Surface, elevated panels, sidebar.
pub const BG_SURFACE: Color = Color::Rgb(0x14, 0x21, 0x3D);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE6, 0xE6, 0xE6);
pub const TEXT_MUTED: Color = Color::Rgb(0x8A, 0x8F, 0x99);
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x55, 0x60);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Chart series ────────────────────────────────────────────────────────────

/// Series colors, cycled by index (room types, competitors, departments).
pub const SERIES: [Color; 5] = [
    Color::Rgb(0x42, 0xA5, 0xF5),
    Color::Rgb(0xD4, 0xA5, 0x37),
    Color::Rgb(0x66, 0xBB, 0x6A),
    Color::Rgb(0xAB, 0x47, 0xBC),
    Color::Rgb(0xFF, 0x70, 0x43),
];

pub fn series(index: usize) -> Color {
    SERIES[index % SERIES.len()]
}

pub fn sentiment(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => SUCCESS,
        Sentiment::Neutral => TEXT_MUTED,
        Sentiment::Negative => ERROR,
    }
}

pub fn priority(priority: Priority) -> Color {
    match priority {
        Priority::High => ERROR,
        Priority::Medium => WARNING,
        Priority::Low => SUCCESS,
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Bold brass text (titles, metrics).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Insert mode badge.
pub fn insert_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Action button. Disabled buttons render dim and ignore activation.
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(BG_BASE)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM).add_modifier(Modifier::CROSSED_OUT)
    }
}

/// Info banner text.
pub fn info() -> Style {
    Style::default().fg(INFO)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_cycles() {
        assert_eq!(series(0), series(SERIES.len()));
        assert_ne!(series(0), series(1));
    }

    #[test]
    fn test_sentiment_colors_distinct() {
        assert_ne!(sentiment(Sentiment::Positive), sentiment(Sentiment::Negative));
        assert_ne!(sentiment(Sentiment::Neutral), sentiment(Sentiment::Negative));
    }

    #[test]
    fn test_button_states_differ() {
        assert_ne!(button(true), button(false));
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(title(), Style::default());
        assert_ne!(heading(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(muted(), Style::default());
    }
}
