//! The four dashboard views and the pieces they share.
//!
//! Every view follows the same shape: `new`/`reset`, `handle_input`
//! returning whether the event was consumed, and `render` taking the
//! active translation table. A view owns its bundle; the bundle is dropped
//! when the view is left.

pub mod guest;
pub mod revenue;
pub mod sentiment;
pub mod staff;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Wrap},
    Frame,
};

use super::events::View;
use super::theme;
use crate::core::i18n::Translations;

/// Key presses only; releases and repeats are ignored.
pub(crate) fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

/// App title, translated view heading, and the English info banner.
pub(crate) fn render_header(
    frame: &mut Frame,
    area: Rect,
    t: &Translations,
    view: View,
    info: &str,
) {
    let lines = vec![
        Line::from(Span::styled(t.title, theme::title())),
        Line::from(Span::styled(
            view.label(t),
            Style::default()
                .fg(theme::PRIMARY_LIGHT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("ℹ ", theme::info()),
            Span::styled(info.to_string(), theme::info()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Action button line. The hint is only shown when the button is live.
pub(crate) fn button_line(label: &str, enabled: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(format!(" {label} "), theme::button(enabled))];
    if enabled {
        spans.push(Span::styled("  [Enter/g]", theme::key_hint()));
    }
    Line::from(spans)
}

/// Muted one-line prompt shown until the view's action has run.
pub(crate) fn render_prompt(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {text}"), theme::muted()))),
        area,
    );
}

/// Bullet list inside a titled block.
pub(crate) fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[&str],
    bullet_color: ratatui::style::Color,
) {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(bullet_color)),
                Span::styled(item.to_string(), Style::default().fg(theme::TEXT)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(theme::block_default(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Bold primary-colored table header.
pub(crate) fn header_row<'a>(titles: &[&'a str]) -> Row<'a> {
    Row::new(titles.iter().map(|h| Cell::from(*h).style(theme::heading())))
        .height(1)
        .bottom_margin(1)
}

/// Bordered controls block; returns its inner area.
pub(crate) fn render_controls(frame: &mut Frame, area: Rect, focused: bool) -> Rect {
    let block: Block = if focused {
        theme::block_focused("Controls")
    } else {
        theme::block_default("Controls")
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
