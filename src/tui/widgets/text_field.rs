//! Single-line text field for view inputs (guest id, feedback file path).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

/// Editable text with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    content: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an editing key. Returns `false` for keys the field ignores.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.clear(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => self.insert(c),
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.cursor = self.prev_boundary(),
            (_, KeyCode::Right) => self.cursor = self.next_boundary(),
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = self.content.len(),
            _ => return false,
        }
        true
    }

    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let prev = self.prev_boundary();
        self.content.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        let next = self.next_boundary();
        self.content.drain(self.cursor..next);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    /// Trimmed value, `None` when blank.
    pub fn submitted(&self) -> Option<&str> {
        let trimmed = self.content.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.content.len())
    }

    /// Draw `label [value]` on one line. While editing, a block cursor is
    /// shown; an empty field shows the placeholder dimmed.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        placeholder: &str,
        editing: bool,
    ) {
        let mut spans = vec![Span::styled(format!("{label} "), theme::heading())];

        if editing {
            let (before, after) = self.content.split_at(self.cursor);
            spans.push(Span::styled(before.to_string(), theme::highlight()));
            spans.push(Span::styled("▏", theme::highlight()));
            spans.push(Span::styled(after.to_string(), theme::highlight()));
        } else if self.content.is_empty() {
            spans.push(Span::styled(placeholder.to_string(), theme::dim()));
        } else {
            spans.push(Span::raw(self.content.clone()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
