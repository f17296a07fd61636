//! Feedback topic hierarchy widget.
//!
//! Renders category → topic → mentions as a box-drawing tree with a
//! proportional bar per topic, standing in for a treemap in the terminal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::scenario::{FeedbackCategory, FeedbackTopic};
use crate::tui::theme;

/// Widest bar drawn for the most-mentioned topic.
const MAX_BAR: usize = 20;

/// A topic tree rendered with Unicode tree characters.
///
/// ```ignore
/// frame.render_widget(TopicTree::new(&bundle.topics), area);
/// ```
pub struct TopicTree<'a> {
    topics: &'a [FeedbackTopic],
}

impl<'a> TopicTree<'a> {
    pub fn new(topics: &'a [FeedbackTopic]) -> Self {
        Self { topics }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let total: u32 = self.topics.iter().map(|t| t.mentions).sum();
        let max = self.topics.iter().map(|t| t.mentions).max().unwrap_or(0);
        let mut lines = Vec::new();

        if self.topics.is_empty() {
            return lines;
        }

        lines.push(Line::from(vec![
            Span::styled("All feedback".to_string(), theme::heading()),
            Span::styled(format!("  {total}"), theme::muted()),
        ]));

        // Categories in vocabulary order, skipping those without topics
        let categories: Vec<FeedbackCategory> = FeedbackCategory::ALL
            .into_iter()
            .filter(|c| self.topics.iter().any(|t| t.category == *c))
            .collect();

        for (ci, category) in categories.iter().enumerate() {
            let last_category = ci == categories.len() - 1;
            let branch = if last_category { "└── " } else { "├── " };
            let continuation = if last_category { "    " } else { "│   " };

            let children: Vec<&FeedbackTopic> = self
                .topics
                .iter()
                .filter(|t| t.category == *category)
                .collect();
            let subtotal: u32 = children.iter().map(|t| t.mentions).sum();

            lines.push(Line::from(vec![
                Span::raw(branch.to_string()),
                Span::styled(
                    category.label().to_string(),
                    Style::default()
                        .fg(theme::series(ci))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {subtotal}"), theme::muted()),
            ]));

            for (ti, topic) in children.iter().enumerate() {
                let glyph = if ti == children.len() - 1 { "└── " } else { "├── " };
                lines.push(Line::from(vec![
                    Span::raw(format!("{continuation}{glyph}")),
                    Span::styled(format!("{:<20}", topic.topic), Style::default().fg(theme::TEXT)),
                    Span::styled(bar(topic.mentions, max), Style::default().fg(theme::series(ci))),
                    Span::styled(format!(" {}", topic.mentions), theme::muted()),
                ]));
            }
        }

        lines
    }
}

/// Proportional bar, at least one cell for any non-zero count.
fn bar(value: u32, max: u32) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let cells = ((value as usize * MAX_BAR) / max as usize).max(1);
    "█".repeat(cells)
}

impl Widget for TopicTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.build_lines();
        for (i, line) in lines.iter().take(area.height as usize).enumerate() {
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}
