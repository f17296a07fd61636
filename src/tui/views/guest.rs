//! Guest experience personalization: guest id in, profile and
//! recommendations out.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{button_line, header_row, key_press, render_controls, render_header, render_list, render_prompt};
use crate::core::i18n::Translations;
use crate::core::scenario::GuestBundle;
use crate::tui::events::View;
use crate::tui::layout::ViewLayout;
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::charts;
use crate::tui::widgets::text_field::TextField;

const INFO: &str =
    "This feature personalizes the guest experience based on their profile and preferences.";

pub struct GuestViewState {
    guest_id: TextField,
    editing: bool,
    bundle: Option<GuestBundle>,
}

impl GuestViewState {
    pub fn new() -> Self {
        Self {
            guest_id: TextField::new(),
            editing: false,
            bundle: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn bundle(&self) -> Option<&GuestBundle> {
        self.bundle.as_ref()
    }

    pub fn guest_id(&self) -> &str {
        self.guest_id.value()
    }

    /// The action is live only once a non-blank guest id was entered.
    pub fn can_generate(&self) -> bool {
        self.guest_id.submitted().is_some()
    }

    /// Run the personalization. No-op (returns `false`) without a guest id.
    pub fn generate(&mut self, services: &Services) -> bool {
        let Some(guest_id) = self.guest_id.submitted() else {
            log::debug!("Guest personalization skipped: no guest id");
            return false;
        };
        let bundle = services.scenarios.personalize_guest_experience(guest_id);
        log::info!(
            "Generated guest bundle for {:?}: {} amenities, {} dining rows",
            bundle.profile.id,
            bundle.amenities.len(),
            bundle.dining.len()
        );
        self.bundle = Some(bundle);
        true
    }

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };

        if self.editing {
            match key.code {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter => {
                    self.editing = false;
                    self.generate(services);
                }
                _ => {
                    let before = self.guest_id.value().to_string();
                    self.guest_id.handle_key(key);
                    // Results belong to the id they were generated for
                    if self.guest_id.value() != before {
                        self.bundle = None;
                    }
                }
            }
            return true;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('i')) => {
                self.editing = true;
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('g')) => {
                self.generate(services);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, t: &Translations) {
        let layout = ViewLayout::compute(area, 4, self.bundle.as_ref().map(|_| 8));

        render_header(frame, layout.header, t, View::GuestExperience, INFO);

        let inner = render_controls(frame, layout.controls, self.editing);
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        self.guest_id
            .render(frame, rows[0], t.guest_id, "press i to type", self.editing);
        frame.render_widget(
            Paragraph::new(button_line(t.generate, self.can_generate())),
            rows[1],
        );

        let Some(bundle) = &self.bundle else {
            let below = Rect {
                y: layout.controls.bottom(),
                height: area.bottom().saturating_sub(layout.controls.bottom()),
                ..area
            };
            let text = if self.can_generate() {
                "Press Enter to generate recommendations for this guest."
            } else {
                "Enter a guest ID to see personalized recommendations."
            };
            render_prompt(frame, below, text);
            return;
        };

        if let Some(left) = layout.left {
            self.render_profile(frame, left, bundle);
        }
        if let Some(right) = layout.right {
            self.render_preferences(frame, right, bundle);
        }
        if let Some(bottom) = layout.bottom {
            render_list(
                frame,
                bottom,
                "Suggested Activities",
                &bundle.activities,
                theme::ACCENT,
            );
        }
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect, bundle: &GuestBundle) {
        let parts = Layout::vertical([Constraint::Min(11), Constraint::Length(5)]).split(area);

        let json = serde_json::to_string_pretty(&bundle.profile)
            .unwrap_or_else(|e| format!("<profile unavailable: {e}>"));
        let lines: Vec<Line> = json
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme::TEXT))))
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(theme::block_default("Guest Profile")),
            parts[0],
        );

        let amenities: Vec<Line> = bundle
            .amenities
            .iter()
            .map(|a| {
                Line::from(vec![
                    Span::styled(format!(" {:<18}", a.name), Style::default().fg(theme::TEXT)),
                    Span::styled(format!("{:.2}  ", a.interest_score), theme::highlight()),
                    Span::styled(a.reason, theme::muted()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(amenities).block(theme::block_default("Recommended Amenities")),
            parts[1],
        );
    }

    fn render_preferences(&self, frame: &mut Frame, area: Rect, bundle: &GuestBundle) {
        let parts = Layout::vertical([Constraint::Min(8), Constraint::Length(7)]).split(area);

        let features: Vec<(String, f64)> = bundle
            .room_features
            .iter()
            .map(|f| (f.feature.to_string(), f.importance))
            .collect();
        frame.render_widget(
            charts::bar_chart(
                theme::block_default("Room Preferences"),
                &features,
                theme::PRIMARY,
                2,
                8,
            ),
            parts[0],
        );

        let rows = bundle.dining.iter().map(|d| {
            Row::new(vec![
                Cell::from(d.restaurant),
                Cell::from(d.cuisine),
                Cell::from(format!("{:.2}", d.score)).style(theme::highlight()),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Percentage(30),
                Constraint::Percentage(20),
            ],
        )
        .header(header_row(&["Restaurant", "Cuisine", "Score"]))
        .block(theme::block_default("Personalized Dining Recommendations"));
        frame.render_widget(table, parts[1]);
    }
}

impl Default for GuestViewState {
    fn default() -> Self {
        Self::new()
    }
}
