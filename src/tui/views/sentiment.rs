//! Sentiment analysis of guest feedback.
//!
//! A CSV path is attached (metadata check only) before the analysis can
//! run. The analysis does not read the file.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, GraphType, Paragraph, Row, Table},
    Frame,
};

use super::{button_line, header_row, key_press, render_controls, render_header, render_list, render_prompt};
use crate::core::error::UploadError;
use crate::core::i18n::Translations;
use crate::core::scenario::vocabulary::{window_dates, SENTIMENT_SCORE};
use crate::core::scenario::{FeedbackBundle, FeedbackUpload};
use crate::tui::events::{NotificationLevel, View};
use crate::tui::layout::{stack, ViewLayout};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::charts::{self, AxisSpec, Series};
use crate::tui::widgets::text_field::TextField;
use crate::tui::widgets::topic_tree::TopicTree;

const INFO: &str =
    "This feature analyzes guest feedback to identify trends and areas for improvement.";
const UPLOAD_LABEL: &str = "Upload guest feedback data (CSV)";

pub struct SentimentViewState {
    path: TextField,
    editing: bool,
    upload: Option<FeedbackUpload>,
    attach_error: Option<UploadError>,
    bundle: Option<FeedbackBundle>,
    /// Attach outcome waiting to be shown as a notification.
    notice: Option<(NotificationLevel, String)>,
}

impl SentimentViewState {
    pub fn new() -> Self {
        Self {
            path: TextField::new(),
            editing: false,
            upload: None,
            attach_error: None,
            bundle: None,
            notice: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn upload(&self) -> Option<&FeedbackUpload> {
        self.upload.as_ref()
    }

    pub fn attach_error(&self) -> Option<&UploadError> {
        self.attach_error.as_ref()
    }

    pub fn bundle(&self) -> Option<&FeedbackBundle> {
        self.bundle.as_ref()
    }

    pub fn can_analyze(&self) -> bool {
        self.upload.is_some()
    }

    /// Attach the typed path. A rejected path leaves nothing attached.
    /// Results from an earlier file are dropped either way.
    pub fn attach(&mut self) {
        self.bundle = None;
        match FeedbackUpload::attach(self.path.value().trim()) {
            Ok(upload) => {
                log::info!(
                    "Attached feedback file {} ({} bytes)",
                    upload.path().display(),
                    upload.size_bytes()
                );
                self.notice = Some((
                    NotificationLevel::Success,
                    format!("Attached {}", upload.file_name()),
                ));
                self.upload = Some(upload);
                self.attach_error = None;
            }
            Err(e) => {
                log::warn!("Feedback attach rejected: {e}");
                self.notice = Some((NotificationLevel::Warning, e.to_string()));
                self.upload = None;
                self.attach_error = Some(e);
            }
        }
    }

    pub fn detach(&mut self) {
        self.upload = None;
        self.attach_error = None;
        self.bundle = None;
        self.path.clear();
    }

    /// Take the pending attach outcome, if any.
    pub fn take_notice(&mut self) -> Option<(NotificationLevel, String)> {
        self.notice.take()
    }

    /// Run the analysis. No-op (returns `false`) while nothing is attached.
    pub fn analyze(&mut self, services: &Services) -> bool {
        let Some(upload) = &self.upload else {
            log::debug!("Feedback analysis skipped: no file attached");
            return false;
        };
        let bundle = services.scenarios.analyze_guest_feedback(upload);
        log::info!(
            "Generated feedback bundle: {} responses, {} topics",
            bundle.total_responses(),
            bundle.topics.len()
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
                    self.attach();
                }
                _ => {
                    self.path.handle_key(key);
                }
            }
            return true;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('i')) => {
                self.editing = true;
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('d')) => {
                self.detach();
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('g')) => {
                self.analyze(services);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, t: &Translations) {
        let layout = ViewLayout::compute(area, 6, self.bundle.as_ref().map(|_| 7));

        render_header(frame, layout.header, t, View::SentimentAnalysis, INFO);

        let inner = render_controls(frame, layout.controls, self.editing);
        let rows = Layout::vertical([Constraint::Length(1); 4]).split(inner);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(UPLOAD_LABEL, theme::muted()))),
            rows[0],
        );
        self.path
            .render(frame, rows[1], "Path:", "press i to type a .csv path", self.editing);
        frame.render_widget(Paragraph::new(self.status_line()), rows[2]);
        frame.render_widget(
            Paragraph::new(button_line(t.analyze_feedback, self.can_analyze())),
            rows[3],
        );

        let Some(bundle) = &self.bundle else {
            let below = Rect {
                y: layout.controls.bottom(),
                height: area.bottom().saturating_sub(layout.controls.bottom()),
                ..area
            };
            let text = if self.can_analyze() {
                "Press Enter to analyze the attached feedback."
            } else {
                "Attach a CSV file of guest feedback to begin."
            };
            render_prompt(frame, below, text);
            return;
        };

        if let Some(left) = layout.left {
            let parts =
                Layout::vertical([Constraint::Length(5), Constraint::Min(6)]).split(left);
            render_distribution(frame, parts[0], bundle);
            let block = theme::block_default("Key Topics in Guest Feedback");
            let tree_area = block.inner(parts[1]);
            frame.render_widget(block, parts[1]);
            frame.render_widget(TopicTree::new(&bundle.topics), tree_area);
        }
        if let Some(right) = layout.right {
            let parts = Layout::vertical([Constraint::Min(8), Constraint::Length(10)]).split(right);
            render_trend(frame, parts[0], bundle);
            let lists = stack(parts[1], 2);
            render_list(
                frame,
                lists[0],
                "Most Appreciated Aspects",
                &bundle.positive_aspects,
                theme::SUCCESS,
            );
            render_list(
                frame,
                lists[1],
                "Areas for Improvement",
                &bundle.improvement_areas,
                theme::WARNING,
            );
        }
        if let Some(bottom) = layout.bottom {
            render_recommendations(frame, bottom, bundle);
        }
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(err) = &self.attach_error {
            return Line::from(Span::styled(
                format!("✗ {err}"),
                Style::default().fg(theme::ERROR),
            ));
        }
        match &self.upload {
            Some(upload) => Line::from(vec![
                Span::styled("✓ ", Style::default().fg(theme::SUCCESS)),
                Span::styled(upload.file_name(), Style::default().fg(theme::TEXT)),
                Span::styled(
                    format!("  {} bytes  [d]:detach", upload.size_bytes()),
                    theme::muted(),
                ),
            ]),
            None => Line::from(Span::styled("No file attached", theme::dim())),
        }
    }
}

impl Default for SentimentViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn render_distribution(frame: &mut Frame, area: Rect, bundle: &FeedbackBundle) {
    let items: Vec<(&str, u32, ratatui::style::Color)> = bundle
        .sentiment
        .iter()
        .map(|s| (s.sentiment.label(), s.count, theme::sentiment(s.sentiment)))
        .collect();
    let bar_width = (area.width as usize).saturating_sub(30).max(5);
    frame.render_widget(
        Paragraph::new(charts::share_lines(&items, bar_width))
            .block(theme::block_default("Overall Sentiment Distribution")),
        area,
    );
}

fn render_trend(frame: &mut Frame, area: Rect, bundle: &FeedbackBundle) {
    let points: Vec<(f64, f64)> = bundle
        .trend
        .iter()
        .enumerate()
        .map(|(day, p)| (day as f64, p.score))
        .collect();
    let series = [Series {
        name: "Sentiment".to_string(),
        color: theme::SUCCESS,
        points: &points,
    }];
    let dates = window_dates();
    frame.render_widget(
        charts::xy_chart(
            theme::block_default("Sentiment Trend Over Time"),
            &series,
            GraphType::Line,
            AxisSpec::dates("Date", &dates),
            AxisSpec::numeric("Score", [*SENTIMENT_SCORE.start(), *SENTIMENT_SCORE.end()], 2),
        ),
        area,
    );
}

fn render_recommendations(frame: &mut Frame, area: Rect, bundle: &FeedbackBundle) {
    let rows = bundle.recommendations.iter().map(|r| {
        Row::new(vec![
            Cell::from(r.category.label()).style(theme::highlight()),
            Cell::from(r.suggestion),
            Cell::from(r.expected_impact),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(15),
            Constraint::Percentage(45),
            Constraint::Percentage(40),
        ],
    )
    .header(header_row(&["Category", "Suggestion", "Expected Impact"]))
    .block(theme::block_default("AI-Generated Recommendations"));
    frame.render_widget(table, area);
}
