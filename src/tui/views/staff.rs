//! Staff performance: efficiency, scheduling, correlation, training.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Cell, GraphType, Paragraph, Row, Table},
    Frame,
};

use super::{button_line, header_row, key_press, render_controls, render_header, render_list, render_prompt};
use crate::core::i18n::Translations;
use crate::core::scenario::vocabulary::{GUEST_SATISFACTION, STAFF_PERFORMANCE};
use crate::core::scenario::StaffBundle;
use crate::tui::events::View;
use crate::tui::layout::{stack, ViewLayout};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::charts::{self, AxisSpec, Series};

const INFO: &str = "This feature analyzes staff performance and provides optimization suggestions.";

pub struct StaffViewState {
    bundle: Option<StaffBundle>,
}

impl StaffViewState {
    pub fn new() -> Self {
        Self { bundle: None }
    }

    pub fn reset(&mut self) {
        self.bundle = None;
    }

    pub fn bundle(&self) -> Option<&StaffBundle> {
        self.bundle.as_ref()
    }

    pub fn analyze(&mut self, services: &Services) {
        let bundle = services.scenarios.analyze_staff_performance();
        log::info!(
            "Generated staff bundle: efficiency {:.2}, {} correlation points",
            bundle.overall_efficiency,
            bundle.correlation.len()
        );
        self.bundle = Some(bundle);
    }

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('g')) => {
                self.analyze(services);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, t: &Translations) {
        let layout = ViewLayout::compute(area, 3, self.bundle.as_ref().map(|_| 9));

        render_header(frame, layout.header, t, View::StaffPerformance, INFO);

        let inner = render_controls(frame, layout.controls, false);
        frame.render_widget(Paragraph::new(button_line(t.analyze_staff, true)), inner);

        let Some(bundle) = &self.bundle else {
            let below = Rect {
                y: layout.controls.bottom(),
                height: area.bottom().saturating_sub(layout.controls.bottom()),
                ..area
            };
            render_prompt(frame, below, "Press Enter to analyze staff performance.");
            return;
        };

        if let Some(left) = layout.left {
            let parts = Layout::vertical([Constraint::Length(4), Constraint::Min(6)]).split(left);
            frame.render_widget(
                Paragraph::new(charts::metric_lines(
                    "Efficiency Score",
                    format!("{:.2}/10", bundle.overall_efficiency),
                ))
                .block(theme::block_default("Overall Staff Efficiency")),
                parts[0],
            );
            let departments: Vec<(String, f64)> = bundle
                .departments
                .iter()
                .map(|d| (d.department.label().to_string(), d.efficiency_score))
                .collect();
            frame.render_widget(
                charts::bar_chart(
                    theme::block_default("Department Performance Comparison"),
                    &departments,
                    theme::PRIMARY,
                    2,
                    11,
                ),
                parts[1],
            );
        }
        if let Some(right) = layout.right {
            let parts = stack(right, 2);
            render_allocation(frame, parts[0], bundle);
            render_correlation(frame, parts[1], bundle);
        }
        if let Some(bottom) = layout.bottom {
            let cols = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(bottom);
            render_training(frame, cols[0], bundle);
            render_list(
                frame,
                cols[1],
                "Productivity Improvement Suggestions",
                &bundle.suggestions,
                theme::ACCENT,
            );
        }
    }
}

impl Default for StaffViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn render_allocation(frame: &mut Frame, area: Rect, bundle: &StaffBundle) {
    let groups: Vec<(String, Vec<f64>)> = bundle
        .allocation
        .iter()
        .map(|a| {
            (
                a.department.label().to_string(),
                vec![a.current as f64, a.optimized as f64],
            )
        })
        .collect();
    frame.render_widget(
        charts::grouped_bar_chart(
            charts::legend_block(
                "Optimized Staff Scheduling",
                &[("Current", theme::series(0)), ("Optimized", theme::series(1))],
            ),
            &groups,
            4,
        ),
        area,
    );
}

fn render_correlation(frame: &mut Frame, area: Rect, bundle: &StaffBundle) {
    let points: Vec<(f64, f64)> = bundle
        .correlation
        .iter()
        .map(|p| (p.staff_performance, p.guest_satisfaction))
        .collect();
    let series = [Series {
        name: "Observations".to_string(),
        color: theme::ACCENT,
        points: &points,
    }];
    frame.render_widget(
        charts::xy_chart(
            theme::block_default("Correlation: Staff Performance vs Guest Satisfaction"),
            &series,
            GraphType::Scatter,
            AxisSpec::numeric(
                "Staff Performance",
                [*STAFF_PERFORMANCE.start(), *STAFF_PERFORMANCE.end()],
                1,
            ),
            AxisSpec::numeric(
                "Guest Satisfaction",
                [*GUEST_SATISFACTION.start(), *GUEST_SATISFACTION.end()],
                1,
            ),
        ),
        area,
    );
}

fn render_training(frame: &mut Frame, area: Rect, bundle: &StaffBundle) {
    let rows = bundle.training.iter().map(|r| {
        Row::new(vec![
            Cell::from(r.employee.clone()),
            Cell::from(r.department.label()),
            Cell::from(r.training),
            Cell::from(r.priority.label()).style(Style::default().fg(theme::priority(r.priority))),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(13),
            Constraint::Min(20),
            Constraint::Length(8),
        ],
    )
    .header(header_row(&["Employee", "Department", "Training", "Priority"]))
    .block(theme::block_default("Personalized Training Recommendations"));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEvent;

    use super::*;
    use crate::core::i18n::Language;
    use crate::core::scenario::SimulatedScenarios;
    use crate::tui::views::test_support::render_text;

    fn services() -> Services {
        Services::with_source(Arc::new(SimulatedScenarios::with_seed(33)))
    }

    #[test]
    fn test_g_runs_analysis() {
        let services = services();
        let mut state = StaffViewState::new();
        let g = Event::Key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE));
        assert!(state.handle_input(&g, &services));
        let bundle = state.bundle().unwrap();
        assert_eq!(bundle.departments.len(), 5);
        assert_eq!(bundle.training.len(), 5);
    }

    #[test]
    fn test_reset_clears_bundle() {
        let services = services();
        let mut state = StaffViewState::new();
        state.analyze(&services);
        state.reset();
        assert!(state.bundle().is_none());
    }

    #[test]
    fn test_render_sections() {
        let services = services();
        let mut state = StaffViewState::new();
        state.analyze(&services);

        let t = Language::English.strings();
        let screen = render_text(150, 60, |f| {
            let area = f.area();
            state.render(f, area, t)
        });
        for section in [
            "Overall Staff Efficiency",
            "/10",
            "Department Performance Comparison",
            "Optimized Staff Scheduling",
            "Correlation: Staff Performance vs Guest Satisfaction",
            "Personalized Training Recommendations",
            "Employee 1",
            "Productivity Improvement Suggestions",
        ] {
            assert!(screen.contains(section), "missing {section}");
        }
    }
}
