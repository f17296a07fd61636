//! Revenue management: pricing, demand, competitors and upsells.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Cell, GraphType, Paragraph, Row, Table},
    Frame,
};

use super::{button_line, header_row, key_press, render_controls, render_header, render_prompt};
use crate::core::i18n::Translations;
use crate::core::scenario::vocabulary::{window_dates, NIGHTLY_PRICE, OCCUPANCY};
use crate::core::scenario::{RevenueBundle, RoomType};
use crate::tui::events::View;
use crate::tui::layout::{stack, ViewLayout};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::charts::{self, AxisSpec, Series};

const INFO: &str =
    "This feature optimizes pricing strategies and identifies revenue opportunities.";

pub struct RevenueViewState {
    bundle: Option<RevenueBundle>,
}

impl RevenueViewState {
    pub fn new() -> Self {
        Self { bundle: None }
    }

    pub fn reset(&mut self) {
        self.bundle = None;
    }

    pub fn bundle(&self) -> Option<&RevenueBundle> {
        self.bundle.as_ref()
    }

    pub fn optimize(&mut self, services: &Services) {
        let bundle = services.scenarios.optimize_revenue_management();
        log::info!(
            "Generated revenue bundle: {} pricing rows, {} occupancy rows",
            bundle.pricing.len(),
            bundle.occupancy.len()
        );
        self.bundle = Some(bundle);
    }

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('g')) => {
                self.optimize(services);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, t: &Translations) {
        let layout = ViewLayout::compute(area, 3, self.bundle.as_ref().map(|_| 7));

        render_header(frame, layout.header, t, View::RevenueManagement, INFO);

        let inner = render_controls(frame, layout.controls, false);
        frame.render_widget(Paragraph::new(button_line(t.optimize, true)), inner);

        let Some(bundle) = &self.bundle else {
            let below = Rect {
                y: layout.controls.bottom(),
                height: area.bottom().saturating_sub(layout.controls.bottom()),
                ..area
            };
            render_prompt(frame, below, "Press Enter to run the pricing optimization.");
            return;
        };

        if let Some(left) = layout.left {
            let parts = Layout::vertical([Constraint::Min(8), Constraint::Length(6)]).split(left);
            render_pricing(frame, parts[0], bundle);
            render_projections(frame, parts[1], bundle);
        }
        if let Some(right) = layout.right {
            let parts = stack(right, 2);
            render_demand(frame, parts[0], bundle);
            render_competitors(frame, parts[1], bundle);
        }
        if let Some(bottom) = layout.bottom {
            render_upsells(frame, bottom, bundle);
        }
    }
}

impl Default for RevenueViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn render_pricing(frame: &mut Frame, area: Rect, bundle: &RevenueBundle) {
    let points: Vec<Vec<(f64, f64)>> = RoomType::ALL
        .iter()
        .map(|&room| {
            bundle
                .prices_for(room)
                .enumerate()
                .map(|(day, row)| (day as f64, row.price))
                .collect()
        })
        .collect();
    let series: Vec<Series> = RoomType::ALL
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (room, pts))| Series {
            name: room.label().to_string(),
            color: theme::series(i),
            points: pts,
        })
        .collect();

    let dates = window_dates();
    let chart = charts::xy_chart(
        theme::block_default("Dynamic Pricing Recommendations"),
        &series,
        GraphType::Line,
        AxisSpec::dates("Date", &dates),
        AxisSpec::numeric(
            "Price",
            [*NIGHTLY_PRICE.start(), *NIGHTLY_PRICE.end()],
            0,
        ),
    );
    frame.render_widget(chart, area);
}

fn render_projections(frame: &mut Frame, area: Rect, bundle: &RevenueBundle) {
    let block = theme::block_default("Revenue Projections");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(charts::metric_lines(
            "Projected Monthly Revenue",
            charts::currency(bundle.projected_revenue),
        )),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(charts::metric_lines(
            "Revenue Increase",
            format!("{:.2}%", bundle.revenue_increase_pct),
        )),
        cols[1],
    );
}

/// One thin column per day; the window is too long for per-bar labels.
fn render_demand(frame: &mut Frame, area: Rect, bundle: &RevenueBundle) {
    let bars: Vec<Bar> = bundle
        .occupancy
        .iter()
        .map(|o| {
            Bar::default()
                .value((o.occupancy * 100.0).round() as u64)
                .text_value(String::new())
                .style(Style::default().fg(theme::PRIMARY))
        })
        .collect();

    let first = bundle.occupancy.first().map(|o| o.date.format("%m-%d").to_string());
    let last = bundle.occupancy.last().map(|o| o.date.format("%m-%d").to_string());
    let title = match (first, last) {
        (Some(first), Some(last)) => format!(
            "Demand Forecast  {first}..{last}  occupancy {:.0}%..{:.0}%",
            OCCUPANCY.start() * 100.0,
            OCCUPANCY.end() * 100.0
        ),
        _ => "Demand Forecast".to_string(),
    };

    let chart = BarChart::default()
        .block(theme::block_default(&title))
        .bar_width(1)
        .bar_gap(0)
        .max(100)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_competitors(frame: &mut Frame, area: Rect, bundle: &RevenueBundle) {
    let groups: Vec<(String, Vec<f64>)> = RoomType::ALL
        .iter()
        .enumerate()
        .map(|(room_idx, room)| {
            (
                room.label().to_string(),
                bundle
                    .competitors
                    .iter()
                    .map(|c| c.prices[room_idx] as f64)
                    .collect(),
            )
        })
        .collect();
    let legend: Vec<(&str, ratatui::style::Color)> = bundle
        .competitors
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name, theme::series(i)))
        .collect();

    frame.render_widget(
        charts::grouped_bar_chart(
            charts::legend_block("Competitive Pricing Analysis", &legend),
            &groups,
            3,
        ),
        area,
    );
}

fn render_upsells(frame: &mut Frame, area: Rect, bundle: &RevenueBundle) {
    let rows = bundle.upsells.iter().map(|u| {
        Row::new(vec![
            Cell::from(u.item),
            Cell::from(u.target_segment),
            Cell::from(charts::currency(u.potential_revenue)).style(theme::highlight()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ],
    )
    .header(header_row(&["Item", "Target Segment", "Potential Revenue"]))
    .block(theme::block_default("Upselling Opportunities"));
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
        Services::with_source(Arc::new(SimulatedScenarios::with_seed(9)))
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_runs_optimization() {
        let services = services();
        let mut state = RevenueViewState::new();
        assert!(state.bundle().is_none());
        assert!(state.handle_input(&press(KeyCode::Enter), &services));
        assert_eq!(state.bundle().unwrap().pricing.len(), 93);
    }

    #[test]
    fn test_unrelated_keys_not_consumed() {
        let services = services();
        let mut state = RevenueViewState::new();
        assert!(!state.handle_input(&press(KeyCode::Char('x')), &services));
        assert!(state.bundle().is_none());
    }

    #[test]
    fn test_render_sections() {
        let services = services();
        let mut state = RevenueViewState::new();
        let t = Language::English.strings();

        let before = render_text(140, 50, |f| {
            let area = f.area();
            state.render(f, area, t)
        });
        assert!(before.contains("Optimize Pricing Strategy"));
        assert!(!before.contains("Upselling Opportunities"));

        state.optimize(&services);
        let after = render_text(140, 50, |f| {
            let area = f.area();
            state.render(f, area, t)
        });
        for section in [
            "Dynamic Pricing Recommendations",
            "Revenue Projections",
            "Projected Monthly Revenue",
            "Demand Forecast",
            "Competitive Pricing Analysis",
            "Upselling Opportunities",
            "Room Upgrade",
            "$5,000.00",
        ] {
            assert!(after.contains(section), "missing {section}");
        }
    }
}
