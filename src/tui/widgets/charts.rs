//! Chart builders shared by the dashboard views.
//!
//! Thin wrappers over ratatui's `BarChart` and `Chart` plus span-drawn
//! share bars and metric tiles, all styled from the theme.

use chrono::NaiveDate;
use ratatui::{
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
};

use crate::tui::theme;

/// One plotted series. Points are borrowed so the caller owns the data for
/// the duration of the frame.
pub struct Series<'a> {
    pub name: String,
    pub color: Color,
    pub points: &'a [(f64, f64)],
}

/// Axis title, bounds and tick labels.
pub struct AxisSpec<'a> {
    pub title: &'a str,
    pub bounds: [f64; 2],
    pub labels: Vec<String>,
}

impl<'a> AxisSpec<'a> {
    /// Axis over `[lo, hi]` with labels at both ends and the midpoint.
    pub fn numeric(title: &'a str, [lo, hi]: [f64; 2], decimals: usize) -> Self {
        let mid = (lo + hi) / 2.0;
        Self {
            title,
            bounds: [lo, hi],
            labels: [lo, mid, hi]
                .iter()
                .map(|v| format!("{v:.decimals$}"))
                .collect(),
        }
    }

    /// Day-index axis over a date window, labeled first/middle/last as `MM-DD`.
    pub fn dates(title: &'a str, dates: &[NaiveDate]) -> Self {
        let last = dates.len().saturating_sub(1);
        let labels = [0, last / 2, last]
            .iter()
            .filter_map(|&i| dates.get(i))
            .map(|d| d.format("%m-%d").to_string())
            .collect();
        Self {
            title,
            bounds: [0.0, last as f64],
            labels,
        }
    }

    fn into_axis(self) -> Axis<'a> {
        Axis::default()
            .title(Span::styled(self.title, theme::muted()))
            .style(theme::muted())
            .bounds(self.bounds)
            .labels(self.labels)
    }
}

/// Bordered block whose title is followed by a colored legend.
pub fn legend_block<'a>(title: &'a str, entries: &[(&'a str, Color)]) -> Block<'a> {
    let mut spans = vec![Span::styled(format!(" {title} "), theme::heading())];
    for (name, color) in entries {
        spans.push(Span::styled("■ ", Style::default().fg(*color)));
        spans.push(Span::styled(format!("{name} "), theme::muted()));
    }
    Block::default()
        .title(Line::from(spans))
        .borders(Borders::ALL)
        .border_style(theme::border_default())
}

/// Line or scatter chart over one or more series.
pub fn xy_chart<'a>(
    block: Block<'a>,
    series: &[Series<'a>],
    graph_type: GraphType,
    x: AxisSpec<'a>,
    y: AxisSpec<'a>,
) -> Chart<'a> {
    let marker = match graph_type {
        GraphType::Scatter => symbols::Marker::Dot,
        _ => symbols::Marker::Braille,
    };
    let datasets = series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name.clone())
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(s.color))
                .data(s.points)
        })
        .collect();

    Chart::new(datasets)
        .block(block)
        .x_axis(x.into_axis())
        .y_axis(y.into_axis())
}

/// Vertical bar chart, one bar per `(label, value)`. Values are drawn with
/// `decimals` places; bar heights keep two decimals of precision.
pub fn bar_chart<'a>(
    block: Block<'a>,
    values: &[(String, f64)],
    color: Color,
    decimals: usize,
    bar_width: u16,
) -> BarChart<'a> {
    let bars: Vec<Bar> = values
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(scaled(*value))
                .label(Line::from(label.clone()))
                .text_value(format!("{value:.decimals$}"))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::BG_BASE).bg(color))
        })
        .collect();

    BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
}

/// Grouped bars: one group per `(group label, values)`, bar `i` of every
/// group colored with series color `i`.
pub fn grouped_bar_chart<'a>(
    block: Block<'a>,
    groups: &[(String, Vec<f64>)],
    bar_width: u16,
) -> BarChart<'a> {
    let mut chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2);

    for (label, values) in groups {
        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                Bar::default()
                    .value(scaled(*value))
                    .text_value(format!("{value:.0}"))
                    .style(Style::default().fg(theme::series(i)))
                    .value_style(Style::default().fg(theme::BG_BASE).bg(theme::series(i)))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }

    chart
}

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * 100.0).round() as u64
}

/// Horizontal share bars: label, bar proportional to the total, percentage.
pub fn share_lines(items: &[(&str, u32, Color)], bar_width: usize) -> Vec<Line<'static>> {
    let total: u32 = items.iter().map(|(_, count, _)| count).sum();
    let label_width = items
        .iter()
        .map(|(label, _, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    items
        .iter()
        .map(|(label, count, color)| {
            let share = if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            };
            let filled = ((share * bar_width as f64).round() as usize).min(bar_width);
            Line::from(vec![
                Span::styled(format!("{label:<label_width$} "), Style::default().fg(theme::TEXT)),
                Span::styled("█".repeat(filled), Style::default().fg(*color)),
                Span::styled("░".repeat(bar_width - filled), theme::dim()),
                Span::styled(format!(" {:>5.1}% ({count})", share * 100.0), theme::muted()),
            ])
        })
        .collect()
}

/// Metric tile: muted label above a bold value.
pub fn metric_lines(label: &str, value: String) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(label.to_string(), theme::muted())),
        Line::from(Span::styled(value, theme::title())),
    ]
}

/// `[min, max]` of the values widened by `pad` on both sides.
pub fn padded_bounds(values: impl IntoIterator<Item = f64>, pad: f64) -> [f64; 2] {
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return [0.0, 1.0];
    }
    [lo - pad, hi + pad]
}

/// Thousands-separated currency, e.g. `$1,234,567.89`.
pub fn currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
