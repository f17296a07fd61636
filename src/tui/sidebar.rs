//! Collapsible left sidebar: language selector above the navigation menu.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::events::{Action, AreaFocus, View};
use super::layout::SidebarVisibility;
use super::theme;
use crate::core::i18n::Language;

/// Title of the navigation group.
pub const MENU_TITLE: &str = "Navigation";

/// One selectable row of the expanded sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Language(Language),
    View(View),
}

impl SidebarItem {
    /// Selectable rows in display order.
    pub const ALL: [SidebarItem; 7] = [
        SidebarItem::Language(Language::English),
        SidebarItem::Language(Language::Greek),
        SidebarItem::Language(Language::Chinese),
        SidebarItem::View(View::GuestExperience),
        SidebarItem::View(View::RevenueManagement),
        SidebarItem::View(View::SentimentAnalysis),
        SidebarItem::View(View::StaffPerformance),
    ];

    /// Action dispatched when the row is activated.
    pub fn action(self) -> Action {
        match self {
            SidebarItem::Language(lang) => Action::SetLanguage(lang),
            SidebarItem::View(view) => Action::SelectView(view),
        }
    }
}

/// Sidebar navigation state.
pub struct SidebarState {
    /// Whether the user has toggled collapse (Ctrl+B).
    pub user_collapsed: bool,
    /// Currently highlighted row (into SidebarItem::ALL).
    pub selected: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            user_collapsed: false,
            selected: Language::ALL.len(),
        }
    }

    pub fn toggle_collapse(&mut self) {
        self.user_collapsed = !self.user_collapsed;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SidebarItem::ALL.len();
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = SidebarItem::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_item(&self) -> SidebarItem {
        SidebarItem::ALL[self.selected % SidebarItem::ALL.len()]
    }

    /// Sync selection to the active view (e.g., after Tab navigation).
    pub fn sync_to_view(&mut self, view: View) {
        if let Some(idx) = SidebarItem::ALL
            .iter()
            .position(|&item| item == SidebarItem::View(view))
        {
            self.selected = idx;
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        visibility: SidebarVisibility,
        language: Language,
        current_view: View,
        area_focus: AreaFocus,
    ) {
        match visibility {
            SidebarVisibility::Hidden => {}
            SidebarVisibility::Collapsed => {
                self.render_collapsed(frame, area, current_view);
            }
            SidebarVisibility::Expanded => {
                self.render_expanded(frame, area, language, current_view, area_focus);
            }
        }
    }

    fn render_collapsed(&self, frame: &mut Frame, area: Rect, current_view: View) {
        let lines: Vec<Line> = View::ALL
            .iter()
            .take(area.height as usize)
            .map(|&view| {
                let style = if view == current_view {
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::TEXT_MUTED)
                };
                Line::from(Span::styled(format!(" {}", view.icon()), style))
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }

    fn render_expanded(
        &self,
        frame: &mut Frame,
        area: Rect,
        language: Language,
        current_view: View,
        area_focus: AreaFocus,
    ) {
        let t = language.strings();
        let sidebar_focused = area_focus == AreaFocus::Sidebar;
        let width = area.width as usize;
        let mut lines: Vec<Line> = Vec::new();

        lines.push(group_header(Language::SELECTOR_LABEL));
        for (idx, item) in SidebarItem::ALL.iter().enumerate() {
            if *item == SidebarItem::View(View::GuestExperience) {
                lines.push(Line::from(""));
                lines.push(group_header(MENU_TITLE));
            }

            let (is_current, text) = match *item {
                SidebarItem::Language(lang) => {
                    let marker = if lang == language { "●" } else { "○" };
                    (lang == language, format!("{marker} {}", lang.native_name()))
                }
                SidebarItem::View(view) => (
                    view == current_view,
                    format!("{} {}", view.icon(), view.label(t)),
                ),
            };
            let is_selected = sidebar_focused && idx == self.selected;

            let (prefix, style) = match (is_selected, is_current) {
                (true, true) => ("▸ ", theme::highlight()),
                (true, false) => (
                    "▸ ",
                    Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                ),
                (false, true) => ("  ", theme::highlight()),
                (false, false) => ("  ", Style::default().fg(theme::TEXT_MUTED)),
            };

            let padded = format!("{:<width$}", format!("{prefix}{text}"));
            lines.push(Line::from(Span::styled(padded, style)));
        }

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

fn group_header(label: &str) -> Line<'_> {
    Line::from(Span::styled(format!(" {label}"), theme::heading()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_points_at_first_view() {
        let state = SidebarState::new();
        assert!(!state.user_collapsed);
        assert_eq!(state.selected_item(), SidebarItem::View(View::GuestExperience));
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = SidebarState::new();
        for _ in 0..SidebarItem::ALL.len() {
            state.select_next();
        }
        assert_eq!(state.selected, Language::ALL.len());
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut state = SidebarState::new();
        state.selected = 0;
        state.select_prev();
        assert_eq!(state.selected, SidebarItem::ALL.len() - 1);
    }

    #[test]
    fn test_toggle_collapse() {
        let mut state = SidebarState::new();
        state.toggle_collapse();
        assert!(state.user_collapsed);
        state.toggle_collapse();
        assert!(!state.user_collapsed);
    }

    #[test]
    fn test_sync_to_view() {
        let mut state = SidebarState::new();
        state.sync_to_view(View::StaffPerformance);
        assert_eq!(state.selected_item(), SidebarItem::View(View::StaffPerformance));
    }

    #[test]
    fn test_item_actions() {
        assert_eq!(
            SidebarItem::Language(Language::Greek).action(),
            Action::SetLanguage(Language::Greek)
        );
        assert_eq!(
            SidebarItem::View(View::RevenueManagement).action(),
            Action::SelectView(View::RevenueManagement)
        );
    }
}
