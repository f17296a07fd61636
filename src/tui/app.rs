use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use super::events::{Action, AppEvent, AreaFocus, Notification, NotificationLevel, View};
use super::layout::AppLayout;
use super::services::Services;
use super::sidebar::SidebarState;
use super::theme;
use super::views::guest::GuestViewState;
use super::views::revenue::RevenueViewState;
use super::views::sentiment::SentimentViewState;
use super::views::staff::StaffViewState;
use crate::config::AppConfig;
use crate::core::error::Result;
use crate::core::i18n::Language;

/// Ticks a notification stays on screen.
const NOTIFICATION_TTL: u32 = 60;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Active dashboard view.
    pub view: View,
    /// Active display language.
    pub language: Language,
    /// Whether sidebar or main content has input focus.
    pub area_focus: AreaFocus,
    pub sidebar: SidebarState,
    pub guest: GuestViewState,
    pub revenue: RevenueViewState,
    pub sentiment: SentimentViewState,
    pub staff: StaffViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Whether the help modal is open.
    pub show_help: bool,
    services: Services,
}

impl AppState {
    pub fn new(services: Services, language: Language, view: View) -> Self {
        let mut sidebar = SidebarState::new();
        sidebar.sync_to_view(view);
        Self {
            running: true,
            view,
            language,
            area_focus: AreaFocus::Main,
            sidebar,
            guest: GuestViewState::new(),
            revenue: RevenueViewState::new(),
            sentiment: SentimentViewState::new(),
            staff: StaffViewState::new(),
            notifications: Vec::new(),
            show_help: false,
            services,
        }
    }

    /// Initial state from the `[dashboard]` config section.
    pub fn from_config(config: &AppConfig, services: Services) -> Self {
        Self::new(
            services,
            config.dashboard.language,
            config.dashboard.start_view,
        )
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        log::info!(
            "Dashboard started on {:?} in {}",
            self.view,
            self.language.code()
        );

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(crossterm_event)) => {
                        self.handle_event(AppEvent::Input(crossterm_event));
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => self.running = false,
                },
            }
        }

        log::info!("Dashboard stopped");
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Sidebar input (when focused)
                if self.area_focus == AreaFocus::Sidebar && self.handle_sidebar_input(&crossterm_event)
                {
                    return;
                }

                // Priority 3: Active view (captures everything in insert mode)
                if self.area_focus == AreaFocus::Main && self.dispatch_view_input(&crossterm_event) {
                    return;
                }

                // Priority 4: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
        }
    }

    /// Dispatch input to the active view. Returns true if consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.view {
            View::GuestExperience => self.guest.handle_input(event, &self.services),
            View::RevenueManagement => self.revenue.handle_input(event, &self.services),
            View::SentimentAnalysis => {
                let consumed = self.sentiment.handle_input(event, &self.services);
                if let Some((level, message)) = self.sentiment.take_notice() {
                    self.push_notification(message, level);
                }
                consumed
            }
            View::StaffPerformance => self.staff.handle_input(event, &self.services),
        }
    }

    /// Handle sidebar-specific input. Returns true if consumed.
    fn handle_sidebar_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.sidebar.select_next();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.sidebar.select_prev();
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('l')) => {
                let action = self.sidebar.selected_item().action();
                let picks_view = matches!(action, Action::SelectView(_));
                self.handle_action(action);
                if picks_view {
                    self.area_focus = AreaFocus::Main;
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.sidebar.user_collapsed = true;
                self.area_focus = AreaFocus::Main;
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.area_focus = AreaFocus::Main;
                true
            }
            _ => false,
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::ToggleSidebar),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('L' | 'l') => Some(Action::CycleLanguage),
                KeyCode::Tab => Some(Action::TabNext),
                KeyCode::BackTab => Some(Action::TabPrev),
                KeyCode::Esc => Some(Action::FocusSidebar),
                KeyCode::Char(c @ '1'..='4') => {
                    let idx = c as usize - '1' as usize;
                    View::ALL.get(idx).copied().map(Action::SelectView)
                }
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SelectView(view) => self.set_view(view),
            Action::TabNext => self.set_view(self.view.next()),
            Action::TabPrev => self.set_view(self.view.prev()),
            Action::ToggleSidebar => self.sidebar.toggle_collapse(),
            Action::FocusSidebar => {
                self.sidebar.user_collapsed = false;
                self.area_focus = AreaFocus::Sidebar;
            }
            Action::CycleLanguage => self.set_language(self.language.next()),
            Action::SetLanguage(language) => self.set_language(language),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    /// Switch views. Both the view being left and the one being entered
    /// start over: no bundle or input survives a transition.
    fn set_view(&mut self, view: View) {
        self.sidebar.sync_to_view(view);
        self.area_focus = AreaFocus::Main;
        if view == self.view {
            return;
        }
        log::info!("View changed: {:?} -> {:?}", self.view, view);
        self.reset_view(self.view);
        self.reset_view(view);
        self.view = view;
    }

    fn reset_view(&mut self, view: View) {
        match view {
            View::GuestExperience => self.guest.reset(),
            View::RevenueManagement => self.revenue.reset(),
            View::SentimentAnalysis => self.sentiment.reset(),
            View::StaffPerformance => self.staff.reset(),
        }
    }

    /// Change label language only; bundles and the active view stay put.
    fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        log::info!(
            "Language changed: {} -> {}",
            self.language.code(),
            language.code()
        );
        self.language = language;
        self.push_notification(
            format!("{}: {}", language.strings().language, language.native_name()),
            NotificationLevel::Info,
        );
    }

    /// Whether the active view is capturing text input.
    pub fn is_editing(&self) -> bool {
        match self.view {
            View::GuestExperience => self.guest.is_editing(),
            View::SentimentAnalysis => self.sentiment.is_editing(),
            View::RevenueManagement | View::StaffPerformance => false,
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let (layout, visibility) = AppLayout::compute(
            area,
            self.sidebar.user_collapsed,
            self.area_focus == AreaFocus::Sidebar,
        );

        if let Some(sidebar_area) = layout.sidebar {
            self.sidebar.render(
                frame,
                sidebar_area,
                visibility,
                self.language,
                self.view,
                self.area_focus,
            );
        }

        self.render_content(frame, layout.main);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);
        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let t = self.language.strings();
        match self.view {
            View::GuestExperience => self.guest.render(frame, area, t),
            View::RevenueManagement => self.revenue.render(frame, area, t),
            View::SentimentAnalysis => self.sentiment.render(frame, area, t),
            View::StaffPerformance => self.staff.render(frame, area, t),
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let t = self.language.strings();
        let mode_indicator = if self.is_editing() {
            Span::styled(" INSERT ", theme::insert_badge())
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" HOSPITALITY AI ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.view.label(t),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(format!("{}:", t.language), theme::key_hint()),
            Span::raw(" "),
            Span::styled(self.language.native_name(), theme::muted()),
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":view "),
            Span::styled("L", theme::key_hint()),
            Span::raw(":lang "),
            Span::styled("Ctrl+B", theme::key_hint()),
            Span::raw(":sidebar "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1.min(area.height.saturating_sub(height)), max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            notification_area,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("Tab / Shift+Tab", "Next / previous view"),
            ("1-4", "Jump to view by number"),
            ("L", "Cycle language (English, Ελληνικά, 中文)"),
            ("Ctrl+B", "Toggle sidebar collapse/expand"),
            ("Esc", "Focus sidebar"),
            ("", ""),
            ("Sidebar (when focused):", ""),
            ("j/k", "Navigate up/down"),
            ("Enter / l", "Pick language or view"),
            ("h", "Collapse sidebar"),
            ("Esc", "Focus main content"),
            ("", ""),
            ("Views:", ""),
            ("i", "Type into the input field"),
            ("Enter (typing)", "Submit guest ID / attach file"),
            ("Esc (typing)", "Stop typing"),
            ("Ctrl+U (typing)", "Clear the field"),
            ("Enter / g", "Run the view's action"),
            ("d", "Detach feedback file"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<22}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::scenario::SimulatedScenarios;

    fn app() -> AppState {
        let services = Services::with_source(Arc::new(SimulatedScenarios::with_seed(1)));
        AppState::new(services, Language::English, View::GuestExperience)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    #[test]
    fn test_number_keys_select_views() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('3')));
        assert_eq!(app.view, View::SentimentAnalysis);
        app.handle_event(key(KeyCode::Char('4')));
        assert_eq!(app.view, View::StaffPerformance);
        app.handle_event(key(KeyCode::Char('1')));
        assert_eq!(app.view, View::GuestExperience);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.view, View::RevenueManagement);
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.view, View::GuestExperience);
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.view, View::StaffPerformance);
    }

    #[test]
    fn test_transition_drops_bundles() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('2')));
        app.handle_event(key(KeyCode::Enter));
        assert!(app.revenue.bundle().is_some());

        app.handle_event(key(KeyCode::Char('4')));
        app.handle_event(key(KeyCode::Char('2')));
        assert!(app.revenue.bundle().is_none());
    }

    #[test]
    fn test_reselecting_same_view_keeps_bundle() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('4')));
        app.handle_event(key(KeyCode::Char('g')));
        app.handle_event(key(KeyCode::Char('4')));
        assert!(app.staff.bundle().is_some());
    }

    #[test]
    fn test_language_cycle_keeps_data_and_view() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('4')));
        app.handle_event(key(KeyCode::Enter));
        let before = app.staff.bundle().cloned();

        app.handle_event(key(KeyCode::Char('L')));
        assert_eq!(app.language, Language::Greek);
        assert_eq!(app.view, View::StaffPerformance);
        assert_eq!(app.staff.bundle().cloned(), before);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_insert_mode_swallows_global_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('i')));
        assert!(app.is_editing());

        app.handle_event(key(KeyCode::Char('q')));
        app.handle_event(key(KeyCode::Char('2')));
        assert!(app.running);
        assert_eq!(app.view, View::GuestExperience);
        assert_eq!(app.guest.guest_id(), "q2");
    }

    #[test]
    fn test_sidebar_picks_language_and_view() {
        let mut app = app();
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.area_focus, AreaFocus::Sidebar);

        // Selection starts on the active view; walk up to 中文
        app.handle_event(key(KeyCode::Char('k')));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.language, Language::Chinese);
        assert_eq!(app.area_focus, AreaFocus::Sidebar);

        app.handle_event(key(KeyCode::Char('j')));
        app.handle_event(key(KeyCode::Char('j')));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.view, View::RevenueManagement);
        assert_eq!(app.area_focus, AreaFocus::Main);
    }

    #[test]
    fn test_help_modal_blocks_input() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_event(key(KeyCode::Char('3')));
        assert_eq!(app.view, View::GuestExperience);
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app();
        state.handle_event(ctrl('c'));
        assert!(!state.running);

        let mut state = app();
        state.handle_event(key(KeyCode::Char('q')));
        assert!(!state.running);
    }

    #[test]
    fn test_ctrl_b_toggles_sidebar() {
        let mut app = app();
        app.handle_event(ctrl('b'));
        assert!(app.sidebar.user_collapsed);
        app.handle_event(ctrl('b'));
        assert!(!app.sidebar.user_collapsed);
    }

    #[test]
    fn test_notifications_expire_and_cap() {
        let mut app = app();
        for i in 0..5 {
            app.push_notification(format!("n{i}"), NotificationLevel::Info);
        }
        assert_eq!(app.notifications.len(), 3);
        app.push_notification("n4".to_string(), NotificationLevel::Info);
        assert_eq!(app.notifications.len(), 3);

        for _ in 0..NOTIFICATION_TTL {
            app.handle_event(AppEvent::Tick);
        }
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_from_config_uses_dashboard_section() {
        let mut config = AppConfig::default();
        config.dashboard.language = Language::Chinese;
        config.dashboard.start_view = View::SentimentAnalysis;
        let services = Services::with_source(Arc::new(SimulatedScenarios::with_seed(2)));
        let app = AppState::from_config(&config, services);
        assert_eq!(app.language, Language::Chinese);
        assert_eq!(app.view, View::SentimentAnalysis);
    }

    #[test]
    fn test_attach_outcome_becomes_notification() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('3')));
        app.handle_event(key(KeyCode::Char('i')));
        for c in "/nonexistent/reviews.csv".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications[0].level, NotificationLevel::Warning);
        assert!(app.notifications[0].message.contains("File not found"));
    }

    #[test]
    fn test_focused_sidebar_draws_expanded_when_narrow() {
        let mut app = app();
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.area_focus, AreaFocus::Sidebar);

        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..30)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|pos| buffer.cell(pos).map_or(" ", |c| c.symbol()).to_string())
            .collect();
        assert!(screen.contains("Ελληνικά"));

        app.handle_event(key(KeyCode::Esc));
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..30)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|pos| buffer.cell(pos).map_or(" ", |c| c.symbol()).to_string())
            .collect();
        assert!(!screen.contains("Ελληνικά"));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(50, 50, area);
        assert!(centered.x > 0 && centered.y > 0);
        assert!(centered.width <= 50 && centered.height <= 25);
    }
}
