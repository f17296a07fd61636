use serde::{Deserialize, Serialize};

use crate::core::i18n::{Language, Translations};

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A resolved action to execute.
    Action(Action),
}

/// High-level actions dispatched by the input mapper or sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    SelectView(View),
    TabNext,
    TabPrev,
    ToggleSidebar,
    FocusSidebar,

    // Language
    CycleLanguage,
    SetLanguage(Language),

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// The four mutually exclusive dashboard views.
///
/// These identifiers are stable: dispatch never compares translated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    GuestExperience,
    RevenueManagement,
    SentimentAnalysis,
    StaffPerformance,
}

impl View {
    pub const ALL: [View; 4] = [
        View::GuestExperience,
        View::RevenueManagement,
        View::SentimentAnalysis,
        View::StaffPerformance,
    ];

    /// Localized menu label.
    pub fn label(self, t: &Translations) -> &'static str {
        match self {
            View::GuestExperience => t.guest_exp,
            View::RevenueManagement => t.revenue_mgmt,
            View::SentimentAnalysis => t.sentiment_analysis,
            View::StaffPerformance => t.staff_performance,
        }
    }

    /// Single-char icon for the collapsed sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            View::GuestExperience => "☺",
            View::RevenueManagement => "$",
            View::SentimentAnalysis => "✉",
            View::StaffPerformance => "♟",
        }
    }

    /// Position in [`View::ALL`], also the number-key shortcut minus one.
    pub fn index(self) -> usize {
        View::ALL.iter().position(|&v| v == self).unwrap_or(0)
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Whether the sidebar or the main view receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFocus {
    Sidebar,
    Main,
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Language changes.
    Info,
    /// Feedback file attached.
    Success,
    /// Feedback file rejected.
    Warning,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
