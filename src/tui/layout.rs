//! Root layout (sidebar + main + status bar) and the shared view layout
//! (header, controls, two side-by-side panels, full-width section).

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the expanded sidebar (language selector + labeled menu).
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 34;
/// Width of the collapsed sidebar (single-char icons).
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 3;
/// Auto-collapse sidebar below this terminal width.
pub const AUTO_COLLAPSE_THRESHOLD: u16 = 100;
/// Hide sidebar entirely below this terminal width.
pub const HIDE_SIDEBAR_THRESHOLD: u16 = 30;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Sidebar area (None if hidden).
    pub sidebar: Option<Rect>,
    /// Main content area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

/// Sidebar visibility state derived from terminal width and user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVisibility {
    Expanded,
    Collapsed,
    Hidden,
}

impl AppLayout {
    /// Compute layout regions from the terminal area and sidebar state.
    ///
    /// `user_collapsed`: user has toggled collapse with Ctrl+B.
    /// `focused`: the sidebar has input focus and is drawn expanded at any
    /// width, so every selectable row is visible.
    pub fn compute(area: Rect, user_collapsed: bool, focused: bool) -> (Self, SidebarVisibility) {
        let visibility = if focused {
            SidebarVisibility::Expanded
        } else if area.width < HIDE_SIDEBAR_THRESHOLD {
            SidebarVisibility::Hidden
        } else if user_collapsed || area.width < AUTO_COLLAPSE_THRESHOLD {
            SidebarVisibility::Collapsed
        } else {
            SidebarVisibility::Expanded
        };

        let rows = Layout::vertical([
            Constraint::Min(1),    // Content (sidebar + main)
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let content_area = rows[0];
        let status = rows[1];

        let sidebar_width = match visibility {
            SidebarVisibility::Hidden => 0,
            SidebarVisibility::Collapsed => SIDEBAR_COLLAPSED_WIDTH,
            SidebarVisibility::Expanded => SIDEBAR_EXPANDED_WIDTH.min(area.width),
        };

        let (sidebar, main) = if sidebar_width == 0 {
            (None, content_area)
        } else {
            let cols = Layout::horizontal([
                Constraint::Length(sidebar_width),
                Constraint::Min(1),
            ])
            .split(content_area);
            (Some(cols[0]), cols[1])
        };

        (AppLayout { sidebar, main, status }, visibility)
    }
}

/// Regions of a dashboard view.
pub struct ViewLayout {
    /// Translated title and info banner.
    pub header: Rect,
    /// Input field(s) and action button.
    pub controls: Rect,
    /// Left panel (None until a bundle exists).
    pub left: Option<Rect>,
    /// Right panel (None until a bundle exists).
    pub right: Option<Rect>,
    /// Full-width section below the panels (None until a bundle exists).
    pub bottom: Option<Rect>,
}

impl ViewLayout {
    /// `controls_height` includes borders; `bottom_height` is the full-width
    /// section height when results are shown.
    pub fn compute(area: Rect, controls_height: u16, bottom_height: Option<u16>) -> Self {
        let Some(bottom_height) = bottom_height else {
            let rows = Layout::vertical([
                Constraint::Length(4),
                Constraint::Length(controls_height),
                Constraint::Min(0),
            ])
            .split(area);
            return ViewLayout {
                header: rows[0],
                controls: rows[1],
                left: None,
                right: None,
                bottom: None,
            };
        };

        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(controls_height),
            Constraint::Min(6),
            Constraint::Length(bottom_height),
        ])
        .split(area);

        let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        ViewLayout {
            header: rows[0],
            controls: rows[1],
            left: Some(cols[0]),
            right: Some(cols[1]),
            bottom: Some(rows[3]),
        }
    }
}

/// Split a panel into `n` equal vertical sections.
pub fn stack(area: Rect, n: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, n.max(1) as u32); n.max(1)];
    Layout::vertical(constraints).split(area).to_vec()
}
