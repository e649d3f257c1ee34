// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Main Panel (active tab)                           |
// |                                                   |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// Each tab splits the main panel further; see the per-tab builders below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for the outer frame.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: tab bar, data source, load time.
    pub status_bar: Rect,
    /// Content of the active tab.
    pub main_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // main panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        main_panel: vertical[1],
        help_bar: vertical[2],
    }
}

/// Player tab: selector line, then a batting and a bowling section, each a
/// KPI strip above its match-wise table.
#[derive(Debug, Clone)]
pub struct PlayerLayout {
    pub selector: Rect,
    pub batting_kpis: Rect,
    pub batting_table: Rect,
    pub bowling_kpis: Rect,
    pub bowling_table: Rect,
}

pub fn player_layout(area: Rect) -> PlayerLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // selector
            Constraint::Length(3),      // batting KPIs
            Constraint::Percentage(50), // batting table
            Constraint::Length(3),      // bowling KPIs
            Constraint::Min(4),         // bowling table
        ])
        .split(area);

    PlayerLayout {
        selector: vertical[0],
        batting_kpis: vertical[1],
        batting_table: vertical[2],
        bowling_kpis: vertical[3],
        bowling_table: vertical[4],
    }
}

/// Comparison tab: player picker on the left, two tables on the right.
#[derive(Debug, Clone)]
pub struct ComparisonLayout {
    pub picker: Rect,
    pub batting: Rect,
    pub bowling: Rect,
}

pub fn comparison_layout(area: Rect) -> ComparisonLayout {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let tables = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(horizontal[1]);

    ComparisonLayout {
        picker: horizontal[0],
        batting: tables[0],
        bowling: tables[1],
    }
}

/// Trends tab: controls, the two line charts side by side, ranked table.
#[derive(Debug, Clone)]
pub struct TrendsLayout {
    pub controls: Rect,
    pub batting_chart: Rect,
    pub bowling_chart: Rect,
    pub ranking: Rect,
}

pub fn trends_layout(area: Rect) -> TrendsLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // controls
            Constraint::Percentage(50), // charts
            Constraint::Min(5),         // ranked table
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[1]);

    TrendsLayout {
        controls: vertical[0],
        batting_chart: charts[0],
        bowling_chart: charts[1],
        ranking: vertical[2],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
