// Status bar widget: tab indicator, data source, load time.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::{TabId, ViewState};

/// Render the status bar into the given area.
///
/// Layout: [tab bar] | [load #n at HH:MM:SS] or [error] [source]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = tab_spans(state.active_tab);

    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));
    spans.extend(load_spans(state));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Build tab indicator spans with the active tab highlighted.
/// E.g. "[1:Player] [2:Compare] [3:Trends]"
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let tabs = [
        (TabId::Player, "1:Player"),
        (TabId::Comparison, "2:Compare"),
        (TabId::Trends, "3:Trends"),
    ];

    let mut spans = Vec::new();
    for (tab_id, label) in tabs {
        let style = if tab_id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}]", label), style));
        spans.push(Span::raw(" "));
    }
    spans
}

/// The load stamp or the last load error, then the source description.
pub fn load_spans(state: &ViewState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let Some(ref err) = state.error {
        spans.push(Span::styled(
            format!("load failed: {err}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(at) = state.loaded_at {
        spans.push(Span::styled(
            format!("load #{} at {}", state.generation, at.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled("not loaded", Style::default().fg(Color::Yellow)));
    }
    if !state.source.is_empty() {
        spans.push(Span::styled(
            format!("  {}", state.source),
            Style::default().fg(Color::Gray),
        ));
    }
    spans
}

/// Return the label for a tab.
pub fn tab_label(tab: TabId) -> &'static str {
    match tab {
        TabId::Player => "Player Performance",
        TabId::Comparison => "Player Comparison",
        TabId::Trends => "Team Trends",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
