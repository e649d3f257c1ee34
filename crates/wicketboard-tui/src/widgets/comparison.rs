// Player comparison tab: a multi-select player picker beside batting and
// bowling leaderboards for the chosen players.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, List, ListItem, ListState, Row, Table};
use ratatui::Frame;

use wicketboard_core::metrics::{format_count, format_rate, BattingGroup, BowlingGroup};

use super::{header_row, info_message, titled_block};
use crate::layout::comparison_layout;
use crate::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let layout = comparison_layout(area);

    render_picker(frame, layout.picker, state);

    if state.comparison_selected.is_empty() {
        let rest = layout.batting.union(layout.bowling);
        frame.render_widget(
            info_message(
                "Comparison",
                "Select players with Space to compare them side by side.",
            ),
            rest,
        );
        return;
    }

    if state.comparison.batting.is_empty() {
        frame.render_widget(
            info_message("Batting", "No batting data for the selected players."),
            layout.batting,
        );
    } else {
        frame.render_widget(batting_table(&state.comparison.batting), layout.batting);
    }

    if state.comparison.bowling.is_empty() {
        frame.render_widget(
            info_message("Bowling", "No bowling data for the selected players."),
            layout.bowling,
        );
    } else {
        frame.render_widget(bowling_table(&state.comparison.bowling), layout.bowling);
    }
}

fn render_picker(frame: &mut Frame, area: Rect, state: &ViewState) {
    let items: Vec<ListItem> = state
        .players
        .iter()
        .map(|p| {
            let chosen = state.comparison_selected.contains(p);
            let mark = if chosen { "[x] " } else { "[ ] " };
            let style = if chosen {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![Span::raw(mark), Span::styled(p.clone(), style)]))
        })
        .collect();

    let title = format!(
        "Players ({}/{})",
        state.comparison_selected.len(),
        state.players.len()
    );
    let list = List::new(items)
        .block(titled_block(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    if !state.players.is_empty() {
        list_state.select(Some(state.comparison_cursor.min(state.players.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Player, Inns, Runs, Balls, Avg, SR, 4s, 6s.
pub fn batting_cells(group: &BattingGroup) -> Vec<String> {
    let s = &group.summary;
    vec![
        group.label(),
        s.innings.to_string(),
        format_count(s.runs),
        format_count(s.balls),
        format_rate(s.average, 2),
        format_rate(s.strike_rate, 2),
        format_count(s.fours),
        format_count(s.sixes),
    ]
}

/// Player, Spells, Overs, Runs, Wkts, Econ, Avg, SR.
pub fn bowling_cells(group: &BowlingGroup) -> Vec<String> {
    let s = &group.summary;
    vec![
        group.label(),
        s.spells.to_string(),
        format!("{:.1}", s.overs),
        format_count(s.runs_conceded),
        format_count(s.wickets),
        format_rate(s.economy, 2),
        format_rate(s.average, 2),
        format_rate(s.strike_rate, 1),
    ]
}

fn batting_table(board: &[BattingGroup]) -> Table<'static> {
    let widths = [
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Length(4),
    ];
    let rows: Vec<Row> = board
        .iter()
        .map(|g| Row::new(batting_cells(g).into_iter().map(Cell::from)))
        .collect();
    Table::new(rows, widths)
        .header(header_row(&[
            "Player", "Inns", "Runs", "Balls", "Avg", "SR", "4s", "6s",
        ]))
        .block(titled_block("Batting (runs, then strike rate)"))
}

fn bowling_table(board: &[BowlingGroup]) -> Table<'static> {
    let widths = [
        Constraint::Min(16),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(6),
    ];
    let rows: Vec<Row> = board
        .iter()
        .map(|g| Row::new(bowling_cells(g).into_iter().map(Cell::from)))
        .collect();
    Table::new(rows, widths)
        .header(header_row(&[
            "Player", "Spells", "Overs", "Runs", "Wkts", "Econ", "Avg", "SR",
        ]))
        .block(titled_block("Bowling (wickets, then economy)"))
}
