// Player performance tab: selectors, KPI strips and match-wise tables for
// the chosen player's batting and bowling.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use wicketboard_core::dashboard::PlayerReport;
use wicketboard_core::ingest::{BattingInnings, BowlingInnings, Capabilities, OptionalColumn};
use wicketboard_core::metrics::{format_count, format_rate, BattingSummary, BowlingSummary, PLACEHOLDER};
use wicketboard_core::tournament::TournamentLabels;

use super::{header_row, info_message, titled_block};
use crate::layout::player_layout;
use crate::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let layout = player_layout(area);

    frame.render_widget(selector(state), layout.selector);

    let Some(ref report) = state.player_report else {
        let message = if state.players.is_empty() {
            "No innings loaded. Check the data paths in config/dashboard.toml and press R."
        } else {
            "Choose a player with ←/→ to see batting and bowling performance."
        };
        let rest = Rect {
            height: area.height.saturating_sub(layout.selector.height),
            y: layout.batting_kpis.y,
            ..area
        };
        frame.render_widget(info_message("Player Performance", message), rest);
        return;
    };

    if report.has_batting() {
        frame.render_widget(
            kpi_paragraph("Batting", batting_kpis(&report.batting)),
            layout.batting_kpis,
        );
        frame.render_widget(batting_table(report, &state.labels), layout.batting_table);
    } else {
        let rest = layout.batting_kpis.union(layout.batting_table);
        frame.render_widget(
            info_message("Batting", "No batting data for this selection."),
            rest,
        );
    }

    if report.has_bowling() {
        frame.render_widget(
            kpi_paragraph("Bowling", bowling_kpis(&report.bowling)),
            layout.bowling_kpis,
        );
        frame.render_widget(bowling_table(report, &state.labels), layout.bowling_table);
    } else {
        let rest = layout.bowling_kpis.union(layout.bowling_table);
        frame.render_widget(
            info_message("Bowling", "No bowling data for this selection."),
            rest,
        );
    }
}

fn selector(state: &ViewState) -> Paragraph<'static> {
    let bold = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let player = match (state.selected_player(), state.player_idx) {
        (Some(name), Some(i)) => format!("{} ({}/{})", name, i + 1, state.players.len()),
        _ => "(none)".to_string(),
    };
    let tournament = match state.selected_tournament() {
        Some(key) => state.labels.label(key).to_string(),
        None => "(All)".to_string(),
    };
    Paragraph::new(Line::from(vec![
        Span::raw(" Player: "),
        Span::styled(player, bold),
        Span::raw("   Tournament: "),
        Span::styled(tournament, bold),
    ]))
    .block(titled_block("Player Performance"))
}

fn kpi_paragraph(title: &'static str, text: String) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White),
    )))
    .block(titled_block(title))
}

/// "Inns 3 | Runs 110 | Avg 55.00 | SR 137.50 | 4s/6s 13/1"
pub fn batting_kpis(s: &BattingSummary) -> String {
    format!(
        " Inns {} | Runs {} | Avg {} | SR {} | 4s/6s {}/{}",
        s.innings,
        format_count(s.runs),
        format_rate(s.average, 2),
        format_rate(s.strike_rate, 2),
        format_count(s.fours),
        format_count(s.sixes),
    )
}

/// "Spells 2 | Overs 7.5 | Runs 58 | Wkts 3 | Econ 7.73 | Avg 19.33 | SR 15.0"
pub fn bowling_kpis(s: &BowlingSummary) -> String {
    format!(
        " Spells {} | Overs {:.1} | Runs {} | Wkts {} | Econ {} | Avg {} | SR {}",
        s.spells,
        s.overs,
        format_count(s.runs_conceded),
        format_count(s.wickets),
        format_rate(s.economy, 2),
        format_rate(s.average, 2),
        format_rate(s.strike_rate, 1),
    )
}

fn count_or_placeholder(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), format_count)
}

fn number_or_placeholder(value: Option<u32>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}

fn source_cell(source: Option<&str>) -> String {
    source.unwrap_or(PLACEHOLDER).to_string()
}

/// Cells of one match-wise batting row. The position and source columns are
/// only present when the export has them.
pub fn batting_cells(row: &BattingInnings, labels: &TournamentLabels, caps: &Capabilities) -> Vec<String> {
    let mut cells = vec![
        labels.label(&row.tournament_key).to_string(),
        row.opponent.clone(),
        number_or_placeholder(row.innings_no),
    ];
    if caps.has(OptionalColumn::BattingPosition) {
        cells.push(number_or_placeholder(row.batting_position));
    }
    cells.extend([
        row.match_id.clone(),
        count_or_placeholder(row.runs),
        count_or_placeholder(row.balls),
        format_rate(row.strike_rate, 2),
        count_or_placeholder(row.fours),
        count_or_placeholder(row.sixes),
        row.how_out.clone().unwrap_or_default(),
    ]);
    if caps.has(OptionalColumn::Source) {
        cells.push(source_cell(row.source.as_deref()));
    }
    cells
}

pub fn bowling_cells(row: &BowlingInnings, labels: &TournamentLabels, caps: &Capabilities) -> Vec<String> {
    let mut cells = vec![
        labels.label(&row.tournament_key).to_string(),
        row.opponent.clone(),
        number_or_placeholder(row.innings_no),
        row.match_id.clone(),
        if row.overs.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            row.overs.clone()
        },
        count_or_placeholder(row.runs_conceded),
        count_or_placeholder(row.wickets),
        format_rate(row.economy, 2),
    ];
    if caps.has(OptionalColumn::Source) {
        cells.push(source_cell(row.source.as_deref()));
    }
    cells
}

fn batting_table(report: &PlayerReport, labels: &TournamentLabels) -> Table<'static> {
    let caps = &report.batting_capabilities;

    let mut titles = vec!["Tournament", "Opponent", "Inns"];
    let mut widths = vec![
        Constraint::Min(14),
        Constraint::Min(12),
        Constraint::Length(4),
    ];
    if caps.has(OptionalColumn::BattingPosition) {
        titles.push("Pos");
        widths.push(Constraint::Length(4));
    }
    titles.extend(["Match", "R", "B", "SR", "4s", "6s", "How out"]);
    widths.extend([
        Constraint::Length(10),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(12),
    ]);
    if caps.has(OptionalColumn::Source) {
        titles.push("Source");
        widths.push(Constraint::Length(10));
    }

    let rows: Vec<Row> = report
        .batting_innings
        .iter()
        .map(|r| Row::new(batting_cells(r, labels, caps).into_iter().map(Cell::from)))
        .collect();

    Table::new(rows, widths)
        .header(header_row(&titles))
        .block(titled_block(format!(
            "Match-wise batting ({})",
            report.batting_innings.len()
        )))
}

fn bowling_table(report: &PlayerReport, labels: &TournamentLabels) -> Table<'static> {
    let caps = &report.bowling_capabilities;

    let mut titles = vec!["Tournament", "Opponent", "Inns", "Match", "O", "R", "W", "Econ"];
    let mut widths = vec![
        Constraint::Min(14),
        Constraint::Min(12),
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(6),
    ];
    if caps.has(OptionalColumn::Source) {
        titles.push("Source");
        widths.push(Constraint::Length(10));
    }

    let rows: Vec<Row> = report
        .bowling_spells
        .iter()
        .map(|r| Row::new(bowling_cells(r, labels, caps).into_iter().map(Cell::from)))
        .collect();

    Table::new(rows, widths)
        .header(header_row(&titles))
        .block(titled_block(format!(
            "Match-wise bowling ({})",
            report.bowling_spells.len()
        )))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
