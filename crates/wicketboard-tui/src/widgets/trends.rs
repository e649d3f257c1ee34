// Team trends tab: query controls, batting and bowling line charts, and the
// best-to-worst table of trend rows.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table};
use ratatui::Frame;

use wicketboard_core::metrics::{format_rate, PLACEHOLDER};
use wicketboard_core::trend::{MatchResult, TrendRow, TrendSeries};

use super::{header_row, info_message, titled_block};
use crate::layout::trends_layout;
use crate::ViewState;

const SERIES_COLORS: [Color; 3] = [Color::Cyan, Color::Red, Color::Yellow];

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let layout = trends_layout(area);

    frame.render_widget(controls(state), layout.controls);

    if state.trends.is_empty() {
        let rest = layout.batting_chart.union(layout.ranking);
        let message = if state.players.is_empty() {
            "No innings loaded."
        } else {
            "No innings match this team and tournament selection."
        };
        frame.render_widget(info_message("Team Trends", message), rest);
        return;
    }

    let charts = &state.trends.charts;
    render_chart(
        frame,
        layout.batting_chart,
        "Batting",
        &charts.batting,
        &charts.x_labels,
    );
    render_chart(
        frame,
        layout.bowling_chart,
        "Bowling",
        &charts.bowling,
        &charts.x_labels,
    );

    frame.render_widget(ranking_table(state), layout.ranking);
}

fn controls(state: &ViewState) -> Paragraph<'static> {
    let bold = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let team = if state.query_mode {
        Span::styled(
            format!("{}_", state.query_draft),
            Style::default().fg(Color::Yellow),
        )
    } else if state.team_query.trim().is_empty() {
        Span::styled("(all teams)", bold)
    } else {
        Span::styled(state.team_query.clone(), bold)
    };

    let mut first = vec![
        Span::raw(" Team: "),
        team,
        Span::raw("   Group by: "),
        Span::styled(grouping_label(state), bold),
    ];
    if state.trends.fell_back(state.requested_trend_key()) {
        first.push(Span::styled(
            "  (no opponent column, grouped by match)",
            Style::default().fg(Color::Yellow),
        ));
    }

    Paragraph::new(vec![Line::from(first), tournament_line(state)])
        .block(titled_block("Team Trends"))
}

fn grouping_label(state: &ViewState) -> &'static str {
    state
        .trends
        .key
        .unwrap_or_else(|| state.requested_trend_key())
        .label()
}

/// Tournament picker line: `>` marks the cursor, `[x]` an included
/// tournament. Nothing included means every tournament.
fn tournament_line(state: &ViewState) -> Line<'static> {
    let mut spans = vec![Span::raw(" Tournaments: ")];
    if state.trend_tournaments.is_empty() {
        spans.push(Span::styled("(all) ", Style::default().fg(Color::Green)));
    }
    for (i, key) in state.all_tournaments.iter().enumerate() {
        let mark = if state.trend_tournaments.contains(key) {
            "[x]"
        } else {
            "[ ]"
        };
        let cursor = if i == state.tournament_cursor { ">" } else { " " };
        let style = if i == state.tournament_cursor {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(
            format!("{cursor}{mark} {}", state.labels.label(key)),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Upper y bound across every series of a chart, with headroom. Never zero
/// so the axis stays drawable.
pub fn y_upper_bound(series: &[TrendSeries]) -> f64 {
    let max = series.iter().map(TrendSeries::max_y).fold(0.0, f64::max);
    if max > 0.0 {
        (max + max / 10.0).ceil()
    } else {
        1.0
    }
}

/// First, middle and last x labels; all of them when there are three or
/// fewer.
pub fn axis_labels(x_labels: &[String]) -> Vec<String> {
    match x_labels.len() {
        0..=3 => x_labels.to_vec(),
        n => vec![
            x_labels[0].clone(),
            x_labels[n / 2].clone(),
            x_labels[n - 1].clone(),
        ],
    }
}

fn render_chart(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    series: &[TrendSeries],
    x_labels: &[String],
) {
    let datasets: Vec<Dataset> = series
        .iter()
        .zip(SERIES_COLORS)
        .map(|(s, color)| {
            Dataset::default()
                .name(s.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&s.points)
        })
        .collect();

    let x_max = x_labels.len().saturating_sub(1).max(1) as f64;
    let y_max = y_upper_bound(series);

    let chart = Chart::new(datasets)
        .block(titled_block(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(axis_labels(x_labels)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{:.0}", y_max),
                ]),
        );
    frame.render_widget(chart, area);
}

fn optional_count(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.0}"))
}

/// Tournament, Key, Runs, RR, Conceded, Econ, NRR, Result.
pub fn ranking_cells(row: &TrendRow) -> Vec<String> {
    vec![
        row.tournament.clone(),
        row.key.clone(),
        optional_count(row.runs_scored),
        format_rate(row.run_rate, 2),
        optional_count(row.runs_conceded),
        format_rate(row.economy, 2),
        format_rate(row.nrr_proxy, 2),
        row.result.label().to_string(),
    ]
}

fn ranking_table(state: &ViewState) -> Table<'static> {
    let key_title = grouping_label(state);
    let widths = [
        Constraint::Min(14),
        Constraint::Min(14),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
    ];
    let rows: Vec<Row> = state
        .trends
        .ranked
        .iter()
        .map(|r| {
            let color = match r.result {
                MatchResult::Won => Color::Green,
                MatchResult::Lost => Color::Red,
            };
            let mut cells: Vec<Cell> = ranking_cells(r).into_iter().map(Cell::from).collect();
            if let Some(last) = cells.pop() {
                cells.push(last.style(Style::default().fg(color)));
            }
            Row::new(cells)
        })
        .collect();

    Table::new(rows, widths)
        .header(header_row(&[
            "Tournament",
            key_title,
            "Runs",
            "RR",
            "Conceded",
            "Econ",
            "NRR",
            "Result",
        ]))
        .block(titled_block("Best to worst (NRR proxy; result is estimated)"))
}
