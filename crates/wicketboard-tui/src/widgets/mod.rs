// TUI widget modules for each dashboard panel.

pub mod comparison;
pub mod help_bar;
pub mod player;
pub mod quit_confirm;
pub mod status_bar;
pub mod trends;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Wrap};

/// Bold header row for a table.
pub fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().map(|t| Cell::from(*t))).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

/// Bordered block with a title.
pub fn titled_block(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Dimmed message shown when a panel has nothing to render.
pub fn info_message(title: &'static str, message: impl Into<String>) -> Paragraph<'static> {
    Paragraph::new(message.into())
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(titled_block(title))
}
