// Help bar widget: key hints for the active tab and mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::{TabId, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn hint_text(state: &ViewState) -> String {
    if state.confirm_quit {
        return " y:Quit | n/Esc:Cancel".to_string();
    }
    if state.query_mode {
        return " Type team name | Enter:Apply | Esc:Cancel".to_string();
    }
    let tab = match state.active_tab {
        TabId::Player => "←/→:Player | t:Tournament | Esc:Clear",
        TabId::Comparison => "↑/↓:Move | Space:Toggle | a:All",
        TabId::Trends => "/:Team | t:Next tournament | x:Toggle | o:Opponent/Match",
    };
    format!(" {tab} | 1-3:Tabs | R:Reload | q:Quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_tab_and_mode() {
        let mut state = ViewState::default();
        assert!(hint_text(&state).contains("t:Tournament"));
        state.active_tab = TabId::Trends;
        assert!(hint_text(&state).contains("o:Opponent/Match"));
        state.query_mode = true;
        assert!(hint_text(&state).starts_with(" Type team name"));
        state.confirm_quit = true;
        assert_eq!(hint_text(&state), " y:Quit | n/Esc:Cancel");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
