// Keyboard input handling.
//
// Translates crossterm key events into ViewState mutations. Returns a
// `UserCommand` when the event loop has to act: recompute the reports after
// a selection change, reload the source, or quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{TabId, UserCommand, ViewState};

/// Handle a keyboard event.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.query_mode {
        return handle_query_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Player;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::Comparison;
            None
        }
        KeyCode::Char('3') => {
            view_state.active_tab = TabId::Trends;
            None
        }
        KeyCode::Char('R') => Some(UserCommand::Reload),
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => match view_state.active_tab {
            TabId::Player => handle_player_key(key_event, view_state),
            TabId::Comparison => handle_comparison_key(key_event, view_state),
            TabId::Trends => handle_trends_key(key_event, view_state),
        },
    }
}

/// y/q confirm, n/Esc cancel, everything else is blocked.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Editing the team query: Enter commits, Esc restores the previous query.
fn handle_query_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.query_mode = false;
            view_state.query_draft.clear();
            None
        }
        KeyCode::Enter => {
            view_state.query_mode = false;
            let draft = std::mem::take(&mut view_state.query_draft);
            if draft == view_state.team_query {
                return None;
            }
            view_state.team_query = draft;
            Some(UserCommand::Recompute)
        }
        KeyCode::Backspace => {
            view_state.query_draft.pop();
            None
        }
        KeyCode::Char(c) => {
            view_state.query_draft.push(c);
            None
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Per-tab keys
// ---------------------------------------------------------------------------

fn handle_player_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let count = view_state.players.len();
    match key_event.code {
        KeyCode::Right | KeyCode::Char('l') if count > 0 => {
            view_state.player_idx = Some(match view_state.player_idx {
                Some(i) => (i + 1) % count,
                None => 0,
            });
            view_state.tournament_idx = 0;
            Some(UserCommand::Recompute)
        }
        KeyCode::Left | KeyCode::Char('h') if count > 0 => {
            view_state.player_idx = Some(match view_state.player_idx {
                Some(0) | None => count - 1,
                Some(i) => i - 1,
            });
            view_state.tournament_idx = 0;
            Some(UserCommand::Recompute)
        }
        KeyCode::Char('t') if view_state.player_idx.is_some() => {
            // (All) plus one entry per tournament
            let options = view_state.player_tournaments.len() + 1;
            view_state.tournament_idx = (view_state.tournament_idx + 1) % options;
            Some(UserCommand::Recompute)
        }
        KeyCode::Esc if view_state.player_idx.is_some() => {
            view_state.player_idx = None;
            view_state.tournament_idx = 0;
            Some(UserCommand::Recompute)
        }
        _ => None,
    }
}

fn handle_comparison_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let count = view_state.players.len();
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.comparison_cursor = view_state.comparison_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view_state.comparison_cursor + 1 < count {
                view_state.comparison_cursor += 1;
            }
            None
        }
        KeyCode::Char(' ') => {
            let player = view_state.players.get(view_state.comparison_cursor)?.clone();
            if !view_state.comparison_selected.remove(&player) {
                view_state.comparison_selected.insert(player);
            }
            Some(UserCommand::Recompute)
        }
        KeyCode::Char('a') if count > 0 => {
            if view_state.comparison_selected.len() == count {
                view_state.comparison_selected.clear();
            } else {
                view_state.comparison_selected = view_state.players.iter().cloned().collect();
            }
            Some(UserCommand::Recompute)
        }
        _ => None,
    }
}

fn handle_trends_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let count = view_state.all_tournaments.len();
    match key_event.code {
        KeyCode::Char('/') => {
            view_state.query_mode = true;
            view_state.query_draft = view_state.team_query.clone();
            None
        }
        KeyCode::Char('t') if count > 0 => {
            view_state.tournament_cursor = (view_state.tournament_cursor + 1) % count;
            None
        }
        KeyCode::Char('x') => {
            let key = view_state.all_tournaments.get(view_state.tournament_cursor)?.clone();
            if !view_state.trend_tournaments.remove(&key) {
                view_state.trend_tournaments.insert(key);
            }
            Some(UserCommand::Recompute)
        }
        KeyCode::Char('o') => {
            view_state.group_by_opponent = !view_state.group_by_opponent;
            Some(UserCommand::Recompute)
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
