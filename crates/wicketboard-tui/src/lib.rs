// Terminal dashboard: view state, frame rendering, and the event loop.
//
// The TUI owns a `ViewState` holding the user's selections and the reports
// computed for them. Key presses mutate the selections; whenever one changes
// the `App` recomputes every report synchronously before the next render.

pub mod app;
pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::{error, info};

use wicketboard_core::config::TrendsConfig;
use wicketboard_core::dashboard::{ComparisonReport, PlayerReport, TrendReport};
use wicketboard_core::source::InningsSource;
use wicketboard_core::tournament::TournamentLabels;
use wicketboard_core::trend::TrendKey;

use app::App;
use layout::build_layout;

// ---------------------------------------------------------------------------
// Tabs and commands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Player,
    Comparison,
    Trends,
}

/// What a key press asks of the event loop beyond local view changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// A selection changed; recompute the reports.
    Recompute,
    /// Drop the cached tables and load the source again.
    Reload,
    Quit,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Selections plus the reports computed for them.
pub struct ViewState {
    pub active_tab: TabId,
    /// Whether the quit confirmation dialog is shown.
    pub confirm_quit: bool,

    // Data source status
    pub source: String,
    pub loaded_at: Option<DateTime<Local>>,
    pub generation: u64,
    /// Last load error, shown in the status bar until the next good load.
    pub error: Option<String>,
    pub labels: TournamentLabels,

    // Player tab
    pub players: Vec<String>,
    /// Index into `players`; `None` until a player is chosen.
    pub player_idx: Option<usize>,
    /// Tournaments the chosen player appears in.
    pub player_tournaments: Vec<String>,
    /// 0 is "(All)", `i` is `player_tournaments[i - 1]`.
    pub tournament_idx: usize,
    pub player_report: Option<PlayerReport>,

    // Comparison tab
    pub comparison_cursor: usize,
    pub comparison_selected: BTreeSet<String>,
    pub comparison: ComparisonReport,

    // Trends tab
    pub team_query: String,
    /// Whether the team query is being edited.
    pub query_mode: bool,
    pub query_draft: String,
    pub all_tournaments: Vec<String>,
    pub tournament_cursor: usize,
    /// Tournaments included in the trend; empty means all.
    pub trend_tournaments: BTreeSet<String>,
    pub group_by_opponent: bool,
    pub chart_points: usize,
    pub trends: TrendReport,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::from_config(&TrendsConfig::default(), TournamentLabels::builtin())
    }
}

impl ViewState {
    pub fn from_config(trends: &TrendsConfig, labels: TournamentLabels) -> Self {
        ViewState {
            active_tab: TabId::Player,
            confirm_quit: false,
            source: String::new(),
            loaded_at: None,
            generation: 0,
            error: None,
            labels,
            players: Vec::new(),
            player_idx: None,
            player_tournaments: Vec::new(),
            tournament_idx: 0,
            player_report: None,
            comparison_cursor: 0,
            comparison_selected: BTreeSet::new(),
            comparison: ComparisonReport::default(),
            team_query: trends.team_query.clone(),
            query_mode: false,
            query_draft: String::new(),
            all_tournaments: Vec::new(),
            tournament_cursor: 0,
            trend_tournaments: BTreeSet::new(),
            group_by_opponent: trends.group_by_opponent,
            chart_points: trends.chart_points,
            trends: TrendReport::default(),
        }
    }

    pub fn selected_player(&self) -> Option<&str> {
        self.player_idx
            .and_then(|i| self.players.get(i))
            .map(String::as_str)
    }

    /// The tournament restriction of the player tab, if any.
    pub fn selected_tournament(&self) -> Option<&str> {
        match self.tournament_idx {
            0 => None,
            i => self.player_tournaments.get(i - 1).map(String::as_str),
        }
    }

    pub fn requested_trend_key(&self) -> TrendKey {
        if self.group_by_opponent {
            TrendKey::Opponent
        } else {
            TrendKey::Match
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    match state.active_tab {
        TabId::Player => widgets::player::render(frame, layout.main_panel, state),
        TabId::Comparison => widgets::comparison::render(frame, layout.main_panel, state),
        TabId::Trends => widgets::trends::render(frame, layout.main_panel, state),
    }
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// Loads the source once up front; a failed load leaves the dashboard empty
/// with the error in the status bar, and `R` tries again.
pub async fn run<S: InningsSource>(mut app: App<S>, mut view_state: ViewState) -> anyhow::Result<()> {
    if let Err(e) = app.load(&mut view_state) {
        error!("Initial load failed: {}", e);
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    // ~30fps
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => {
                                info!("Quit requested");
                                break;
                            }
                            Some(UserCommand::Reload) => {
                                if let Err(e) = app.reload(&mut view_state) {
                                    error!("Reload failed: {}", e);
                                }
                            }
                            Some(UserCommand::Recompute) => app.recompute(&mut view_state),
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("Terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
