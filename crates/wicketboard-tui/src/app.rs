// Application orchestrator: owns the session and turns view selections into
// reports.

use std::sync::Arc;

use tracing::{info, warn};

use wicketboard_core::dashboard::{Dashboard, TrendQuery};
use wicketboard_core::ingest::IngestError;
use wicketboard_core::source::{InningsSource, Scorebook, Session};
use wicketboard_core::tournament::TournamentLabels;

use crate::ViewState;

pub struct App<S: InningsSource> {
    session: Session<S>,
    labels: TournamentLabels,
    dashboard: Option<Dashboard>,
}

impl<S: InningsSource> App<S> {
    pub fn new(session: Session<S>, labels: TournamentLabels) -> Self {
        App {
            session,
            labels,
            dashboard: None,
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    /// Load (or fetch the cached) scorebook and refresh every view.
    pub fn load(&mut self, view: &mut ViewState) -> Result<(), IngestError> {
        let result = self.session.scorebook();
        self.finish_load(view, result)
    }

    /// Invalidate the session cache, load again, and refresh every view.
    /// On failure the previously loaded data stays on screen.
    pub fn reload(&mut self, view: &mut ViewState) -> Result<(), IngestError> {
        info!("Reloading {}", self.session.source().describe());
        let result = self.session.reload();
        self.finish_load(view, result)
    }

    fn finish_load(
        &mut self,
        view: &mut ViewState,
        result: Result<Arc<Scorebook>, IngestError>,
    ) -> Result<(), IngestError> {
        view.source = self.session.source().describe();
        match result {
            Ok(book) => {
                view.loaded_at = Some(book.loaded_at);
                view.generation = self.session.generation();
                view.error = None;
                let first_load = self.dashboard.is_none();
                self.dashboard = Some(Dashboard::new(book, self.labels.clone()));
                self.sync_selectors(view, first_load);
                self.recompute(view);
                Ok(())
            }
            Err(e) => {
                warn!("Load failed, keeping previous data: {}", e);
                view.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Rebuild selector lists after a load, keeping selections that still
    /// exist in the new data. The first load starts the comparison with the
    /// first player.
    fn sync_selectors(&self, view: &mut ViewState, first_load: bool) {
        let Some(dashboard) = self.dashboard.as_ref() else {
            return;
        };

        let previous = view.selected_player().map(str::to_string);
        view.players = dashboard.players();
        view.player_idx = previous.and_then(|p| view.players.iter().position(|n| *n == p));
        if view.player_idx.is_none() {
            view.tournament_idx = 0;
        }

        let players = &view.players;
        view.comparison_selected.retain(|p| players.contains(p));
        if first_load && view.comparison_selected.is_empty() {
            if let Some(first) = view.players.first() {
                view.comparison_selected.insert(first.clone());
            }
        }
        view.comparison_cursor = view
            .comparison_cursor
            .min(view.players.len().saturating_sub(1));

        view.all_tournaments = dashboard.tournaments(None);
        let tournaments = &view.all_tournaments;
        view.trend_tournaments.retain(|t| tournaments.contains(t));
        view.tournament_cursor = view
            .tournament_cursor
            .min(view.all_tournaments.len().saturating_sub(1));
    }

    /// Recompute every report from the current selections.
    pub fn recompute(&self, view: &mut ViewState) {
        let Some(dashboard) = self.dashboard.as_ref() else {
            return;
        };

        // Player tab
        match view.selected_player().map(str::to_string) {
            Some(player) => {
                view.player_tournaments = dashboard.tournaments(Some(&player));
                if view.tournament_idx > view.player_tournaments.len() {
                    view.tournament_idx = 0;
                }
                let tournament = view.selected_tournament().map(str::to_string);
                view.player_report = Some(dashboard.player_report(&player, tournament.as_deref()));
            }
            None => {
                view.player_tournaments.clear();
                view.tournament_idx = 0;
                view.player_report = None;
            }
        }

        // Comparison tab
        let chosen: Vec<String> = view.comparison_selected.iter().cloned().collect();
        view.comparison = dashboard.comparison(&chosen);

        // Trends tab
        let query = TrendQuery {
            team_query: view.team_query.clone(),
            tournaments: view.trend_tournaments.iter().cloned().collect(),
            key: view.requested_trend_key(),
            chart_points: view.chart_points,
        };
        view.trends = dashboard.team_trends(&query);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
