// Trend/comparison engine: joins a team's batting and bowling aggregates on
// a shared key (opponent or match) within each tournament.
//
// The join is an outer join: a group present on only one side still gets a
// row, with the other side's fields left undefined. `nrr_proxy` is only
// defined when both sides are, and is never computed against a zero.

use std::collections::BTreeMap;

use tracing::debug;

use crate::ingest::{
    label_or_unknown, BattingInnings, BowlingInnings, Capabilities, OptionalColumn,
};
use crate::metrics::{cmp_rate_desc, is_dismissal, ratio, round1, round2, Rate};
use crate::tournament::TournamentLabels;

const BALLS_PER_OVER: f64 = 6.0;

// ---------------------------------------------------------------------------
// Grouping key
// ---------------------------------------------------------------------------

/// What the trend rows are keyed on (within a tournament).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendKey {
    Opponent,
    Match,
}

impl TrendKey {
    /// The key actually usable for these tables. Opponent grouping needs the
    /// opponent column on both sides; otherwise fall back to match identity.
    pub fn resolve(requested: TrendKey, batting: &Capabilities, bowling: &Capabilities) -> TrendKey {
        match requested {
            TrendKey::Opponent
                if batting.has(OptionalColumn::Opponent) && bowling.has(OptionalColumn::Opponent) =>
            {
                TrendKey::Opponent
            }
            TrendKey::Opponent => {
                debug!("opponent column missing, grouping trends by match instead");
                TrendKey::Match
            }
            TrendKey::Match => TrendKey::Match,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendKey::Opponent => "Opponent",
            TrendKey::Match => "Match",
        }
    }

    fn batting_value(&self, row: &BattingInnings) -> String {
        match self {
            TrendKey::Opponent => label_or_unknown(&row.opponent),
            TrendKey::Match => label_or_unknown(&row.match_id),
        }
    }

    fn bowling_value(&self, row: &BowlingInnings) -> String {
        match self {
            TrendKey::Opponent => label_or_unknown(&row.opponent),
            TrendKey::Match => label_or_unknown(&row.match_id),
        }
    }
}

// ---------------------------------------------------------------------------
// Result heuristic
// ---------------------------------------------------------------------------

/// Heuristic outcome for a trend row.
///
/// The exports carry no match result. A row counts as `Won` only when both
/// rates are known and the side scored faster than it conceded; anything
/// else, including a missing side, is `Lost`. This is an approximation, not
/// the real result of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Won,
    Lost,
}

impl MatchResult {
    pub fn from_rates(run_rate: Rate, opposition_rate: Rate) -> Self {
        match (run_rate, opposition_rate) {
            (Some(ours), Some(theirs)) if ours > theirs => MatchResult::Won,
            _ => MatchResult::Lost,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::Won => "Won",
            MatchResult::Lost => "Lost",
        }
    }
}

// ---------------------------------------------------------------------------
// Trend rows
// ---------------------------------------------------------------------------

/// One combined batting/bowling row for a (tournament, key) group.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub tournament_key: String,
    /// Display label for `tournament_key`.
    pub tournament: String,
    /// Opponent name or match id; `(Unknown)` when blank.
    pub key: String,
    // Batting side (None when the group has no batting rows).
    pub runs_scored: Option<f64>,
    pub balls_faced: Option<f64>,
    pub wickets_lost: Option<usize>,
    /// Runs per 6-ball over, 2 dp.
    pub run_rate: Rate,
    // Bowling side (None when the group has no bowling rows).
    pub runs_conceded: Option<f64>,
    pub balls_bowled: Option<u64>,
    pub wickets_taken: Option<f64>,
    /// Balls bowled as decimal overs, 1 dp.
    pub overs_bowled: Option<f64>,
    /// Runs conceded per over, 2 dp.
    pub economy: Rate,
    /// `run_rate - economy`, 2 dp, only when both are defined.
    pub nrr_proxy: Rate,
    pub result: MatchResult,
}

#[derive(Debug, Default)]
struct BattingSide {
    runs: f64,
    balls: f64,
    wickets_lost: usize,
}

#[derive(Debug, Default)]
struct BowlingSide {
    runs: f64,
    balls: u64,
    wickets: f64,
}

#[derive(Debug, Default)]
struct Joined {
    batting: Option<BattingSide>,
    bowling: Option<BowlingSide>,
}

/// Build the combined trend table, ordered by tournament label then key.
pub fn build_trend(
    batting: &[&BattingInnings],
    bowling: &[&BowlingInnings],
    key: TrendKey,
    labels: &TournamentLabels,
) -> Vec<TrendRow> {
    let mut groups: BTreeMap<(String, String), Joined> = BTreeMap::new();

    for row in batting {
        let entry = groups
            .entry((row.tournament_key.clone(), key.batting_value(row)))
            .or_default();
        let side = entry.batting.get_or_insert_with(BattingSide::default);
        side.runs += row.runs.unwrap_or(0.0);
        side.balls += row.balls.unwrap_or(0.0);
        if is_dismissal(row.how_out.as_deref()) {
            side.wickets_lost += 1;
        }
    }

    for row in bowling {
        let entry = groups
            .entry((row.tournament_key.clone(), key.bowling_value(row)))
            .or_default();
        let side = entry.bowling.get_or_insert_with(BowlingSide::default);
        side.runs += row.runs_conceded.unwrap_or(0.0);
        side.balls += u64::from(row.balls_bowled);
        side.wickets += row.wickets.unwrap_or(0.0);
    }

    let mut rows: Vec<TrendRow> = groups
        .into_iter()
        .map(|((tournament_key, group), joined)| {
            combine(labels.label(&tournament_key).to_string(), tournament_key, group, joined)
        })
        .collect();
    rows.sort_by(|a, b| a.tournament.cmp(&b.tournament).then_with(|| a.key.cmp(&b.key)));

    debug!(
        "trend: {} batting rows, {} bowling rows -> {} groups by {}",
        batting.len(),
        bowling.len(),
        rows.len(),
        key.label()
    );
    rows
}

fn combine(tournament: String, tournament_key: String, key: String, joined: Joined) -> TrendRow {
    let run_rate = joined
        .batting
        .as_ref()
        .and_then(|b| ratio(b.runs * BALLS_PER_OVER, b.balls));
    let economy = joined
        .bowling
        .as_ref()
        .and_then(|w| ratio(w.runs * BALLS_PER_OVER, w.balls as f64));
    let nrr_proxy = match (run_rate, economy) {
        (Some(rr), Some(econ)) => Some(rr - econ),
        _ => None,
    };
    // What the opposition scored against this side is exactly the economy.
    let result = MatchResult::from_rates(run_rate, economy);

    TrendRow {
        tournament_key,
        tournament,
        key,
        runs_scored: joined.batting.as_ref().map(|b| b.runs),
        balls_faced: joined.batting.as_ref().map(|b| b.balls),
        wickets_lost: joined.batting.as_ref().map(|b| b.wickets_lost),
        run_rate: run_rate.map(round2),
        runs_conceded: joined.bowling.as_ref().map(|w| w.runs),
        balls_bowled: joined.bowling.as_ref().map(|w| w.balls),
        wickets_taken: joined.bowling.as_ref().map(|w| w.wickets),
        overs_bowled: joined
            .bowling
            .as_ref()
            .map(|w| round1(w.balls as f64 / BALLS_PER_OVER)),
        economy: economy.map(round2),
        nrr_proxy: nrr_proxy.map(round2),
        result,
    }
}

/// Best-to-worst ordering: `nrr_proxy` descending, ties on runs scored
/// descending; undefined values last.
pub fn rank_best_to_worst(rows: &[TrendRow]) -> Vec<TrendRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| {
        cmp_rate_desc(a.nrr_proxy, b.nrr_proxy)
            .then_with(|| cmp_rate_desc(a.runs_scored, b.runs_scored))
            .then_with(|| a.tournament.cmp(&b.tournament))
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// One plotted line: `(x, y)` points where x is the row's position in chart
/// order. Rows with an undefined value are skipped, not drawn as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl TrendSeries {
    fn from_rows(name: &'static str, rows: &[TrendRow], value: impl Fn(&TrendRow) -> Option<f64>) -> Self {
        TrendSeries {
            name,
            points: rows
                .iter()
                .enumerate()
                .filter_map(|(i, r)| value(r).map(|v| (i as f64, v)))
                .collect(),
        }
    }

    /// Largest y value, or 0 for an empty series.
    pub fn max_y(&self) -> f64 {
        self.points.iter().map(|(_, y)| *y).fold(0.0, f64::max)
    }
}

/// The two line charts of the team trends view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendCharts {
    /// Axis label per x position: "<tournament> <key>".
    pub x_labels: Vec<String>,
    /// Runs scored, wickets lost, run rate.
    pub batting: Vec<TrendSeries>,
    /// Runs conceded, wickets taken, economy.
    pub bowling: Vec<TrendSeries>,
}

impl TrendCharts {
    /// Build chart series from rows in chart order, keeping at most
    /// `max_points` rows.
    pub fn from_rows(rows: &[TrendRow], max_points: usize) -> Self {
        let rows = &rows[..rows.len().min(max_points)];
        TrendCharts {
            x_labels: rows
                .iter()
                .map(|r| format!("{} {}", r.tournament, r.key))
                .collect(),
            batting: vec![
                TrendSeries::from_rows("runs scored", rows, |r| r.runs_scored),
                TrendSeries::from_rows("wickets lost", rows, |r| r.wickets_lost.map(|w| w as f64)),
                TrendSeries::from_rows("run rate", rows, |r| r.run_rate),
            ],
            bowling: vec![
                TrendSeries::from_rows("runs conceded", rows, |r| r.runs_conceded),
                TrendSeries::from_rows("wickets taken", rows, |r| r.wickets_taken),
                TrendSeries::from_rows("economy", rows, |r| r.economy),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
