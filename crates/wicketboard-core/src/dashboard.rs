// Query surface for the presentation layer.
//
// A `Dashboard` wraps one loaded scorebook and answers the questions the
// three views ask. Every answer is plain data (summaries, grouped tables,
// trend rows and chart series) that can be rendered without touching the
// engine again. Empty selections produce empty reports, never errors.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::filter::InningsFilter;
use crate::ingest::{normalize_name, BattingInnings, BowlingInnings, Capabilities};
use crate::metrics::{
    batting_leaderboard, bowling_leaderboard, group_batting, group_bowling, match_wise_batting,
    match_wise_bowling, BattingGroup, BattingSummary, BowlingGroup, BowlingSummary, GroupKey,
};
use crate::source::Scorebook;
use crate::tournament::TournamentLabels;
use crate::trend::{build_trend, rank_best_to_worst, TrendCharts, TrendKey, TrendRow};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Everything the player view shows for one player.
#[derive(Debug, Clone, Default)]
pub struct PlayerReport {
    pub player: String,
    /// The tournament restriction, if any.
    pub tournament: Option<String>,
    pub batting: BattingSummary,
    /// Filtered batting rows in match-wise order.
    pub batting_innings: Vec<BattingInnings>,
    pub bowling: BowlingSummary,
    /// Filtered bowling rows in match-wise order.
    pub bowling_spells: Vec<BowlingInnings>,
    /// Optional columns available for the batting match-wise table.
    pub batting_capabilities: Capabilities,
    pub bowling_capabilities: Capabilities,
}

impl PlayerReport {
    pub fn has_batting(&self) -> bool {
        !self.batting.is_empty()
    }

    pub fn has_bowling(&self) -> bool {
        !self.bowling.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_batting() && !self.has_bowling()
    }
}

/// Side-by-side tables for a chosen set of players.
#[derive(Debug, Clone, Default)]
pub struct ComparisonReport {
    pub players: Vec<String>,
    pub batting: Vec<BattingGroup>,
    pub bowling: Vec<BowlingGroup>,
}

impl ComparisonReport {
    pub fn is_empty(&self) -> bool {
        self.batting.is_empty() && self.bowling.is_empty()
    }
}

/// Parameters of the team trends view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    /// Case-insensitive substring of the team name; blank means every team.
    pub team_query: String,
    /// Tournament keys to include; empty means all.
    pub tournaments: Vec<String>,
    pub key: TrendKey,
    /// Most rows plotted per chart.
    pub chart_points: usize,
}

impl Default for TrendQuery {
    fn default() -> Self {
        TrendQuery {
            team_query: String::new(),
            tournaments: Vec::new(),
            key: TrendKey::Opponent,
            chart_points: 40,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrendReport {
    /// The grouping actually used after the capability check.
    pub key: Option<TrendKey>,
    /// Rows in chart order (tournament label, then key).
    pub rows: Vec<TrendRow>,
    /// The same rows, best to worst.
    pub ranked: Vec<TrendRow>,
    pub charts: TrendCharts,
}

impl TrendReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when opponent grouping was asked for but could not be honoured.
    pub fn fell_back(&self, requested: TrendKey) -> bool {
        self.key.is_some_and(|k| k != requested)
    }
}

/// Batting and bowling summaries for an arbitrary filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summaries {
    pub batting: BattingSummary,
    pub bowling: BowlingSummary,
}

/// Grouped tables for an arbitrary filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedTables {
    pub batting: Vec<BattingGroup>,
    pub bowling: Vec<BowlingGroup>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    book: Arc<Scorebook>,
    labels: TournamentLabels,
}

impl Dashboard {
    pub fn new(book: Arc<Scorebook>, labels: TournamentLabels) -> Self {
        Dashboard { book, labels }
    }

    pub fn scorebook(&self) -> &Scorebook {
        &self.book
    }

    pub fn labels(&self) -> &TournamentLabels {
        &self.labels
    }

    pub fn tournament_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.label(key)
    }

    /// Every batter and bowler, sorted, without duplicates.
    pub fn players(&self) -> Vec<String> {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        names.extend(self.book.batting.rows.iter().map(|r| r.player.as_str()));
        names.extend(self.book.bowling.rows.iter().map(|r| r.player.as_str()));
        names
            .into_iter()
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Tournament keys present in either table, optionally only those a
    /// given player appears in.
    pub fn tournaments(&self, player: Option<&str>) -> Vec<String> {
        let filter = match player {
            Some(p) => InningsFilter::new().player(p),
            None => InningsFilter::new(),
        };
        let mut keys: BTreeSet<&str> = BTreeSet::new();
        keys.extend(
            filter
                .apply(&self.book.batting.rows)
                .into_iter()
                .map(|r| r.tournament_key.as_str()),
        );
        keys.extend(
            filter
                .apply(&self.book.bowling.rows)
                .into_iter()
                .map(|r| r.tournament_key.as_str()),
        );
        keys.into_iter()
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Summaries and match-wise rows for one player, optionally within one
    /// tournament.
    pub fn player_report(&self, player: &str, tournament: Option<&str>) -> PlayerReport {
        let mut filter = InningsFilter::new().player(player);
        if let Some(key) = tournament {
            filter = filter.tournaments([key]);
        }
        let batting = filter.apply(&self.book.batting.rows);
        let bowling = filter.apply(&self.book.bowling.rows);

        PlayerReport {
            player: normalize_name(player),
            tournament: tournament.map(str::to_string),
            batting: BattingSummary::from_rows(batting.iter().copied()),
            batting_innings: match_wise_batting(&batting, &self.book.batting.capabilities)
                .into_iter()
                .cloned()
                .collect(),
            bowling: BowlingSummary::from_rows(bowling.iter().copied()),
            bowling_spells: match_wise_bowling(&bowling).into_iter().cloned().collect(),
            batting_capabilities: self.book.batting.capabilities.clone(),
            bowling_capabilities: self.book.bowling.capabilities.clone(),
        }
    }

    /// Leaderboards restricted to the chosen players. No players chosen
    /// gives an empty report.
    pub fn comparison(&self, players: &[String]) -> ComparisonReport {
        let chosen: BTreeSet<String> = players.iter().map(|p| normalize_name(p)).collect();
        if chosen.is_empty() {
            return ComparisonReport::default();
        }
        let batting = self
            .book
            .batting
            .rows
            .iter()
            .filter(|r| chosen.contains(&r.player));
        let bowling = self
            .book
            .bowling
            .rows
            .iter()
            .filter(|r| chosen.contains(&r.player));

        ComparisonReport {
            players: chosen.iter().cloned().collect(),
            batting: batting_leaderboard(batting),
            bowling: bowling_leaderboard(bowling),
        }
    }

    /// Combined batting/bowling trend for every team matching the query.
    pub fn team_trends(&self, query: &TrendQuery) -> TrendReport {
        let filter = InningsFilter::new()
            .team_contains(&query.team_query)
            .tournaments(query.tournaments.iter().cloned());
        let batting = filter.apply(&self.book.batting.rows);
        let bowling = filter.apply(&self.book.bowling.rows);

        let key = TrendKey::resolve(
            query.key,
            &self.book.batting.capabilities,
            &self.book.bowling.capabilities,
        );
        let rows = build_trend(&batting, &bowling, key, &self.labels);
        let ranked = rank_best_to_worst(&rows);
        let charts = TrendCharts::from_rows(&rows, query.chart_points);

        TrendReport {
            key: Some(key),
            rows,
            ranked,
            charts,
        }
    }

    /// Scalar summaries of both tables under `filter`.
    pub fn summarize(&self, filter: &InningsFilter) -> Summaries {
        Summaries {
            batting: BattingSummary::from_rows(filter.apply(&self.book.batting.rows)),
            bowling: BowlingSummary::from_rows(filter.apply(&self.book.bowling.rows)),
        }
    }

    /// Grouped tables of both tables under `filter`.
    pub fn grouped(&self, filter: &InningsFilter, keys: &[GroupKey]) -> GroupedTables {
        GroupedTables {
            batting: group_batting(filter.apply(&self.book.batting.rows), keys),
            bowling: group_bowling(filter.apply(&self.book.bowling.rows), keys),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{parse_batting, parse_bowling};
    use crate::metrics::KeyPart;
    use crate::trend::MatchResult;

    const EPS: f64 = 1e-9;

    const BAT: &str = "\
playername,tournamentkey,matchid,inningsno,battingteam,opponent,batpos,runs,balls,sr,fours,sixes,howout
Rahul Mehta,zooterisdt8,m1,1,Supremos,Titans,1,45,30,150,5,1,c Smith b Jones
Rahul Mehta,zooterisdt8,m2,1,Supremos,Kings,2,15,10,150,2,0,bowled
Rahul Mehta,clt20s_pdf,m7,2,Supremos XI,Titans,1,50,40,125,6,0,not out
Arjun Rao,zooterisdt8,m1,1,Supremos,Titans,3,30,30,100,2,1,lbw
Dev Shah,zooterisdt8,m1,1,Titans,Supremos,1,60,40,150,6,2,run out";

    const BOWL: &str = "\
bowlername,tournamentkey,matchid,inningsno,bowlingteam,opponent,overs,runsconceded,wickets,econ
Arjun Rao,zooterisdt8,m1,2,Supremos,Titans,4,28,2,7
Karan Iyer,zooterisdt8,m1,2,Supremos,Titans,3.3,30,1,8.57
Karan Iyer,zooterisdt8,m2,2,Supremos,Kings,4,20,3,5
Dev Shah,zooterisdt8,m1,1,Titans,Supremos,4,40,1,10";

    fn dashboard() -> Dashboard {
        let book = Scorebook::new(
            parse_batting(BAT, "bat").unwrap(),
            parse_bowling(BOWL, "bowl").unwrap(),
        );
        Dashboard::new(Arc::new(book), TournamentLabels::builtin())
    }

    fn headerless_opponent_dashboard() -> Dashboard {
        let bat = "playername,tournamentkey,matchid,battingteam,runs,balls,howout\n\
                   a,t,m1,Supremos,20,10,bowled\n";
        let bowl = "bowlername,tournamentkey,matchid,bowlingteam,overs,runsconceded,wickets\n\
                    b,t,m1,Supremos,2,10,1\n";
        let book = Scorebook::new(
            parse_batting(bat, "bat").unwrap(),
            parse_bowling(bowl, "bowl").unwrap(),
        );
        Dashboard::new(Arc::new(book), TournamentLabels::builtin())
    }

    // -- Selectors --

    #[test]
    fn players_are_sorted_union() {
        let d = dashboard();
        assert_eq!(
            d.players(),
            vec!["arjun rao", "dev shah", "karan iyer", "rahul mehta"]
        );
    }

    #[test]
    fn tournaments_for_player() {
        let d = dashboard();
        assert_eq!(d.tournaments(None), vec!["clt20s_pdf", "zooterisdt8"]);
        assert_eq!(d.tournaments(Some("Karan Iyer")), vec!["zooterisdt8"]);
        assert!(d.tournaments(Some("nobody")).is_empty());
        assert_eq!(d.tournament_label("clt20s_pdf"), "JFSC CLT20");
    }

    // -- Player report --

    #[test]
    fn player_report_across_tournaments() {
        let d = dashboard();
        let report = d.player_report("rahul mehta", None);
        assert!(report.has_batting());
        assert!(!report.has_bowling());
        assert_eq!(report.batting.innings, 3);
        assert!((report.batting.runs - 110.0).abs() < EPS);
        assert_eq!(report.batting.dismissals, 2);
        assert!((report.batting.average.unwrap() - 55.0).abs() < EPS);
        assert!((report.batting.strike_rate.unwrap() - 137.5).abs() < EPS);
        // match-wise: clt20s_pdf first, then zooterisdt8 Kings before Titans
        let ids: Vec<&str> = report
            .batting_innings
            .iter()
            .map(|r| r.match_id.as_str())
            .collect();
        assert_eq!(ids, vec!["m7", "m2", "m1"]);
    }

    #[test]
    fn player_report_within_tournament() {
        let d = dashboard();
        let report = d.player_report("Rahul Mehta", Some("clt20s_pdf"));
        assert_eq!(report.tournament.as_deref(), Some("clt20s_pdf"));
        assert_eq!(report.batting.innings, 1);
        assert_eq!(report.batting.average, None);
        assert!((report.batting.strike_rate.unwrap() - 125.0).abs() < EPS);
    }

    #[test]
    fn bowler_report() {
        let d = dashboard();
        let report = d.player_report("karan iyer", None);
        assert!(!report.has_batting());
        assert_eq!(report.bowling.spells, 2);
        assert_eq!(report.bowling.balls_bowled, 45);
        assert!((report.bowling.economy.unwrap() - 6.67).abs() < EPS);
        assert_eq!(report.bowling_spells.len(), 2);
    }

    #[test]
    fn unknown_player_is_empty_report() {
        let d = dashboard();
        let report = d.player_report("nobody", None);
        assert!(report.is_empty());
        assert!(report.batting_innings.is_empty());
        assert_eq!(report.batting.strike_rate, None);
        assert_eq!(report.bowling.economy, None);
    }

    // -- Comparison --

    #[test]
    fn comparison_of_chosen_players() {
        let d = dashboard();
        let report = d.comparison(&["Rahul Mehta".to_string(), "arjun rao".to_string()]);
        assert_eq!(report.players, vec!["arjun rao", "rahul mehta"]);
        let batters: Vec<String> = report.batting.iter().map(BattingGroup::label).collect();
        assert_eq!(batters, vec!["rahul mehta", "arjun rao"]);
        assert_eq!(report.bowling.len(), 1);
        assert_eq!(report.bowling[0].key, vec![KeyPart::Text("arjun rao".into())]);
    }

    #[test]
    fn comparison_with_nobody_is_empty() {
        let d = dashboard();
        assert!(d.comparison(&[]).is_empty());
        assert!(d.comparison(&["ghost".to_string()]).is_empty());
    }

    // -- Team trends --

    #[test]
    fn team_trends_by_opponent() {
        let d = dashboard();
        let report = d.team_trends(&TrendQuery {
            team_query: "supremos".into(),
            ..TrendQuery::default()
        });
        assert_eq!(report.key, Some(TrendKey::Opponent));
        assert!(!report.fell_back(TrendKey::Opponent));

        // "Supremos XI" also matches the substring
        let keys: Vec<(&str, &str)> = report
            .rows
            .iter()
            .map(|r| (r.tournament.as_str(), r.key.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("JFSC CLT20", "Titans"),
                ("Zooter ISDT", "Kings"),
                ("Zooter ISDT", "Titans"),
            ]
        );

        let titans = &report.rows[2];
        // 75 runs off 60 balls, 58 conceded off 45 balls
        assert!((titans.run_rate.unwrap() - 7.5).abs() < EPS);
        assert!((titans.economy.unwrap() - 7.73).abs() < EPS);
        assert!((titans.nrr_proxy.unwrap() + 0.23).abs() < EPS);
        assert_eq!(titans.result, MatchResult::Lost);

        let kings = &report.rows[1];
        assert!((kings.run_rate.unwrap() - 9.0).abs() < EPS);
        assert!((kings.economy.unwrap() - 5.0).abs() < EPS);
        assert_eq!(kings.result, MatchResult::Won);
        assert_eq!(report.ranked[0].key, "Kings");
    }

    #[test]
    fn team_trends_restricted_to_tournament() {
        let d = dashboard();
        let report = d.team_trends(&TrendQuery {
            team_query: "SUPREMOS".into(),
            tournaments: vec!["clt20s_pdf".into()],
            key: TrendKey::Match,
            chart_points: 40,
        });
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].key, "m7");
        assert_eq!(report.rows[0].runs_conceded, None);
        assert_eq!(report.charts.x_labels, vec!["JFSC CLT20 m7"]);
    }

    #[test]
    fn team_trends_fall_back_without_opponent_column() {
        let d = headerless_opponent_dashboard();
        let report = d.team_trends(&TrendQuery::default());
        assert_eq!(report.key, Some(TrendKey::Match));
        assert!(report.fell_back(TrendKey::Opponent));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].key, "m1");
    }

    #[test]
    fn team_trends_no_matching_team() {
        let d = dashboard();
        let report = d.team_trends(&TrendQuery {
            team_query: "nobody".into(),
            ..TrendQuery::default()
        });
        assert!(report.is_empty());
        assert!(report.ranked.is_empty());
        assert!(report.charts.is_empty());
    }

    // -- Arbitrary filters --

    #[test]
    fn summarize_and_group_under_filter() {
        let d = dashboard();
        let filter = InningsFilter::new().match_id("m1");
        let s = d.summarize(&filter);
        assert_eq!(s.batting.innings, 3);
        assert!((s.batting.runs - 135.0).abs() < EPS);
        assert_eq!(s.bowling.spells, 3);

        let g = d.grouped(&filter, &[GroupKey::Opponent]);
        let labels: Vec<String> = g.batting.iter().map(BattingGroup::label).collect();
        assert_eq!(labels, vec!["Supremos", "Titans"]);
        let sum: f64 = g.batting.iter().map(|b| b.summary.runs).sum();
        assert!((sum - s.batting.runs).abs() < EPS);
    }
}
