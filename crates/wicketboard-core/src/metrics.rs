// Metrics engine: scalar summaries, grouped aggregates and leaderboards.
//
// Sums skip missing cells (a missing cell contributes nothing, an all-missing
// column sums to 0). Every ratio is `None` when its denominator is zero, and
// rate outputs are rounded for display: 2 dp for averages, strike rates and
// economy; 1 dp for bowling strike rate and overs.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::ingest::{BattingInnings, BowlingInnings, Capabilities, OptionalColumn};

/// A derived rate; `None` when undefined (zero denominator).
pub type Rate = Option<f64>;

/// Rendered in place of an undefined rate.
pub const PLACEHOLDER: &str = "--";

const BALLS_PER_OVER: f64 = 6.0;

// ---------------------------------------------------------------------------
// Rounding and formatting
// ---------------------------------------------------------------------------

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Format a rate with fixed precision, or the placeholder when undefined.
pub fn format_rate(rate: Rate, decimals: usize) -> String {
    match rate {
        Some(v) => format!("{:.*}", decimals, v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a counting stat (runs, balls, wickets) as a whole number.
pub fn format_count(value: f64) -> String {
    format!("{:.0}", value)
}

/// `numerator / denominator`, undefined when the denominator is not positive.
pub fn ratio(numerator: f64, denominator: f64) -> Rate {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

fn sum_present<I: Iterator<Item = Option<f64>>>(values: I) -> f64 {
    values.flatten().sum()
}

/// Whether a dismissal description ends the innings. Blank, missing and
/// "not out" (any case) are all not-out.
pub fn is_dismissal(how_out: Option<&str>) -> bool {
    match how_out.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase() != "not out",
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Scalar summaries
// ---------------------------------------------------------------------------

/// Batting totals and rates over a set of innings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BattingSummary {
    pub innings: usize,
    pub runs: f64,
    pub balls: f64,
    pub fours: f64,
    pub sixes: f64,
    pub dismissals: usize,
    /// Runs per dismissal; undefined with no dismissals.
    pub average: Rate,
    /// Runs per 100 balls; undefined with no balls faced.
    pub strike_rate: Rate,
}

impl BattingSummary {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a BattingInnings>,
    {
        let rows: Vec<&BattingInnings> = rows.into_iter().collect();
        let runs = sum_present(rows.iter().map(|r| r.runs));
        let balls = sum_present(rows.iter().map(|r| r.balls));
        let dismissals = rows
            .iter()
            .filter(|r| is_dismissal(r.how_out.as_deref()))
            .count();

        BattingSummary {
            innings: rows.len(),
            runs,
            balls,
            fours: sum_present(rows.iter().map(|r| r.fours)),
            sixes: sum_present(rows.iter().map(|r| r.sixes)),
            dismissals,
            average: ratio(runs, dismissals as f64).map(round2),
            strike_rate: ratio(runs * 100.0, balls).map(round2),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.innings == 0
    }
}

/// Bowling totals and rates over a set of spells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BowlingSummary {
    pub spells: usize,
    pub balls_bowled: u64,
    /// Balls expressed as decimal overs (balls / 6), 1 dp.
    pub overs: f64,
    pub runs_conceded: f64,
    pub wickets: f64,
    /// Runs per over; undefined with no balls bowled.
    pub economy: Rate,
    /// Runs per wicket; undefined with no wickets.
    pub average: Rate,
    /// Balls per wicket; undefined with no wickets.
    pub strike_rate: Rate,
}

impl BowlingSummary {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a BowlingInnings>,
    {
        let rows: Vec<&BowlingInnings> = rows.into_iter().collect();
        // Widen before summing: a saturated overs cell is close to u32::MAX.
        let balls_bowled: u64 = rows.iter().map(|r| u64::from(r.balls_bowled)).sum();
        let balls = balls_bowled as f64;
        let runs_conceded = sum_present(rows.iter().map(|r| r.runs_conceded));
        let wickets = sum_present(rows.iter().map(|r| r.wickets));

        BowlingSummary {
            spells: rows.len(),
            balls_bowled,
            overs: round1(balls / BALLS_PER_OVER),
            runs_conceded,
            wickets,
            economy: ratio(runs_conceded * BALLS_PER_OVER, balls).map(round2),
            average: ratio(runs_conceded, wickets).map(round2),
            strike_rate: ratio(balls, wickets).map(round1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spells == 0
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// A column rows can be grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Player,
    Tournament,
    Opponent,
    Innings,
    Match,
}

impl GroupKey {
    /// Column header for display.
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Player => "Player",
            GroupKey::Tournament => "Tournament",
            GroupKey::Opponent => "Opponent",
            GroupKey::Innings => "Inns",
            GroupKey::Match => "Match",
        }
    }

    fn batting_part(&self, row: &BattingInnings) -> KeyPart {
        match self {
            GroupKey::Player => KeyPart::text(&row.player),
            GroupKey::Tournament => KeyPart::text(&row.tournament_key),
            GroupKey::Opponent => KeyPart::text(&row.opponent),
            GroupKey::Innings => KeyPart::number(row.innings_no),
            GroupKey::Match => KeyPart::text(&row.match_id),
        }
    }

    fn bowling_part(&self, row: &BowlingInnings) -> KeyPart {
        match self {
            GroupKey::Player => KeyPart::text(&row.player),
            GroupKey::Tournament => KeyPart::text(&row.tournament_key),
            GroupKey::Opponent => KeyPart::text(&row.opponent),
            GroupKey::Innings => KeyPart::number(row.innings_no),
            GroupKey::Match => KeyPart::text(&row.match_id),
        }
    }
}

/// One component of a group key. Numbers order numerically, and a missing
/// value orders before anything present.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyPart {
    Missing,
    Number(u32),
    Text(String),
}

impl KeyPart {
    fn text(s: &str) -> Self {
        if s.is_empty() {
            KeyPart::Missing
        } else {
            KeyPart::Text(s.to_string())
        }
    }

    fn number(n: Option<u32>) -> Self {
        n.map_or(KeyPart::Missing, KeyPart::Number)
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Missing => f.write_str(PLACEHOLDER),
            KeyPart::Number(n) => write!(f, "{n}"),
            KeyPart::Text(s) => f.write_str(s),
        }
    }
}

/// One output row of a grouped batting aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingGroup {
    /// One part per requested `GroupKey`, in request order.
    pub key: Vec<KeyPart>,
    pub summary: BattingSummary,
}

/// One output row of a grouped bowling aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct BowlingGroup {
    pub key: Vec<KeyPart>,
    pub summary: BowlingSummary,
}

impl BattingGroup {
    /// Key parts joined for display.
    pub fn label(&self) -> String {
        join_key(&self.key)
    }
}

impl BowlingGroup {
    pub fn label(&self) -> String {
        join_key(&self.key)
    }
}

fn join_key(key: &[KeyPart]) -> String {
    key.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Aggregate batting rows per distinct combination of `keys`, ordered by key.
/// Each group's rates come from that group's own sums.
pub fn group_batting<'a, I>(rows: I, keys: &[GroupKey]) -> Vec<BattingGroup>
where
    I: IntoIterator<Item = &'a BattingInnings>,
{
    let mut groups: BTreeMap<Vec<KeyPart>, Vec<&BattingInnings>> = BTreeMap::new();
    for row in rows {
        let key = keys.iter().map(|k| k.batting_part(row)).collect();
        groups.entry(key).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(key, members)| BattingGroup {
            key,
            summary: BattingSummary::from_rows(members),
        })
        .collect()
}

/// Aggregate bowling rows per distinct combination of `keys`, ordered by key.
pub fn group_bowling<'a, I>(rows: I, keys: &[GroupKey]) -> Vec<BowlingGroup>
where
    I: IntoIterator<Item = &'a BowlingInnings>,
{
    let mut groups: BTreeMap<Vec<KeyPart>, Vec<&BowlingInnings>> = BTreeMap::new();
    for row in rows {
        let key = keys.iter().map(|k| k.bowling_part(row)).collect();
        groups.entry(key).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(key, members)| BowlingGroup {
            key,
            summary: BowlingSummary::from_rows(members),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Leaderboards
// ---------------------------------------------------------------------------

/// Descending by value; undefined always last.
pub fn cmp_rate_desc(a: Rate, b: Rate) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending by value; undefined always last.
pub fn cmp_rate_asc(a: Rate, b: Rate) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Per-player batting table, most runs first, then higher strike rate.
pub fn batting_leaderboard<'a, I>(rows: I) -> Vec<BattingGroup>
where
    I: IntoIterator<Item = &'a BattingInnings>,
{
    let mut board = group_batting(rows, &[GroupKey::Player]);
    board.sort_by(|a, b| {
        b.summary
            .runs
            .total_cmp(&a.summary.runs)
            .then_with(|| cmp_rate_desc(a.summary.strike_rate, b.summary.strike_rate))
            .then_with(|| a.key.cmp(&b.key))
    });
    board
}

/// Per-player bowling table, most wickets first, then lower economy.
pub fn bowling_leaderboard<'a, I>(rows: I) -> Vec<BowlingGroup>
where
    I: IntoIterator<Item = &'a BowlingInnings>,
{
    let mut board = group_bowling(rows, &[GroupKey::Player]);
    board.sort_by(|a, b| {
        b.summary
            .wickets
            .total_cmp(&a.summary.wickets)
            .then_with(|| cmp_rate_asc(a.summary.economy, b.summary.economy))
            .then_with(|| a.key.cmp(&b.key))
    });
    board
}

// ---------------------------------------------------------------------------
// Match-wise detail
// ---------------------------------------------------------------------------

fn missing_last(value: Option<u32>) -> (bool, u32) {
    (value.is_none(), value.unwrap_or(0))
}

/// Innings ordered for the match-wise table: tournament, opponent, innings
/// number, batting position (only when the export has the column), match id.
pub fn match_wise_batting<'a>(
    rows: &[&'a BattingInnings],
    capabilities: &Capabilities,
) -> Vec<&'a BattingInnings> {
    let by_position = capabilities.has(OptionalColumn::BattingPosition);
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        a.tournament_key
            .cmp(&b.tournament_key)
            .then_with(|| a.opponent.cmp(&b.opponent))
            .then_with(|| missing_last(a.innings_no).cmp(&missing_last(b.innings_no)))
            .then_with(|| {
                if by_position {
                    missing_last(a.batting_position).cmp(&missing_last(b.batting_position))
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| a.match_id.cmp(&b.match_id))
    });
    out
}

/// Spells ordered for the match-wise table: tournament, opponent, innings
/// number, match id.
pub fn match_wise_bowling<'a>(rows: &[&'a BowlingInnings]) -> Vec<&'a BowlingInnings> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        a.tournament_key
            .cmp(&b.tournament_key)
            .then_with(|| a.opponent.cmp(&b.opponent))
            .then_with(|| missing_last(a.innings_no).cmp(&missing_last(b.innings_no)))
            .then_with(|| a.match_id.cmp(&b.match_id))
    });
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::UNKNOWN_OPPONENT;

    const EPS: f64 = 1e-9;

    fn bat(player: &str, runs: Option<f64>, balls: Option<f64>, how_out: Option<&str>) -> BattingInnings {
        BattingInnings {
            player: player.to_string(),
            tournament_key: "t1".to_string(),
            match_id: "m1".to_string(),
            innings_no: Some(1),
            batting_team: "Supremos".to_string(),
            opponent: UNKNOWN_OPPONENT.to_string(),
            batting_position: None,
            runs,
            balls,
            strike_rate: None,
            fours: Some(1.0),
            sixes: None,
            how_out: how_out.map(str::to_string),
            source: None,
        }
    }

    fn bowl(player: &str, overs: &str, runs: f64, wickets: f64) -> BowlingInnings {
        BowlingInnings {
            player: player.to_string(),
            tournament_key: "t1".to_string(),
            match_id: "m1".to_string(),
            innings_no: Some(1),
            bowling_team: "Supremos".to_string(),
            opponent: UNKNOWN_OPPONENT.to_string(),
            overs: overs.to_string(),
            balls_bowled: crate::ingest::overs_to_balls(overs),
            runs_conceded: Some(runs),
            wickets: Some(wickets),
            economy: None,
            source: None,
        }
    }

    // -- Formatting --

    #[test]
    fn rounding_helpers() {
        assert!((round2(7.456) - 7.46).abs() < EPS);
        assert!((round1(3.54) - 3.5).abs() < EPS);
        assert!((round1(3.56) - 3.6).abs() < EPS);
    }

    #[test]
    fn undefined_rate_renders_placeholder() {
        assert_eq!(format_rate(None, 2), PLACEHOLDER);
        assert_eq!(format_rate(Some(150.0), 2), "150.00");
        assert_eq!(format_rate(Some(4.26), 1), "4.3");
        assert_eq!(format_count(45.0), "45");
    }

    // -- Dismissals --

    #[test]
    fn dismissal_rules() {
        assert!(is_dismissal(Some("b Smith")));
        assert!(is_dismissal(Some("run out")));
        assert!(!is_dismissal(Some("not out")));
        assert!(!is_dismissal(Some("NOT OUT")));
        assert!(!is_dismissal(Some("  Not Out ")));
        assert!(!is_dismissal(Some("")));
        assert!(!is_dismissal(None));
    }

    #[test]
    fn dismissals_invariant_under_permutation_and_not_out_duplication() {
        let rows = vec![
            bat("a", Some(10.0), Some(8.0), Some("bowled")),
            bat("a", Some(30.0), Some(20.0), Some("not out")),
            bat("a", Some(5.0), Some(7.0), Some("lbw")),
        ];
        let base = BattingSummary::from_rows(&rows);

        let reversed: Vec<BattingInnings> = rows.iter().rev().cloned().collect();
        assert_eq!(BattingSummary::from_rows(&reversed).dismissals, base.dismissals);

        let mut duplicated = rows.clone();
        duplicated.push(rows[1].clone());
        let dup = BattingSummary::from_rows(&duplicated);
        assert_eq!(dup.dismissals, base.dismissals);
        assert_eq!(dup.innings, base.innings + 1);
    }

    // -- Batting summary --

    #[test]
    fn batting_summary_rates() {
        let rows = vec![
            bat("a", Some(45.0), Some(30.0), Some("c X b Y")),
            bat("a", Some(15.0), Some(10.0), Some("bowled")),
        ];
        let s = BattingSummary::from_rows(&rows);
        assert_eq!(s.innings, 2);
        assert!((s.runs - 60.0).abs() < EPS);
        assert!((s.balls - 40.0).abs() < EPS);
        assert!((s.fours - 2.0).abs() < EPS);
        assert!((s.sixes - 0.0).abs() < EPS);
        assert_eq!(s.dismissals, 2);
        assert!((s.average.unwrap() - 30.0).abs() < EPS);
        assert!((s.strike_rate.unwrap() - 150.0).abs() < EPS);
    }

    #[test]
    fn not_out_fifty_has_undefined_average() {
        let rows = vec![bat("a", Some(50.0), Some(40.0), Some("not out"))];
        let s = BattingSummary::from_rows(&rows);
        assert!((s.runs - 50.0).abs() < EPS);
        assert_eq!(s.dismissals, 0);
        assert_eq!(s.average, None);
        assert!((s.strike_rate.unwrap() - 125.0).abs() < EPS);
    }

    #[test]
    fn missing_values_are_skipped_in_sums() {
        let rows = vec![
            bat("a", None, None, Some("bowled")),
            bat("a", Some(12.0), None, None),
        ];
        let s = BattingSummary::from_rows(&rows);
        assert!((s.runs - 12.0).abs() < EPS);
        assert!((s.balls - 0.0).abs() < EPS);
        assert_eq!(s.strike_rate, None);
        assert!((s.average.unwrap() - 12.0).abs() < EPS);
    }

    #[test]
    fn empty_selection_summaries() {
        let none: Vec<BattingInnings> = Vec::new();
        let s = BattingSummary::from_rows(&none);
        assert!(s.is_empty());
        assert_eq!(s.innings, 0);
        assert!((s.runs - 0.0).abs() < EPS);
        assert_eq!(s.strike_rate, None);
        assert_eq!(s.average, None);

        let none: Vec<BowlingInnings> = Vec::new();
        let b = BowlingSummary::from_rows(&none);
        assert!(b.is_empty());
        assert_eq!(b.economy, None);
        assert_eq!(b.average, None);
        assert_eq!(b.strike_rate, None);
    }

    // -- Bowling summary --

    #[test]
    fn bowling_summary_rates() {
        let rows = vec![bowl("b", "3.3", 28.0, 2.0), bowl("b", "4", 30.0, 1.0)];
        let s = BowlingSummary::from_rows(&rows);
        assert_eq!(s.spells, 2);
        assert_eq!(s.balls_bowled, 45);
        assert!((s.overs - 7.5).abs() < EPS);
        assert!((s.runs_conceded - 58.0).abs() < EPS);
        assert!((s.wickets - 3.0).abs() < EPS);
        // 58 runs off 45 balls = 7.733.. per over
        assert!((s.economy.unwrap() - 7.73).abs() < EPS);
        assert!((s.average.unwrap() - 19.33).abs() < EPS);
        assert!((s.strike_rate.unwrap() - 15.0).abs() < EPS);
    }

    #[test]
    fn wicketless_bowling_has_undefined_average_and_strike_rate() {
        let rows = vec![bowl("b", "2", 20.0, 0.0)];
        let s = BowlingSummary::from_rows(&rows);
        assert!((s.economy.unwrap() - 10.0).abs() < EPS);
        assert_eq!(s.average, None);
        assert_eq!(s.strike_rate, None);
    }

    #[test]
    fn no_balls_bowled_means_undefined_economy() {
        let rows = vec![bowl("b", "bad", 12.0, 1.0)];
        let s = BowlingSummary::from_rows(&rows);
        assert_eq!(s.balls_bowled, 0);
        assert_eq!(s.economy, None);
        assert!((s.average.unwrap() - 12.0).abs() < EPS);
        assert!((s.strike_rate.unwrap() - 0.0).abs() < EPS);
    }

    #[test]
    fn saturated_overs_cells_sum_without_overflow() {
        let rows = vec![
            bowl("b", "999999999", 10.0, 1.0),
            bowl("b", "999999999", 10.0, 1.0),
        ];
        assert_eq!(rows[0].balls_bowled, u32::MAX);
        let s = BowlingSummary::from_rows(&rows);
        assert_eq!(s.balls_bowled, 2 * u64::from(u32::MAX));
        assert!(s.economy.is_some());
        assert!((s.strike_rate.unwrap() - u32::MAX as f64).abs() < 1.0);
    }

    // -- Grouping --

    #[test]
    fn grouped_runs_sum_to_total() {
        let mut rows = vec![
            bat("a", Some(10.0), Some(8.0), Some("bowled")),
            bat("b", Some(20.0), Some(15.0), None),
            bat("a", Some(33.0), Some(21.0), Some("caught")),
            bat("c", None, Some(3.0), Some("lbw")),
        ];
        rows[1].opponent = "Titans".to_string();
        rows[2].innings_no = Some(2);

        let total = BattingSummary::from_rows(&rows).runs;
        for keys in [
            vec![GroupKey::Player],
            vec![GroupKey::Tournament, GroupKey::Opponent, GroupKey::Innings],
            vec![GroupKey::Match],
        ] {
            let groups = group_batting(&rows, &keys);
            let sum: f64 = groups.iter().map(|g| g.summary.runs).sum();
            assert!((sum - total).abs() < EPS, "keys {:?}", keys);
        }
    }

    #[test]
    fn group_rates_come_from_group_sums() {
        let rows = vec![
            bat("a", Some(10.0), Some(10.0), Some("bowled")),
            bat("b", Some(30.0), Some(10.0), Some("bowled")),
        ];
        let groups = group_batting(&rows, &[GroupKey::Player]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, vec![KeyPart::Text("a".into())]);
        assert!((groups[0].summary.strike_rate.unwrap() - 100.0).abs() < EPS);
        assert!((groups[1].summary.strike_rate.unwrap() - 300.0).abs() < EPS);
    }

    #[test]
    fn innings_key_orders_numerically() {
        let mut rows = vec![
            bat("a", Some(1.0), Some(1.0), None),
            bat("a", Some(1.0), Some(1.0), None),
            bat("a", Some(1.0), Some(1.0), None),
        ];
        rows[0].innings_no = Some(10);
        rows[1].innings_no = Some(2);
        rows[2].innings_no = None;
        let groups = group_batting(&rows, &[GroupKey::Innings]);
        let keys: Vec<String> = groups.iter().map(BattingGroup::label).collect();
        assert_eq!(keys, vec![PLACEHOLDER, "2", "10"]);
    }

    #[test]
    fn grouping_empty_input_gives_no_groups() {
        let none: Vec<BowlingInnings> = Vec::new();
        assert!(group_bowling(&none, &[GroupKey::Player]).is_empty());
    }

    #[test]
    fn multi_key_label() {
        let mut row = bat("a", Some(1.0), Some(1.0), None);
        row.opponent = "Titans".into();
        let groups = group_batting([&row], &[GroupKey::Tournament, GroupKey::Opponent]);
        assert_eq!(groups[0].label(), "t1 / Titans");
    }

    // -- Leaderboards --

    #[test]
    fn batting_leaderboard_orders_by_runs_then_strike_rate() {
        let rows = vec![
            bat("slow", Some(50.0), Some(50.0), None),
            bat("fast", Some(50.0), Some(25.0), None),
            bat("top", Some(80.0), Some(90.0), None),
            bat("nodata", Some(50.0), None, None),
        ];
        let board = batting_leaderboard(&rows);
        let order: Vec<String> = board.iter().map(BattingGroup::label).collect();
        assert_eq!(order, vec!["top", "fast", "slow", "nodata"]);
    }

    #[test]
    fn bowling_leaderboard_orders_by_wickets_then_economy() {
        let rows = vec![
            bowl("costly", "4", 40.0, 2.0),
            bowl("tight", "4", 20.0, 2.0),
            bowl("star", "4", 35.0, 4.0),
            bowl("none", "0", 0.0, 2.0),
        ];
        let board = bowling_leaderboard(&rows);
        let order: Vec<String> = board.iter().map(BowlingGroup::label).collect();
        assert_eq!(order, vec!["star", "tight", "costly", "none"]);
    }

    #[test]
    fn rate_comparators_put_undefined_last() {
        let mut v = vec![None, Some(1.0), Some(3.0), None, Some(2.0)];
        v.sort_by(|a, b| cmp_rate_desc(*a, *b));
        assert_eq!(v, vec![Some(3.0), Some(2.0), Some(1.0), None, None]);
        v.sort_by(|a, b| cmp_rate_asc(*a, *b));
        assert_eq!(v, vec![Some(1.0), Some(2.0), Some(3.0), None, None]);
    }

    // -- Match-wise detail --

    #[test]
    fn match_wise_batting_order() {
        let mut rows = vec![
            bat("a", Some(1.0), Some(1.0), None),
            bat("a", Some(2.0), Some(1.0), None),
            bat("a", Some(3.0), Some(1.0), None),
            bat("a", Some(4.0), Some(1.0), None),
        ];
        rows[0].tournament_key = "t2".into();
        rows[1].opponent = "Kings".into();
        rows[1].batting_position = Some(5);
        rows[2].opponent = "Kings".into();
        rows[2].batting_position = Some(2);
        rows[2].match_id = "m9".into();
        rows[3].opponent = "Aces".into();

        let refs: Vec<&BattingInnings> = rows.iter().collect();
        let with_pos = match_wise_batting(&refs, &Capabilities::all());
        let runs: Vec<f64> = with_pos.iter().filter_map(|r| r.runs).collect();
        // Aces before Kings; within Kings position 2 before 5
        assert_eq!(runs, vec![4.0, 3.0, 2.0, 1.0]);

        let without_pos = match_wise_batting(&refs, &Capabilities::default());
        let runs: Vec<f64> = without_pos.iter().filter_map(|r| r.runs).collect();
        // falls through to match id: m1 before m9
        assert_eq!(runs, vec![4.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn match_wise_bowling_order() {
        let mut rows = vec![bowl("b", "1", 1.0, 0.0), bowl("b", "2", 2.0, 0.0)];
        rows[0].innings_no = Some(2);
        let refs: Vec<&BowlingInnings> = rows.iter().collect();
        let ordered = match_wise_bowling(&refs);
        assert_eq!(ordered[0].overs, "2");
        assert_eq!(ordered[1].overs, "1");
    }
}
