// Innings data loading and normalization.
//
// Reads the two scorecard exports (battinginnings / bowlinginnings). Every
// numeric cell is coerced leniently: anything that does not parse becomes
// `None` rather than zero, and rows are never rejected for bad numbers.
// Optional columns (batpos, opponent, source) are detected from the header
// record and recorded in a `Capabilities` descriptor.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Label used for a blank or absent opponent.
pub const UNKNOWN_OPPONENT: &str = "(Unknown)";

// ---------------------------------------------------------------------------
// Capability descriptor
// ---------------------------------------------------------------------------

/// Columns a source file may or may not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionalColumn {
    BattingPosition,
    Opponent,
    Source,
}

impl OptionalColumn {
    pub const ALL: [OptionalColumn; 3] = [
        OptionalColumn::BattingPosition,
        OptionalColumn::Opponent,
        OptionalColumn::Source,
    ];

    /// Header name in the CSV export.
    pub fn header(&self) -> &'static str {
        match self {
            OptionalColumn::BattingPosition => "batpos",
            OptionalColumn::Opponent => "opponent",
            OptionalColumn::Source => "source",
        }
    }
}

/// Which optional columns a loaded table actually has.
///
/// Features that depend on an optional column (batting-position ordering,
/// opponent grouping, source display) must check here first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    present: BTreeSet<OptionalColumn>,
}

impl Capabilities {
    /// Build from (already normalized) header names.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: BTreeSet<&str> = headers.into_iter().collect();
        let present = OptionalColumn::ALL
            .into_iter()
            .filter(|c| names.contains(c.header()))
            .collect();
        Capabilities { present }
    }

    /// Every optional column present.
    pub fn all() -> Self {
        Capabilities {
            present: OptionalColumn::ALL.into_iter().collect(),
        }
    }

    pub fn has(&self, column: OptionalColumn) -> bool {
        self.present.contains(&column)
    }
}

// ---------------------------------------------------------------------------
// Public row types
// ---------------------------------------------------------------------------

/// One player's batting innings in one match.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingInnings {
    /// Lower-cased player name.
    pub player: String,
    pub tournament_key: String,
    pub match_id: String,
    pub innings_no: Option<u32>,
    pub batting_team: String,
    /// Trimmed opponent, `(Unknown)` when blank or absent.
    pub opponent: String,
    pub batting_position: Option<u32>,
    pub runs: Option<f64>,
    pub balls: Option<f64>,
    /// Strike rate as exported for this single innings. Display only.
    pub strike_rate: Option<f64>,
    pub fours: Option<f64>,
    pub sixes: Option<f64>,
    pub how_out: Option<String>,
    pub source: Option<String>,
}

/// One bowler's spell in one match.
#[derive(Debug, Clone, PartialEq)]
pub struct BowlingInnings {
    /// Lower-cased bowler name.
    pub player: String,
    pub tournament_key: String,
    pub match_id: String,
    pub innings_no: Option<u32>,
    pub bowling_team: String,
    pub opponent: String,
    /// Overs as written in the export, e.g. "3.3".
    pub overs: String,
    /// Legal balls derived from `overs`.
    pub balls_bowled: u32,
    pub runs_conceded: Option<f64>,
    pub wickets: Option<f64>,
    /// Economy as exported for this single spell. Display only.
    pub economy: Option<f64>,
    pub source: Option<String>,
}

impl BattingInnings {
    /// Apply name and opponent normalization. Idempotent.
    pub fn normalized(mut self) -> Self {
        self.player = normalize_name(&self.player);
        self.opponent = normalize_opponent(Some(&self.opponent));
        self
    }
}

impl BowlingInnings {
    /// Apply name and opponent normalization and re-derive `balls_bowled`.
    /// Idempotent.
    pub fn normalized(mut self) -> Self {
        self.player = normalize_name(&self.player);
        self.opponent = normalize_opponent(Some(&self.opponent));
        self.balls_bowled = overs_to_balls(&self.overs);
        self
    }
}

/// A loaded batting export together with its optional-column descriptor.
#[derive(Debug, Clone, Default)]
pub struct BattingTable {
    pub rows: Vec<BattingInnings>,
    pub capabilities: Capabilities,
}

/// A loaded bowling export together with its optional-column descriptor.
#[derive(Debug, Clone, Default)]
pub struct BowlingTable {
    pub rows: Vec<BowlingInnings>,
    pub capabilities: Capabilities,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

/// Convert cricket "overs.balls" notation to a ball count.
///
/// The part after the dot is a ball count, not a decimal fraction:
/// "3.3" is 3 overs and 3 balls, i.e. 21. Either part that fails to parse
/// counts as 0, so "bad" and "" both give 0.
pub fn overs_to_balls(overs: &str) -> u32 {
    let overs = overs.trim();
    let (whole, balls) = match overs.split_once('.') {
        Some((w, b)) => (w, b),
        None => (overs, ""),
    };
    let whole: u32 = whole.trim().parse().unwrap_or(0);
    let balls: u32 = balls.trim().parse().unwrap_or(0);
    whole.saturating_mul(6).saturating_add(balls)
}

/// Trim and lower-case a player name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Trim an opponent label; blank or absent becomes `(Unknown)`.
pub fn normalize_opponent(opponent: Option<&str>) -> String {
    opponent.map_or_else(|| UNKNOWN_OPPONENT.to_string(), label_or_unknown)
}

/// Trim a grouping label (opponent or match id); blank becomes `(Unknown)`.
pub fn label_or_unknown(value: &str) -> String {
    match value.trim() {
        "" => UNKNOWN_OPPONENT.to_string(),
        s => s.to_string(),
    }
}

/// Keep only finite, non-negative numbers.
fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

fn whole_number(value: Option<f64>) -> Option<u32> {
    non_negative(value).map(|v| v.round() as u32)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Batting export row. Every column defaults so a missing column never fails
/// the row; numeric cells that do not parse become `None`.
#[derive(Debug, Deserialize)]
struct RawBattingRow {
    #[serde(default)]
    playername: String,
    #[serde(default)]
    tournamentkey: String,
    #[serde(default)]
    matchid: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    inningsno: Option<f64>,
    #[serde(default)]
    battingteam: String,
    #[serde(default)]
    opponent: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    batpos: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    runs: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    balls: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    sr: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    fours: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    sixes: Option<f64>,
    #[serde(default)]
    howout: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBowlingRow {
    #[serde(default)]
    bowlername: String,
    #[serde(default)]
    tournamentkey: String,
    #[serde(default)]
    matchid: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    inningsno: Option<f64>,
    #[serde(default)]
    bowlingteam: String,
    #[serde(default)]
    opponent: Option<String>,
    #[serde(default)]
    overs: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    runsconceded: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    wickets: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    econ: Option<f64>,
    #[serde(default)]
    source: Option<String>,
}

impl From<RawBattingRow> for BattingInnings {
    fn from(raw: RawBattingRow) -> Self {
        BattingInnings {
            player: raw.playername,
            tournament_key: raw.tournamentkey.trim().to_string(),
            match_id: raw.matchid.trim().to_string(),
            innings_no: whole_number(raw.inningsno),
            batting_team: raw.battingteam.trim().to_string(),
            opponent: raw.opponent.unwrap_or_default(),
            batting_position: whole_number(raw.batpos),
            runs: non_negative(raw.runs),
            balls: non_negative(raw.balls),
            strike_rate: non_negative(raw.sr),
            fours: non_negative(raw.fours),
            sixes: non_negative(raw.sixes),
            how_out: non_blank(raw.howout),
            source: non_blank(raw.source),
        }
        .normalized()
    }
}

impl From<RawBowlingRow> for BowlingInnings {
    fn from(raw: RawBowlingRow) -> Self {
        BowlingInnings {
            player: raw.bowlername,
            tournament_key: raw.tournamentkey.trim().to_string(),
            match_id: raw.matchid.trim().to_string(),
            innings_no: whole_number(raw.inningsno),
            bowling_team: raw.bowlingteam.trim().to_string(),
            opponent: raw.opponent.unwrap_or_default(),
            overs: raw.overs.trim().to_string(),
            balls_bowled: 0,
            runs_conceded: non_negative(raw.runsconceded),
            wickets: non_negative(raw.wickets),
            economy: non_negative(raw.econ),
            source: non_blank(raw.source),
        }
        .normalized()
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

/// Open a CSV reader with trimmed, lower-cased headers and return it along
/// with the capability descriptor derived from those headers.
fn open_reader<R: Read>(rdr: R) -> Result<(csv::Reader<R>, Capabilities), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);
    let headers: csv::StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let capabilities = Capabilities::from_headers(headers.iter());
    debug!("CSV headers: {:?} ({:?})", headers, capabilities);
    reader.set_headers(headers);
    Ok((reader, capabilities))
}

fn load_batting_from_reader<R: Read>(rdr: R) -> Result<BattingTable, csv::Error> {
    let (mut reader, capabilities) = open_reader(rdr)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawBattingRow>() {
        match result {
            Ok(raw) => rows.push(BattingInnings::from(raw)),
            Err(e) => warn!("skipping malformed batting row: {}", e),
        }
    }
    Ok(BattingTable { rows, capabilities })
}

fn load_bowling_from_reader<R: Read>(rdr: R) -> Result<BowlingTable, csv::Error> {
    let (mut reader, capabilities) = open_reader(rdr)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawBowlingRow>() {
        match result {
            Ok(raw) => rows.push(BowlingInnings::from(raw)),
            Err(e) => warn!("skipping malformed bowling row: {}", e),
        }
    }
    Ok(BowlingTable { rows, capabilities })
}

// ---------------------------------------------------------------------------
// Public loaders
// ---------------------------------------------------------------------------

/// Parse a batting export held in memory (an uploaded file, a fixture).
pub fn parse_batting(text: &str, origin: &str) -> Result<BattingTable, IngestError> {
    let table = load_batting_from_reader(text.as_bytes()).map_err(|e| IngestError::Csv {
        path: origin.to_string(),
        source: e,
    })?;
    info!("Loaded {} batting innings from {}", table.rows.len(), origin);
    Ok(table)
}

/// Parse a bowling export held in memory.
pub fn parse_bowling(text: &str, origin: &str) -> Result<BowlingTable, IngestError> {
    let table = load_bowling_from_reader(text.as_bytes()).map_err(|e| IngestError::Csv {
        path: origin.to_string(),
        source: e,
    })?;
    info!("Loaded {} bowling spells from {}", table.rows.len(), origin);
    Ok(table)
}

/// Load the batting export from a CSV file.
pub fn load_batting(path: &Path) -> Result<BattingTable, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let table = load_batting_from_reader(file).map_err(|e| IngestError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Loaded {} batting innings from {}", table.rows.len(), path.display());
    Ok(table)
}

/// Load the bowling export from a CSV file.
pub fn load_bowling(path: &Path) -> Result<BowlingTable, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let table = load_bowling_from_reader(file).map_err(|e| IngestError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Loaded {} bowling spells from {}", table.rows.len(), path.display());
    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Overs notation --

    #[test]
    fn overs_with_balls() {
        assert_eq!(overs_to_balls("3.3"), 21);
        assert_eq!(overs_to_balls("4.3"), 27);
        assert_eq!(overs_to_balls("0.5"), 5);
        assert_eq!(overs_to_balls("10.0"), 60);
    }

    #[test]
    fn overs_whole_only() {
        assert_eq!(overs_to_balls("4"), 24);
        assert_eq!(overs_to_balls("0"), 0);
        assert_eq!(overs_to_balls(" 2 "), 12);
    }

    #[test]
    fn overs_every_ball_count() {
        for n in 0..5u32 {
            for b in 0..=5u32 {
                assert_eq!(overs_to_balls(&format!("{n}.{b}")), n * 6 + b);
            }
        }
    }

    #[test]
    fn overs_malformed_is_zero() {
        assert_eq!(overs_to_balls(""), 0);
        assert_eq!(overs_to_balls("bad"), 0);
        assert_eq!(overs_to_balls("   "), 0);
    }

    #[test]
    fn overs_partial_garbage_keeps_valid_part() {
        assert_eq!(overs_to_balls("3.x"), 18);
        assert_eq!(overs_to_balls("x.3"), 3);
        assert_eq!(overs_to_balls(".4"), 4);
        assert_eq!(overs_to_balls("2."), 12);
    }

    // -- Name / opponent normalization --

    #[test]
    fn names_lower_cased_and_trimmed() {
        assert_eq!(normalize_name("  Virat KOHLI "), "virat kohli");
        assert_eq!(normalize_name(&normalize_name("Virat KOHLI")), "virat kohli");
    }

    #[test]
    fn blank_opponent_becomes_unknown() {
        assert_eq!(normalize_opponent(None), UNKNOWN_OPPONENT);
        assert_eq!(normalize_opponent(Some("")), UNKNOWN_OPPONENT);
        assert_eq!(normalize_opponent(Some("   ")), UNKNOWN_OPPONENT);
        assert_eq!(normalize_opponent(Some(" Titans ")), "Titans");
        assert_eq!(normalize_opponent(Some(UNKNOWN_OPPONENT)), UNKNOWN_OPPONENT);
    }

    #[test]
    fn blank_grouping_label_becomes_unknown() {
        assert_eq!(label_or_unknown(" m7 "), "m7");
        assert_eq!(label_or_unknown("\t"), UNKNOWN_OPPONENT);
    }

    // -- Batting CSV --

    #[test]
    fn batting_csv_full_row() {
        let csv_data = "\
playername,tournamentkey,matchid,inningsno,battingteam,opponent,batpos,runs,balls,sr,fours,sixes,howout
Rahul Mehta,zooterisdt8,m1,1,SUPREMOS XI,Titans,3,45,30,150.0,5,2,c Smith b Jones";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.player, "rahul mehta");
        assert_eq!(row.tournament_key, "zooterisdt8");
        assert_eq!(row.match_id, "m1");
        assert_eq!(row.innings_no, Some(1));
        assert_eq!(row.batting_team, "SUPREMOS XI");
        assert_eq!(row.opponent, "Titans");
        assert_eq!(row.batting_position, Some(3));
        assert_eq!(row.runs, Some(45.0));
        assert_eq!(row.balls, Some(30.0));
        assert_eq!(row.strike_rate, Some(150.0));
        assert_eq!(row.fours, Some(5.0));
        assert_eq!(row.sixes, Some(2.0));
        assert_eq!(row.how_out.as_deref(), Some("c Smith b Jones"));
        assert!(row.source.is_none());

        assert!(table.capabilities.has(OptionalColumn::BattingPosition));
        assert!(table.capabilities.has(OptionalColumn::Opponent));
        assert!(!table.capabilities.has(OptionalColumn::Source));
    }

    #[test]
    fn batting_unparseable_numbers_become_missing() {
        let csv_data = "\
playername,tournamentkey,matchid,inningsno,battingteam,runs,balls,sr,fours,sixes,howout
A,t1,m1,1,X,DNB,-,,abc,1,not out";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.runs, None);
        assert_eq!(row.balls, None);
        assert_eq!(row.strike_rate, None);
        assert_eq!(row.fours, None);
        assert_eq!(row.sixes, Some(1.0));
    }

    #[test]
    fn batting_missing_optional_columns() {
        let csv_data = "\
playername,tournamentkey,matchid,inningsno,battingteam,runs,balls,sr,fours,sixes,howout
A,t1,m1,1,X,10,8,125,1,0,bowled";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        let row = &table.rows[0];
        assert_eq!(row.opponent, UNKNOWN_OPPONENT);
        assert_eq!(row.batting_position, None);
        assert!(!table.capabilities.has(OptionalColumn::Opponent));
        assert!(!table.capabilities.has(OptionalColumn::BattingPosition));
    }

    #[test]
    fn batting_missing_name_column_does_not_fail() {
        let csv_data = "\
tournamentkey,matchid,runs,balls
t1,m1,10,8";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].player, "");
        assert_eq!(table.rows[0].runs, Some(10.0));
    }

    #[test]
    fn headers_are_case_and_space_insensitive() {
        let csv_data = "\
PlayerName , TournamentKey,Runs,Balls,Opponent
Ravi,t1,12,10,  ";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows[0].player, "ravi");
        assert_eq!(table.rows[0].runs, Some(12.0));
        assert_eq!(table.rows[0].opponent, UNKNOWN_OPPONENT);
        assert!(table.capabilities.has(OptionalColumn::Opponent));
    }

    #[test]
    fn batting_blank_howout_is_none() {
        let csv_data = "\
playername,runs,howout
a,10,
b,12,  not out ";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows[0].how_out, None);
        assert_eq!(table.rows[1].how_out.as_deref(), Some("not out"));
    }

    #[test]
    fn batting_negative_and_non_finite_values_are_missing() {
        let csv_data = "\
playername,runs,balls,fours
a,-4,NaN,inf";

        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows[0].runs, None);
        assert_eq!(table.rows[0].balls, None);
        assert_eq!(table.rows[0].fours, None);
    }

    #[test]
    fn empty_batting_csv() {
        let csv_data = "playername,tournamentkey,runs";
        let table = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert!(table.rows.is_empty());
    }

    // -- Bowling CSV --

    #[test]
    fn bowling_csv_derives_balls() {
        let csv_data = "\
bowlername,tournamentkey,matchid,inningsno,bowlingteam,opponent,overs,runsconceded,wickets,econ
Dev SHAH,clt20s_pdf,m7,2,SUPREMOS,Kings,3.3,28,2,8.0
Dev Shah,clt20s_pdf,m8,1,SUPREMOS,,4,30,1,7.5
Dev Shah,clt20s_pdf,m9,1,SUPREMOS,Kings,,12,x,";

        let table = load_bowling_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].player, "dev shah");
        assert_eq!(table.rows[0].balls_bowled, 21);
        assert_eq!(table.rows[0].overs, "3.3");
        assert_eq!(table.rows[0].innings_no, Some(2));
        assert_eq!(table.rows[0].economy, Some(8.0));
        assert_eq!(table.rows[1].balls_bowled, 24);
        assert_eq!(table.rows[1].opponent, UNKNOWN_OPPONENT);
        assert_eq!(table.rows[2].balls_bowled, 0);
        assert_eq!(table.rows[2].wickets, None);
        assert_eq!(table.rows[2].economy, None);
    }

    #[test]
    fn bowling_without_opponent_column() {
        let csv_data = "\
bowlername,tournamentkey,matchid,overs,runsconceded,wickets
a,t,m,2.0,14,1";

        let table = load_bowling_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.rows[0].opponent, UNKNOWN_OPPONENT);
        assert!(!table.capabilities.has(OptionalColumn::Opponent));
    }

    #[test]
    fn source_column_detected() {
        let csv_data = "\
bowlername,overs,source
a,1.1, pdf ";

        let table = load_bowling_from_reader(csv_data.as_bytes()).unwrap();
        assert!(table.capabilities.has(OptionalColumn::Source));
        assert_eq!(table.rows[0].source.as_deref(), Some("pdf"));
    }

    // -- Idempotence --

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let csv_data = "\
bowlername,opponent,overs
  MiXeD Case ,,2.4";
        let table = load_bowling_from_reader(csv_data.as_bytes()).unwrap();
        let once = table.rows[0].clone();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);

        let bat_csv = "\
playername,opponent
UPPER,Rivals";
        let bat = load_batting_from_reader(bat_csv.as_bytes()).unwrap();
        let once = bat.rows[0].clone();
        assert_eq!(once.clone().normalized(), once);
    }

    // -- Capabilities --

    #[test]
    fn capabilities_from_headers() {
        let caps = Capabilities::from_headers(["playername", "batpos", "runs"]);
        assert!(caps.has(OptionalColumn::BattingPosition));
        assert!(!caps.has(OptionalColumn::Opponent));

        let all = Capabilities::all();
        for c in OptionalColumn::ALL {
            assert!(all.has(c));
        }
        assert!(!Capabilities::default().has(OptionalColumn::Source));
    }

    // -- Path loaders --

    #[test]
    fn missing_file_is_io_error() {
        let err = load_batting(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
        let err = load_bowling(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
