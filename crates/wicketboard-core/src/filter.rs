// Filter engine: conjunctive row predicates shared by both innings tables.
//
// Every predicate is optional; an inactive predicate lets every row through.
// Active predicates are AND-ed, so the order in which they are set (or
// applied in sequence) never changes the result. An empty result is a normal
// outcome.

use std::collections::BTreeSet;

use crate::ingest::{normalize_name, BattingInnings, BowlingInnings};

/// Fields the filter engine needs from a row.
pub trait InningsRecord {
    /// Lower-cased player (batter or bowler) name.
    fn player(&self) -> &str;
    fn tournament_key(&self) -> &str;
    /// The side this row belongs to (batting team for batting rows,
    /// bowling team for bowling rows).
    fn team(&self) -> &str;
    fn match_id(&self) -> &str;
}

impl InningsRecord for BattingInnings {
    fn player(&self) -> &str {
        &self.player
    }
    fn tournament_key(&self) -> &str {
        &self.tournament_key
    }
    fn team(&self) -> &str {
        &self.batting_team
    }
    fn match_id(&self) -> &str {
        &self.match_id
    }
}

impl InningsRecord for BowlingInnings {
    fn player(&self) -> &str {
        &self.player
    }
    fn tournament_key(&self) -> &str {
        &self.tournament_key
    }
    fn team(&self) -> &str {
        &self.bowling_team
    }
    fn match_id(&self) -> &str {
        &self.match_id
    }
}

/// A set of row predicates. Build with the chained setters:
///
/// ```
/// use wicketboard_core::filter::InningsFilter;
///
/// let filter = InningsFilter::new()
///     .player("Rahul Mehta")
///     .tournaments(["zooterisdt8"])
///     .team_contains("supremos");
/// assert!(filter.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InningsFilter {
    player: Option<String>,
    tournaments: BTreeSet<String>,
    /// Lower-cased, trimmed; empty means inactive.
    team_query: String,
    match_id: Option<String>,
}

impl InningsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact player identity (compared after name normalization).
    pub fn player(mut self, name: &str) -> Self {
        self.player = Some(normalize_name(name));
        self
    }

    /// Restrict to a set of tournament keys. An empty set means all.
    pub fn tournaments<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tournaments = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive literal substring match on the row's team. A blank
    /// query means all.
    pub fn team_contains(mut self, query: &str) -> Self {
        self.team_query = query.trim().to_lowercase();
        self
    }

    /// Exact match identity.
    pub fn match_id(mut self, id: &str) -> Self {
        self.match_id = Some(id.trim().to_string());
        self
    }

    /// Whether any predicate is active.
    pub fn is_active(&self) -> bool {
        self.player.is_some()
            || !self.tournaments.is_empty()
            || !self.team_query.is_empty()
            || self.match_id.is_some()
    }

    /// Test one row against every active predicate.
    pub fn matches<R: InningsRecord>(&self, row: &R) -> bool {
        if let Some(ref player) = self.player {
            if row.player() != player {
                return false;
            }
        }
        if !self.tournaments.is_empty() && !self.tournaments.contains(row.tournament_key()) {
            return false;
        }
        if !self.team_query.is_empty() && !row.team().to_lowercase().contains(&self.team_query) {
            return false;
        }
        if let Some(ref id) = self.match_id {
            if row.match_id() != id {
                return false;
            }
        }
        true
    }

    /// The rows that satisfy every active predicate, in input order.
    pub fn apply<'a, R: InningsRecord>(&self, rows: &'a [R]) -> Vec<&'a R> {
        rows.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Narrow an already-filtered selection further.
    pub fn refine<'a, R: InningsRecord>(&self, rows: &[&'a R]) -> Vec<&'a R> {
        rows.iter().copied().filter(|r| self.matches(*r)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
