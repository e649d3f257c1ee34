// Data access: where the two innings tables come from, and the per-session
// cache that holds them.
//
// The engine never reaches for global state. Callers inject an
// `InningsSource`; a `Session` loads it once, shares the result read-only,
// and only loads again when told to (`invalidate` / `reload`).

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::DataPaths;
use crate::ingest::{self, BattingTable, BowlingTable, IngestError};

// ---------------------------------------------------------------------------
// Scorebook
// ---------------------------------------------------------------------------

/// Both innings tables for one session. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Scorebook {
    pub batting: BattingTable,
    pub bowling: BowlingTable,
    pub loaded_at: DateTime<Local>,
}

impl Scorebook {
    pub fn new(batting: BattingTable, bowling: BowlingTable) -> Self {
        Scorebook {
            batting,
            bowling,
            loaded_at: Local::now(),
        }
    }

    /// A scorebook with no rows at all.
    pub fn empty() -> Self {
        Self::new(BattingTable::default(), BowlingTable::default())
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Anything that can produce the two innings tables.
pub trait InningsSource {
    /// Short human-readable origin, e.g. the file paths.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Scorebook, IngestError>;
}

/// CSV exports on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    pub batting: PathBuf,
    pub bowling: PathBuf,
}

impl CsvFileSource {
    pub fn new(batting: impl Into<PathBuf>, bowling: impl Into<PathBuf>) -> Self {
        CsvFileSource {
            batting: batting.into(),
            bowling: bowling.into(),
        }
    }

    pub fn from_paths(paths: &DataPaths) -> Self {
        Self::new(&paths.batting, &paths.bowling)
    }
}

impl InningsSource for CsvFileSource {
    fn describe(&self) -> String {
        format!("{} + {}", self.batting.display(), self.bowling.display())
    }

    fn load(&self) -> Result<Scorebook, IngestError> {
        let batting = ingest::load_batting(&self.batting)?;
        let bowling = ingest::load_bowling(&self.bowling)?;
        Ok(Scorebook::new(batting, bowling))
    }
}

/// CSV text already in memory, e.g. an uploaded file.
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    pub name: String,
    pub batting: String,
    pub bowling: String,
}

impl CsvTextSource {
    pub fn new(name: &str, batting: &str, bowling: &str) -> Self {
        CsvTextSource {
            name: name.to_string(),
            batting: batting.to_string(),
            bowling: bowling.to_string(),
        }
    }
}

impl InningsSource for CsvTextSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Scorebook, IngestError> {
        let batting = ingest::parse_batting(&self.batting, &format!("{} (batting)", self.name))?;
        let bowling = ingest::parse_bowling(&self.bowling, &format!("{} (bowling)", self.name))?;
        Ok(Scorebook::new(batting, bowling))
    }
}

// ---------------------------------------------------------------------------
// Session cache
// ---------------------------------------------------------------------------

/// Loads a source at most once until explicitly invalidated.
pub struct Session<S: InningsSource> {
    source: S,
    cached: Option<Arc<Scorebook>>,
    generation: u64,
}

impl<S: InningsSource> Session<S> {
    pub fn new(source: S) -> Self {
        Session {
            source,
            cached: None,
            generation: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The loaded tables, loading them on first use.
    pub fn scorebook(&mut self) -> Result<Arc<Scorebook>, IngestError> {
        if let Some(ref book) = self.cached {
            return Ok(Arc::clone(book));
        }
        let book = Arc::new(self.source.load()?);
        self.generation += 1;
        info!(
            "Session load #{} from {}: {} batting innings, {} bowling spells",
            self.generation,
            self.source.describe(),
            book.batting.rows.len(),
            book.bowling.rows.len()
        );
        self.cached = Some(Arc::clone(&book));
        Ok(book)
    }

    /// Whether tables are currently cached.
    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    /// Drop the cached tables; the next `scorebook()` call reloads.
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            info!("Session cache invalidated ({})", self.source.describe());
        }
    }

    /// Invalidate and load again immediately.
    pub fn reload(&mut self) -> Result<Arc<Scorebook>, IngestError> {
        self.invalidate();
        self.scorebook()
    }

    /// Swap in a new source (a new upload) and drop anything cached from the
    /// old one.
    pub fn replace_source(&mut self, source: S) {
        self.source = source;
        self.invalidate();
    }

    /// Number of loads performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
