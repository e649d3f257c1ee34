// Tournament display labels.
//
// Source exports identify tournaments by an opaque key (e.g. "zooterisdt8").
// The dashboard shows a human-readable label instead; unknown keys pass
// through verbatim.

use std::collections::HashMap;

/// Built-in key → label table.
const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("zootermt20cb3", "Zooter Pink Ball"),
    ("zooterisdt8", "Zooter ISDT"),
    ("jfscdpl202526", "JFSC Dad's"),
    ("clt20s_pdf", "JFSC CLT20"),
];

/// Lookup from tournament key to display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentLabels {
    labels: HashMap<String, String>,
}

impl TournamentLabels {
    /// The fixed table of known tournaments.
    pub fn builtin() -> Self {
        TournamentLabels {
            labels: BUILTIN_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Merge extra labels over the current table. Later entries win.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (key, label) in overrides {
            self.labels.insert(key.trim().to_string(), label.clone());
        }
        self
    }

    /// Display label for `key`, or the key itself when it is not in the table.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for TournamentLabels {
    fn default() -> Self {
        Self::builtin()
    }
}
