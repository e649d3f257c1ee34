// Library root: the derived-metrics and aggregation engine behind the
// cricket innings dashboard. The terminal front end lives in wicketboard-tui
// and queries it through `dashboard::Dashboard`.

pub mod config;
pub mod dashboard;
pub mod filter;
pub mod ingest;
pub mod metrics;
pub mod source;
pub mod tournament;
pub mod trend;
