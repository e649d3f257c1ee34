// Wicketboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (copying defaults on first run)
// 3. Build the CSV session and the app
// 4. Run the TUI until the user quits

use wicketboard_core::config;
use wicketboard_core::source::{CsvFileSource, InningsSource, Session};
use wicketboard_tui::app::App;
use wicketboard_tui::ViewState;

use anyhow::Context;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Wicketboard starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: batting={}, bowling={}, team query {:?}",
        config.data.batting, config.data.bowling, config.trends.team_query
    );

    let labels = config.labels();
    let session = Session::new(CsvFileSource::from_paths(&config.data));
    info!("Data source: {}", session.source().describe());

    let app = App::new(session, labels.clone());
    let view_state = ViewState::from_config(&config.trends, labels);

    wicketboard_tui::run(app, view_state).await?;

    info!("Wicketboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("wicketboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("wicketboard_core=info,wicketboard_tui=info,wicketboard=info,warn")
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
