/*****************************************************************************************
 *
 *  tallyboard – Quiz Answer Tally & Leaderboard Microservice
 *  ---------------------------------------------------------
 *
 *  In-memory only: tallies live for the lifetime of the process.
 *
 *****************************************************************************************/

use anyhow::Context;
use tokio::net::TcpListener;
use axum::serve;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use tallyboard::app;
use tallyboard::config::AppConfig;
use tallyboard::state::AnswerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    //
    // ────────────────────────────────────────────────────────
    //  Load configuration (config.json + PORT override)
    // ────────────────────────────────────────────────────────
    //
    let (cfg, cfg_path) = AppConfig::load().context("Failed to load configuration")?;

    //
    // ────────────────────────────────────────────────────────
    //  Configure logging
    // ────────────────────────────────────────────────────────
    //
    let (level, level_err) = match cfg.level_filter() {
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::INFO, Some(e)),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if let Some(e) = level_err {
        tracing::warn!("{e}; falling back to info");
    }

    tracing::info!("Starting tallyboard…");
    match &cfg_path {
        Some(path) => tracing::info!("Loaded config.json from {}", path.display()),
        None => tracing::info!("No config.json found, using defaults"),
    }
    tracing::info!("Loaded configuration: {:?}", cfg);

    //
    // ────────────────────────────────────────────────────────
    //  Create answer store and build Axum app
    // ────────────────────────────────────────────────────────
    //
    let store = AnswerStore::new();
    let app = app::build_app(store, cfg.clone());

    //
    // ────────────────────────────────────────────────────────
    //  Bind server and start listening
    // ────────────────────────────────────────────────────────
    //
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on http://{}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await
        .context("Server error")?;

    Ok(())
}

//
// ─────────────────────────────────────────────────────────────
//  Graceful shutdown handler
// ─────────────────────────────────────────────────────────────
//
async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }

    tracing::warn!("CTRL+C received, shutting down. Tallies are not persisted.");
}
