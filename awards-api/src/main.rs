//! awards-api - Awarded producer interval service
//!
//! Loads the nomination CSV into SQLite at startup, then serves the
//! producer win-interval report and health endpoints over HTTP.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use awards_api::{build_router, ingest, store, AppState};
use awards_common::{config, db};

/// Command-line arguments for awards-api
#[derive(Parser, Debug)]
#[command(name = "awards-api")]
#[command(about = "Awarded producer interval microservice")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "AWARDS_API_PORT")]
    port: u16,

    /// SQLite database path (overrides env and config file)
    #[arg(short, long)]
    database: Option<String>,

    /// Nomination CSV loaded at startup (overrides env and config file)
    #[arg(short, long)]
    movie_csv: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "awards_api=info,awards_common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting awards-api v{}", env!("CARGO_PKG_VERSION"));

    let db_path = config::resolve_database_path(args.database.as_deref());
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    // The nomination list is reloaded from scratch on every boot
    store::clear_movies(&pool)
        .await
        .context("Failed to clear movies table")?;

    let csv_path = config::resolve_movie_csv_path(args.movie_csv.as_deref());
    match ingest::load_movie_csv(&pool, &csv_path).await {
        Ok(report) => {
            info!(
                "Loaded {} movies from {} ({} rejected)",
                report.imported,
                csv_path.display(),
                report.rejected
            );
        }
        Err(e) => {
            // Startup continues; the interval endpoint reports 404 until
            // data is loaded
            error!("Error importing CSV {}: {}", csv_path.display(), e);
        }
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("awards-api listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
