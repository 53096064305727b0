use tracing::info;

use catalog_service::config::Config;
use catalog_service::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Catalog Service  —  Rust + Axum     ║");
    info!("║  departments · products              ║");
    info!("╚══════════════════════════════════════╝");

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState { config };

    let app = build_router(state);

    info!("Listening on http://{}", addr);
    info!(
        "Quick-start: GET http://{}/test-db-connection  →  then POST http://{}/departments",
        addr, addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
