use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_reservation::{config::Config, database::Database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seat reservation app");

    // The database file is provisioned out of band; refuse to invent one
    if !Path::new(&config.database.path).exists() {
        anyhow::bail!("database file {} not found", config.database.path);
    }

    let db = Database::new(
        &format!("sqlite:{}", config.database.path),
        config.database.pool_size,
    )
    .await?;
    info!("Database connected");

    db.run_migrations().await?;

    let app_state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let app = seat_reservation::router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.app.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
