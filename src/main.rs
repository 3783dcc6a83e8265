use donation_hub::{
    config::{database, site},
    core::impact,
    errors::Result,
    web::{self, AppState},
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal: env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the site configuration
    let site_config = site::load_default_config()
        .inspect_err(|e| error!("Failed to load site configuration: {}", e))?;

    // 4. Connect and create any missing tables
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed impact counters that are not there yet
    impact::seed_impact_counters(&db, &site_config)
        .await
        .inspect(|inserted| info!("Seeded {} impact counters.", inserted))
        .inspect_err(|e| error!("Failed to seed impact counters: {}", e))?;

    // 6. Serve the site
    let app = web::create_router(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(&site_config.server.bind_address).await?;
    info!("Server running on http://{}", site_config.server.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
