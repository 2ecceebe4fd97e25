use tracing_subscriber::EnvFilter;

use itinerary_web::{app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("itinerary_web=info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let listener = config.bind().await?;
    let app = app(AppState::new(config));

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
