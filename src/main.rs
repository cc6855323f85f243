use esg_insight_api::app::{build_router, build_state};
use esg_insight_api::config::Config;
use esg_insight_api::directory::CompanyDirectory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, seeds the company directory and
/// starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esg_insight_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let directory = CompanyDirectory::seeded()?;
    tracing::info!("Company directory loaded: {} companies", directory.len());

    let addr = config.bind_addr();
    let app = build_router(build_state(directory));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
