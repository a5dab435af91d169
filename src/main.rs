use praise_kids::{app, config::AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("praise_kids=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY is not set; generation requests will fail");
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config)?;

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
