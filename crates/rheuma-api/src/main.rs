use tracing_subscriber::EnvFilter;

use rheuma_api::config::ApiConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, indices = rheuma_indices::all_indices().len(), "listening");

    axum::serve(listener, rheuma_api::router(&config)).await?;
    Ok(())
}
