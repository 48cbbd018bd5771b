use anyhow::Context;

use depot_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    depot_observability::init(config.log_directive());

    if config.debug {
        tracing::warn!("DEPOT_DEBUG enabled; logging at debug level");
    }

    let app = depot_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
