use anyhow::Context;

use erpgate_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    erpgate_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let app = erpgate_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.http_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
