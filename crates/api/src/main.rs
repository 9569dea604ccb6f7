use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openchoreo_observability::init();

    let bind = std::env::var("OPENCHOREO_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = openchoreo_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
