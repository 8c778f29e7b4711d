use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use adalat_config::load_settings;
use adalat_server::{build_state, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = std::env::var("ADALAT_ENV").ok();
    let settings = load_settings(env.as_deref()).context("failed to load settings")?;

    // The similarity index is built and served externally; deployments
    // wire a backend in here once one is reachable.
    let state = build_state(&settings, None).context("failed to build application state")?;
    let app = router(state, &settings.server).context("failed to build router")?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "Legal assistant API listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
