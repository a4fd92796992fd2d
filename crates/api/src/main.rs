//! better-uoa-cal - University of Auckland timetable to iCalendar bridge
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};
use uoacal_lib::utils::init_tracing;
use uoacal_lib::{build_router, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the config so its variables count as overrides
    let dotenv = dotenvy::dotenv();

    let config = uoacal_infra::config::load().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to install tracing subscriber")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => debug!(error = %err, "no .env loaded"),
    }

    let bind_address = config.server.bind_address.clone();
    let context = Arc::new(AppContext::new(config).context("failed to initialise services")?);
    let app = build_router(context);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %listener.local_addr()?, "better-uoa-cal listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("better-uoa-cal stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
