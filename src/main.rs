use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod errors;
mod form;
mod mail;
mod models;
mod routes;
mod state;

use mail::SmtpMailer;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging ───────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── Config ────────────────────────────────────────────────
    let config = config::Config::from_env()?;
    tracing::info!(
        smtp_host = %config.smtp_host,
        smtp_port = config.smtp_port,
        "Starting Vertex contact form backend"
    );

    // Submissions are refused until the deployment is fixed, but the
    // service still starts so the status routes stay reachable.
    let missing = config.missing_vars();
    if !missing.is_empty() {
        tracing::warn!(missing = %missing.join(", "), "Email delivery is not configured");
    }

    let addr: SocketAddr = format!("{}:{}", config.backend_host, config.backend_port).parse()?;

    let app_state = AppState::new(config, SmtpMailer);

    // ── Router ────────────────────────────────────────────────
    let app: Router = routes::all_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
