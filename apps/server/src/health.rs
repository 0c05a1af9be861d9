//! Liveness endpoint.
//!
//! Reports process liveness only; never inspects evaluation outcomes.

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tracing::info;

pub fn router() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind and serve the liveness endpoint until the process exits.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Liveness endpoint listening");
    axum::serve(listener, router()).await
}
