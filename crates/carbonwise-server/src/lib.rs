//! carbonwise-server - HTTP API for carbonwise
//!
//! Exposes the analytics core behind a single insight-generation endpoint
//! plus a health probe. Requests are stateless: every invocation pulls a
//! fresh activity window from the provider and allocates fresh results.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Run the API server
pub async fn run(state: AppState, port: u16) -> Result<()> {
    let router = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Insights API listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
