//! HTTP server bootstrap

use crate::application::QuestionService;
use crate::error::Result;
use crate::http::{routes::router, state::AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve the question bank until Ctrl-C is received
pub async fn serve(addr: SocketAddr, questions: QuestionService) -> Result<()> {
    let location = questions.repository().path.display().to_string();
    let app = router(AppState::new(questions));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, data = %location, "questions API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
