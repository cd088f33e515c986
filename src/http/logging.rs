//! Request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};

const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Log every request with its status and latency
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    if elapsed > SLOW_REQUEST {
        tracing::warn!(%method, %uri, ?elapsed, "slow request");
    }

    tracing::info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "request handled"
    );

    response
}
