//! HTTP timing middleware
//!
//! Logs method, path, status and latency of every request.

use std::time::Instant;

use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};
use tracing::{debug, warn};

pub async fn request_timing(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.path().to_string();

    let result = next.call(req).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match &result {
        Ok(response) if response.status().is_server_error() => warn!(
            "{} {} -> {} ({:.2} ms)",
            method,
            path,
            response.status().as_u16(),
            elapsed_ms
        ),
        Ok(response) => debug!(
            "{} {} -> {} ({:.2} ms)",
            method,
            path,
            response.status().as_u16(),
            elapsed_ms
        ),
        Err(e) => warn!("{} {} failed: {} ({:.2} ms)", method, path, e, elapsed_ms),
    }

    result
}
