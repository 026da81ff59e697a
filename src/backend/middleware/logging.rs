/**
 * Request Logging Middleware
 *
 * Logs every request's method, path and headers at debug level, and the
 * resulting status.
 *
 * Bodies are not logged here; handlers log what they decode.
 */

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    tracing::debug!("[Request] {} {} headers: {:?}", method, path, request.headers());

    let response = next.run(request).await;

    tracing::debug!("[Request] {} {} -> {}", method, path, response.status());
    response
}
