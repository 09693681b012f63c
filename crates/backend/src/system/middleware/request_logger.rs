use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs one line per request: status, method, path, response size and duration
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();
    let size = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    if response.status().is_success() {
        tracing::info!(
            "{} {:>6} {} | {:>5}ms | {} bytes",
            status,
            method,
            uri.path(),
            duration.as_millis(),
            size
        );
    } else {
        tracing::warn!(
            "{} {:>6} {} | {:>5}ms | {} bytes",
            status,
            method,
            uri.path(),
            duration.as_millis(),
            size
        );
    }

    response
}
