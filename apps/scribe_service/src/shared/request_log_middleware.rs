use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;

pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        timestamp = %Utc::now().to_rfc3339(),
        method = %request.method(),
        path = %request.uri().path(),
        "Incoming request"
    );

    next.run(request).await
}
