use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const CORS_REJECTION_MESSAGE: &str = "Not allowed by CORS";

#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Arc<[String]>,
}

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// A missing or empty origin is not a cross-origin request.
    pub fn permits(&self, origin: Option<&str>) -> bool {
        match origin.map(str::trim) {
            None | Some("") => true,
            Some(origin) => self.origins.iter().any(|allowed| allowed == origin),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

pub async fn enforce_allowed_origin(
    State(allowed): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .map(|value| value.to_str().unwrap_or("<non-ascii>"));

    if !allowed.permits(origin) {
        tracing::warn!(origin = ?origin, "Rejected request from disallowed origin");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": CORS_REJECTION_MESSAGE })),
        )
            .into_response();
    }

    next.run(request).await
}
