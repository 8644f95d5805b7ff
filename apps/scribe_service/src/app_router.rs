use axum::{middleware, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    app_module::{AppState, Gateway},
    health::health_controller,
    scripting::scripting_controller::scripting_router,
    shared::{
        api_error::panic_response, origin_middleware::enforce_allowed_origin,
        rate_limit_middleware::rate_limit, request_log_middleware::log_request,
    },
};

pub fn application_router() -> Router {
    Router::new()
        .route("/api/health", get(health_controller::health))
        .route("/api/keep-alive", get(health_controller::keep_alive))
        .nest("/api", scripting_router())
}

/// Routes wrapped in the ingress stack, outermost first: tracing, panic
/// guard, request log, origin check, CORS, rate limit.
pub fn application(state: AppState, gateway: Gateway) -> Router {
    let cors = gateway.allowed_origins.cors_layer();

    Router::new().merge(application_router()).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn(log_request))
            .layer(middleware::from_fn_with_state(
                gateway.allowed_origins,
                enforce_allowed_origin,
            ))
            .layer(cors)
            .layer(middleware::from_fn_with_state(
                gateway.rate_limiter,
                rate_limit,
            ))
            .layer(Extension(state))
            .into_inner(),
    )
}
