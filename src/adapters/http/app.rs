//! Router assembly.
//!
//! Builds the complete application router: payment routes, uniform 404/500
//! handling, and the middleware stack (trace, CORS, timeout, security
//! headers, rate limiting, panic recovery).

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{middleware, Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as CorsAny, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::RateLimiter;

use super::middleware::{rate_limit_middleware, security_headers_middleware};
use super::payment::{payment_routes, MessageResponse, PaymentAppState};

/// Build the application router with the full middleware stack.
pub fn build_app(
    state: PaymentAppState,
    server_config: &ServerConfig,
    limiter: Arc<dyn RateLimiter>,
) -> Router {
    Router::new()
        .merge(payment_routes())
        .with_state(state)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(server_config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server_config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Build the CORS layer from configured origins; permissive when none set.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(CorsAny);

    if origins.is_empty() {
        layer.allow_origin(CorsAny)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// 404 handler for unmatched routes.
async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::failure("API route not found")),
    )
}

/// Uniform 500 for panics escaping a handler; detail stays server-side.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "unhandled failure in request handler");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::failure(
            "Something went wrong! Please try again later.",
        )),
    )
        .into_response()
}
