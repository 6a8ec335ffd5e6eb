//! Rate limiting middleware for axum.
//!
//! This middleware enforces rate limits using the `RateLimiter` port,
//! checking the process-wide window first and the per-address window second.
//!
//! Rate limit status is returned in standard HTTP headers:
//! - `X-RateLimit-Limit`: Maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: Requests remaining in the current window
//! - `X-RateLimit-Reset`: Unix timestamp when the window resets
//! - `Retry-After`: Seconds to wait (only on 429 response)
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, Router};
//! use std::sync::Arc;
//!
//! let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::with_defaults());
//!
//! let app = Router::new()
//!     .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::payment::MessageResponse;
use crate::ports::{RateLimitKey, RateLimitResult, RateLimiter};

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<dyn RateLimiter>;

/// Standard rate limit header names.
pub mod headers {
    use super::HeaderName;

    /// Maximum requests allowed in the window.
    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    /// Requests remaining in the current window.
    pub static X_RATELIMIT_REMAINING: HeaderName =
        HeaderName::from_static("x-ratelimit-remaining");
    /// Unix timestamp when the window resets.
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

/// Rate limiting middleware that checks global and per-address limits.
///
/// This middleware:
/// 1. Extracts the client IP from `ConnectInfo` or forwarded headers
/// 2. Checks the global rate limit first
/// 3. Checks the per-address rate limit
/// 4. Returns 429 Too Many Requests if any limit is exceeded
/// 5. Adds rate limit headers to allowed responses
///
/// The limiter failing is not a reason to refuse traffic; checks fail open
/// with a warning.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = extract_client_ip(&request, connect_info.as_ref());

    // Global limit is checked first for infrastructure protection
    match limiter.check(RateLimitKey::global()).await {
        Ok(RateLimitResult::Denied(denied)) => {
            return rate_limit_response(denied.limit, denied.retry_after_secs);
        }
        Err(e) => {
            tracing::warn!("rate limiter unavailable: {}", e);
        }
        Ok(RateLimitResult::Allowed(_)) => {}
    }

    // Per-address rate limit
    let ip_status = if let Some(ip) = &client_ip {
        match limiter.check(RateLimitKey::ip(ip)).await {
            Ok(RateLimitResult::Denied(denied)) => {
                return rate_limit_response(denied.limit, denied.retry_after_secs);
            }
            Ok(RateLimitResult::Allowed(status)) => Some(status),
            Err(e) => {
                tracing::warn!("rate limiter unavailable for address check: {}", e);
                None
            }
        }
    } else {
        None
    };

    // All checks passed - continue to handler
    let mut response = next.run(request).await;

    if let Some(status) = ip_status {
        add_rate_limit_headers(&mut response, status.limit, status.remaining, status.reset_at);
    }

    response
}

/// Extract client IP from the request, checking forwarded headers first.
///
/// Order of precedence:
/// 1. X-Forwarded-For header (first IP in list)
/// 2. X-Real-IP header
/// 3. ConnectInfo socket address
fn extract_client_ip<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        // Take the first IP (client IP, before any proxies)
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
    {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return Some(real_ip.to_string());
        }
    }

    connect_info.map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// Build the 429 response with retry headers.
fn rate_limit_response(limit: u32, retry_after_secs: u32) -> Response {
    let body = MessageResponse::failure("Too many requests, please try again later.");
    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&limit.to_string()) {
        headers.insert(headers::X_RATELIMIT_LIMIT.clone(), value);
    }
    headers.insert(
        headers::X_RATELIMIT_REMAINING.clone(),
        HeaderValue::from_static("0"),
    );
    if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
        headers.insert(axum::http::header::RETRY_AFTER, value);
    }

    response
}

/// Attach rate limit status headers to an allowed response.
fn add_rate_limit_headers(response: &mut Response, limit: u32, remaining: u32, reset_at: u64) {
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&limit.to_string()) {
        headers.insert(headers::X_RATELIMIT_LIMIT.clone(), value);
    }
    if let Ok(value) = HeaderValue::from_str(&remaining.to_string()) {
        headers.insert(headers::X_RATELIMIT_REMAINING.clone(), value);
    }
    if let Ok(value) = HeaderValue::from_str(&reset_at.to_string()) {
        headers.insert(headers::X_RATELIMIT_RESET.clone(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_headers(headers: &[(&str, &str)]) -> axum::http::Request<()> {
        let mut builder = axum::http::Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn forwarded_for_takes_precedence() {
        let request = request_with_headers(&[
            ("X-Forwarded-For", "203.0.113.7, 10.0.0.1"),
            ("X-Real-IP", "198.51.100.2"),
        ]);

        assert_eq!(
            extract_client_ip(&request, None),
            Some("203.0.113.7".to_string())
        );
    }

    #[test]
    fn real_ip_used_when_no_forwarded_for() {
        let request = request_with_headers(&[("X-Real-IP", "198.51.100.2")]);

        assert_eq!(
            extract_client_ip(&request, None),
            Some("198.51.100.2".to_string())
        );
    }

    #[test]
    fn connect_info_is_the_fallback() {
        let request = request_with_headers(&[]);
        let connect_info = ConnectInfo("203.0.113.9:4711".parse::<SocketAddr>().unwrap());

        assert_eq!(
            extract_client_ip(&request, Some(&connect_info)),
            Some("203.0.113.9".to_string())
        );
    }

    #[test]
    fn no_source_yields_none() {
        let request = request_with_headers(&[]);
        assert_eq!(extract_client_ip(&request, None), None);
    }

    #[test]
    fn rate_limit_response_is_429_with_retry_after() {
        let response = rate_limit_response(60, 30);
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[axum::http::header::RETRY_AFTER], "30");
        assert_eq!(response.headers()["x-ratelimit-remaining"], "0");
    }
}
