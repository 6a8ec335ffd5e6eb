//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `rate_limit` - fixed-window request limiting
//! - `security_headers` - helmet-style response headers

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::{rate_limit_middleware, RateLimiterState};
pub use security_headers::security_headers_middleware;
