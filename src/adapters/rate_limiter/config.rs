//! Rate limit configuration.

use serde::Deserialize;

/// Limits for one fixed-window scope.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowLimit {
    /// Requests allowed per window.
    pub requests_per_window: u32,

    /// Window length in seconds.
    pub window_secs: u32,
}

/// Rate limiter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Process-wide ceiling across all clients.
    pub global: WindowLimit,

    /// Per client address limit.
    pub per_ip: WindowLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global: WindowLimit {
                requests_per_window: 1000,
                window_secs: 60,
            },
            per_ip: WindowLimit {
                requests_per_window: 60,
                window_secs: 60,
            },
        }
    }
}
