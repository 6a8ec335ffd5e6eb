//! HTTP adapters - REST API implementation.

pub mod app;
pub mod middleware;
pub mod payment;

// Re-export key types for convenience
pub use app::build_app;
pub use payment::{payment_routes, PaymentAppState};
