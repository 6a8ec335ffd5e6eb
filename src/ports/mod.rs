//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. Adapters implement these
//! ports.
//!
//! - `PaymentGateway` - the processor's order-creation API
//! - `PaymentStore` - persistence hook for order/verification records
//! - `RateLimiter` - fixed-window request limiting

mod payment_gateway;
mod payment_store;
mod rate_limiter;

pub use payment_gateway::{CreateOrder, GatewayError, GatewayOrder, PaymentGateway};
pub use payment_store::{OrderRecord, PaymentStore, StoreError, VerificationRecord};
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};
