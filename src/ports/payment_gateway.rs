//! Payment gateway port for external order creation.
//!
//! Defines the contract for the payment processor integration. The processor
//! is treated as an opaque remote dependency: it either returns an order
//! object or fails. A single attempt is made per request; this system
//! performs no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for the processor's order-creation API.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order with the processor.
    async fn create_order(&self, request: CreateOrder) -> Result<GatewayOrder, GatewayError>;
}

/// Request to create an order with the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Amount in the currency's minor unit (paise, cents).
    pub amount_minor: i64,

    /// ISO currency code (e.g. "INR").
    pub currency: String,

    /// Caller-supplied receipt identifier, unique per order.
    pub receipt: String,
}

/// Order object returned by the processor.
///
/// Only the order id is interpreted; every other field is carried through
/// untouched so callers receive the processor's object verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Processor-assigned order id.
    pub id: String,

    /// Remaining processor fields, relayed as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Errors from gateway operations.
///
/// The full error is logged server-side; clients only ever see a generic
/// failure message.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network-level failure reaching the processor.
    #[error("gateway unreachable: {0}")]
    Network(String),

    /// The outbound call exceeded its bounded timeout.
    #[error("gateway request timed out")]
    Timeout,

    /// The processor rejected the request.
    #[error("gateway rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The processor responded with a body that could not be decoded.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),
}
