//! HTTP DTOs (Data Transfer Objects) for the payment endpoints.
//!
//! These types define the JSON request/response structure of the API and
//! serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::ports::GatewayOrder;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /create-order`.
///
/// `amount` stays a raw JSON value so a numeric string can be accepted and a
/// missing field distinguished from a malformed one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderBody {
    /// Amount in major currency units.
    #[serde(default)]
    pub amount: Option<serde_json::Value>,

    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request body for `POST /verify-payment`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentBody {
    /// Gateway order id from checkout.
    #[serde(default)]
    pub razorpay_order_id: Option<String>,

    /// Gateway payment id from checkout.
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,

    /// Hex HMAC-SHA256 signature from checkout.
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a successfully created order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderCreatedResponse {
    pub success: bool,

    /// The processor's order object, relayed verbatim.
    pub order: GatewayOrder,
}

impl OrderCreatedResponse {
    pub fn new(order: GatewayOrder) -> Self {
        Self {
            success: true,
            order,
        }
    }
}

/// Uniform `{success, message}` body used by every non-order response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Create a success response.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
