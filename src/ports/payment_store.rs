//! Persistence hook for payment outcomes.
//!
//! The relay itself keeps no durable state; order and verification records
//! are handed to this port for an external store to persist. A no-op
//! implementation is a valid deployment choice, so callers must not treat a
//! store failure as a request failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for recording payment activity.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Record a successfully created order.
    async fn record_order(&self, record: OrderRecord) -> Result<(), StoreError>;

    /// Record the outcome of a signature verification.
    async fn record_verification(&self, record: VerificationRecord) -> Result<(), StoreError>;
}

/// A created order as forwarded to the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Processor-assigned order id.
    pub order_id: String,

    /// Receipt identifier sent with the order.
    pub receipt: String,

    /// Amount in minor units.
    pub amount_minor: i64,

    /// ISO currency code.
    pub currency: String,

    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

/// The outcome of one verification attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Gateway order id supplied by the caller.
    pub order_id: String,

    /// Gateway payment id supplied by the caller.
    pub payment_id: String,

    /// Whether the supplied signature matched.
    pub verified: bool,

    /// When the verification was attempted.
    pub occurred_at: DateTime<Utc>,
}

/// Errors from the payment store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store is unavailable.
    #[error("payment store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn PaymentStore) {}
    }

    #[test]
    fn order_record_serializes_round_trip() {
        let record = OrderRecord {
            order_id: "order_abc".to_string(),
            receipt: "receipt_order_1_0".to_string(),
            amount_minor: 50000,
            currency: "INR".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: OrderRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.order_id, record.order_id);
        assert_eq!(back.amount_minor, 50000);
    }
}
